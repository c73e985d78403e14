//! Graph projection of a filtered view, its 2D layout, and the colored
//! scene handed to the presentation layer.

mod layout;
mod project;
mod scene;

pub use layout::{Layout, LayoutEngine, Point, SpringLayout};
pub use project::{project, Edge, GraphProjection};
pub use scene::{EdgeView, GraphScene, NodeView, Tone};

//! SecureGraph — network security visualization dashboard core.
//!
//! Modular structure:
//! - [`records`] — CSV connection records and the session record store
//! - [`filter`] — Control domain, filter criteria and the filter engine
//! - [`aggregate`] — Summary metrics and per-node statistics
//! - [`insights`] — Heuristic anomaly messages
//! - [`graph`] — Graph projection, spring layout and the colored scene
//! - [`pipeline`] — One dashboard cycle over all of the above
//! - [`report`] — Text and JSON renderings
//! - [`logging`] — Structured logging setup

pub mod config;
pub mod error;
pub mod records;
pub mod filter;
pub mod aggregate;
pub mod insights;
pub mod graph;
pub mod pipeline;
pub mod report;
pub mod logging;

pub use config::DashboardConfig;
pub use error::{ControlError, DataLoadError, PipelineError};
pub use records::{ConnectionRecord, RecordStore, RecordTable};
pub use filter::{ControlDomain, ControlState, FilterCriteria, FilteredView, SegmentFilter};
pub use aggregate::{NodeSummary, Summary};
pub use insights::{Insight, InsightReport};
pub use graph::{GraphProjection, GraphScene, LayoutEngine, SpringLayout};
pub use pipeline::{Dashboard, DashboardView};
pub use logging::StructuredLogger;

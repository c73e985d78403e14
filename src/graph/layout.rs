//! 2D layout behind a trait; the default engine is a seeded
//! Fruchterman-Reingold spring layout.

use super::GraphProjection;
use crate::config::LayoutConfig;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node id to coordinates, in the projection's node order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub positions: IndexMap<String, Point>,
}

impl Layout {
    pub fn get(&self, node: &str) -> Option<Point> {
        self.positions.get(node).copied()
    }
}

/// Must be a pure function of the graph and the seed.
pub trait LayoutEngine {
    fn layout(&self, graph: &GraphProjection, seed: u64) -> Layout;
}

/// Spring layout; positions are centered and scaled into [-1, 1].
#[derive(Debug, Clone)]
pub struct SpringLayout {
    /// Optimal distance between nodes
    pub k: f64,
    pub iterations: usize,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl SpringLayout {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            k: config.k,
            iterations: config.iterations,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;

impl LayoutEngine for SpringLayout {
    fn layout(&self, graph: &GraphProjection, seed: u64) -> Layout {
        let n = graph.node_count();
        if n == 0 {
            return Layout::default();
        }
        if n == 1 {
            let positions = graph
                .nodes
                .iter()
                .map(|id| (id.clone(), Point { x: 0.0, y: 0.0 }))
                .collect();
            return Layout { positions };
        }

        // Projection edges are already one per unordered pair; self loops pull nothing.
        let springs: Vec<(usize, usize)> = graph
            .edges
            .iter()
            .filter_map(|e| Some((graph.nodes.get_index_of(&e.source)?, graph.nodes.get_index_of(&e.destination)?)))
            .filter(|(a, b)| a != b)
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.gen::<f64>(), rng.gen::<f64>()]).collect();

        let span = |axis: usize, pos: &[[f64; 2]]| {
            let (lo, hi) = pos
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[axis]), hi.max(p[axis])));
            hi - lo
        };
        let mut temperature = span(0, pos.as_slice()).max(span(1, pos.as_slice())) * 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);
        let k = if self.k > 0.0 { self.k } else { (1.0 / n as f64).sqrt() };

        for _ in 0..self.iterations {
            let mut displacement = vec![[0.0f64; 2]; n];
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let dx = pos[i][0] - pos[j][0];
                    let dy = pos[i][1] - pos[j][1];
                    let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                    let repulsion = k * k / (d * d);
                    displacement[i][0] += dx * repulsion;
                    displacement[i][1] += dy * repulsion;
                }
            }
            for &(a, b) in &springs {
                let dx = pos[a][0] - pos[b][0];
                let dy = pos[a][1] - pos[b][1];
                let attraction = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE) / k;
                displacement[a][0] -= dx * attraction;
                displacement[a][1] -= dy * attraction;
                displacement[b][0] += dx * attraction;
                displacement[b][1] += dy * attraction;
            }
            for (p, disp) in pos.iter_mut().zip(&displacement) {
                let length = (disp[0] * disp[0] + disp[1] * disp[1]).sqrt().max(MIN_DISTANCE);
                p[0] += disp[0] * temperature / length;
                p[1] += disp[1] * temperature / length;
            }
            temperature -= cooling;
        }

        rescale(&mut pos);
        let positions = graph
            .nodes
            .iter()
            .zip(pos)
            .map(|(id, p)| (id.clone(), Point { x: p[0], y: p[1] }))
            .collect();
        Layout { positions }
    }
}

/// Center on the mean and scale so the largest coordinate magnitude is 1.
fn rescale(pos: &mut [[f64; 2]]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p[1]).sum::<f64>() / n;
    for p in pos.iter_mut() {
        p[0] -= cx;
        p[1] -= cy;
    }
    let lim = pos.iter().flat_map(|p| [p[0].abs(), p[1].abs()]).fold(0.0f64, f64::max);
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= lim;
            p[1] /= lim;
        }
    }
}

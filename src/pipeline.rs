//! One dashboard cycle: record store → filter → {aggregate, insights, graph}.
//!
//! Each call re-runs every stage from the cached table; nothing derived is
//! kept between calls.

use crate::aggregate::{node_summaries, summarize, NodeSummary, Summary};
use crate::config::DashboardConfig;
use crate::error::PipelineError;
use crate::filter::{apply_table, ControlDomain, ControlState, FilterCriteria, FilteredView};
use crate::graph::{project, GraphProjection, GraphScene, LayoutEngine, SpringLayout};
use crate::insights::{generate, InsightReport};
use crate::records::{RecordStore, RecordTable};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub generated_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub resource: PathBuf,
    pub digest: String,
    /// Rows in the unfiltered table
    pub total_rows: usize,
    pub domain: ControlDomain,
    pub criteria: FilterCriteria,
    pub summary: Summary,
    pub filtered: FilteredView,
    pub nodes: IndexMap<String, NodeSummary>,
    pub insights: InsightReport,
    pub graph: GraphProjection,
    pub scene: GraphScene,
}

pub struct Dashboard {
    store: RecordStore,
    data_path: PathBuf,
    seed: u64,
    engine: Box<dyn LayoutEngine>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: RecordStore::new(),
            data_path: config.data.path.clone(),
            seed: config.layout.seed,
            engine: Box::new(SpringLayout::from_config(&config.layout)),
        }
    }

    pub fn with_engine(mut self, engine: Box<dyn LayoutEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Point the dashboard at another resource. The previous table is evicted.
    pub fn set_data_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path != self.data_path {
            self.store.invalidate(&self.data_path);
            self.data_path = path;
        }
    }

    /// Re-read the current resource on the next run.
    pub fn reload(&self) -> bool {
        self.store.invalidate(&self.data_path)
    }

    /// Control values the current dataset allows.
    pub fn domain(&self) -> Result<ControlDomain, PipelineError> {
        let table = self.store.load(&self.data_path)?;
        Ok(ControlDomain::from_table(&table))
    }

    pub fn run(&self, controls: &ControlState) -> Result<DashboardView, PipelineError> {
        let table = self.store.load(&self.data_path)?;
        let domain = ControlDomain::from_table(&table);
        let criteria = FilterCriteria::from_controls(controls, &domain)?;
        Ok(self.derive(&table, domain, criteria))
    }

    /// Run the derived stages over an already loaded table.
    pub fn derive(&self, table: &RecordTable, domain: ControlDomain, criteria: FilterCriteria) -> DashboardView {
        let filtered = apply_table(table, &criteria);
        debug!(rows = table.len(), filtered = filtered.len(), ?criteria, "filter applied");

        let summary = summarize(&filtered);
        let nodes = node_summaries(&filtered);
        let insights = generate(&filtered);

        let graph = project(&filtered);
        let layout = self.engine.layout(&graph, self.seed);
        let scene = GraphScene::build(&graph, &layout, &nodes);

        info!(
            session = %self.store.session_id(),
            filtered = summary.total_connections,
            attacks = summary.attack_attempts,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            insights = insights.insights().len(),
            "dashboard cycle complete"
        );

        DashboardView {
            generated_at: Utc::now(),
            session_id: self.store.session_id(),
            resource: table.resource().to_path_buf(),
            digest: table.digest().to_string(),
            total_rows: table.len(),
            domain,
            criteria,
            summary,
            filtered,
            nodes,
            insights,
            graph,
            scene,
        }
    }
}

//! Text and JSON renderings of a [`DashboardView`].

use crate::insights::Severity;
use crate::pipeline::DashboardView;
use comfy_table::{ContentArrangement, Table};
use std::fmt::{self, Write};

pub const TITLE: &str = "SecureGraph: Network Security Visualization Dashboard";

pub fn render_json(view: &DashboardView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn write_report(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "dataset: {} ({} rows)\n", view.resource.display(), view.total_rows)?;

    let mut metrics = new_table(&["Total Connections", "Average Latency (ms)", "Attack Attempts"]);
    metrics.add_row(vec![
        view.summary.total_connections.to_string(),
        format!("{:.2}", view.summary.average_latency_rounded()),
        view.summary.attack_attempts.to_string(),
    ]);
    writeln!(out, "{}\n", metrics)?;

    writeln!(out, "Network Connection Map")?;
    if view.scene.nodes.is_empty() {
        writeln!(out, "(empty graph)\n")?;
    } else {
        let mut nodes = new_table(&["node", "x", "y", "avg latency (ms)", "attacks", "color"]);
        for n in &view.scene.nodes {
            nodes.add_row(vec![
                n.id.clone(),
                format!("{:.3}", n.position.x),
                format!("{:.3}", n.position.y),
                format!("{:.1}", n.mean_latency),
                n.attack_count.to_string(),
                n.tone.node_color().to_string(),
            ]);
        }
        writeln!(out, "{}", nodes)?;

        let mut edges = new_table(&["source", "destination", "latency_ms", "color"]);
        for e in &view.scene.edges {
            edges.add_row(vec![
                e.source.clone(),
                e.destination.clone(),
                e.latency_ms.to_string(),
                e.tone.edge_color().to_string(),
            ]);
        }
        writeln!(out, "{}\n", edges)?;
    }

    writeln!(out, "Network Traffic Data (Filtered)")?;
    let mut rows = new_table(&["", "source", "destination", "latency_ms", "attack_flag", "segment"]);
    for (i, r) in view.filtered.iter().enumerate() {
        rows.add_row(vec![
            i.to_string(),
            r.source.clone(),
            r.destination.clone(),
            r.latency_ms.to_string(),
            r.attack_value().to_string(),
            r.segment.clone(),
        ]);
    }
    writeln!(out, "{}", rows)?;
    writeln!(out, "{} row(s)\n", view.filtered.len())?;

    writeln!(out, "Quick Insights")?;
    for (severity, message) in view.insights.messages() {
        let tag = match severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        writeln!(out, "[{}] {}", tag, message)?;
    }
    Ok(())
}

pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, view);
    out
}

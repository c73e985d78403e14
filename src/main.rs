//! SecureGraph entrypoint: loads the dataset, applies the given control
//! values once, and prints the dashboard as text or JSON.

use clap::{Parser, ValueEnum};
use securegraph::{
    config::DashboardConfig,
    filter::{ControlState, ALL_SEGMENTS},
    logging::StructuredLogger,
    pipeline::Dashboard,
    report,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "securegraph", version, about = "SecureGraph: Network Security Visualization Dashboard")]
struct Cli {
    /// JSON config file
    #[arg(long, env = "SECUREGRAPH_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Dataset CSV (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Segment to show, or "All"
    #[arg(long, default_value = ALL_SEGMENTS)]
    segment: String,

    /// Max latency (ms); defaults to the dataset maximum
    #[arg(long)]
    max_latency: Option<u64>,

    /// Show only attack connections
    #[arg(long)]
    attacks_only: bool,

    /// Layout seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// List segment choices and the latency range, then exit
    #[arg(long)]
    list_controls: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config_path = DashboardConfig::resolve_path(cli.config.as_deref());
    let mut config = DashboardConfig::load(&config_path);
    if let Some(data) = cli.data {
        config.data.path = data;
    }

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %config_path.display(), data = %config.data.path.display(), "SecureGraph starting");

    let mut dashboard = Dashboard::new(&config);
    if let Some(seed) = cli.seed {
        dashboard = dashboard.with_seed(seed);
    }

    if cli.list_controls {
        let domain = dashboard.domain()?;
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&domain)?),
            OutputFormat::Text => {
                println!("Segment: {}", domain.segments.join(", "));
                println!("Max latency (ms): 0..={}", domain.max_latency);
            }
        }
        return Ok(());
    }

    let controls = ControlState {
        segment: cli.segment,
        max_latency: cli.max_latency,
        attacks_only: cli.attacks_only,
    };
    let view = dashboard.run(&controls)?;

    match cli.format {
        OutputFormat::Json => println!("{}", report::render_json(&view)?),
        OutputFormat::Text => print!("{}", report::render_text(&view)),
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kgraph::LayoutConfig;
use kgraph::app::{GraphSource, KnowledgeGraphApp};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with `nodes` and `edges`; the built-in sample is shown when omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// JSON file overriding layout constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the initial node placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::from_file(path).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), "{error}; using default layout config");
            LayoutConfig::default()
        }),
        None => LayoutConfig::default(),
    };

    let source = args.graph.map_or(GraphSource::Sample, GraphSource::File);
    tracing::info!(?source, seed = ?args.seed, "starting kgraph");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kgraph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(KnowledgeGraphApp::new(
                cc,
                source,
                config,
                args.seed,
            )))
        }),
    )
    .map_err(|error| anyhow::anyhow!("Application error: {error}"))?;

    Ok(())
}

mod app;
mod canvas;
mod convert;
mod panels;
mod state;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use panview_core::config::ViewerConfig;
use panview_core::viewer::Viewer;
use tracing_subscriber::EnvFilter;

use crate::canvas::EguiCanvas;

#[derive(Parser)]
#[command(name = "panview", about = "Image viewer with map-style pan and zoom")]
#[command(version)]
struct Cli {
    /// Image to open
    image: Option<PathBuf>,

    /// Viewer settings (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    // Open the image before the window so a bad path fails on the command line.
    let viewer = cli
        .image
        .as_ref()
        .map(|path| {
            Viewer::open(path, EguiCanvas::default(), config.zoom.clone())
                .with_context(|| format!("Failed to open {}", path.display()))
        })
        .transpose()?;

    let title = match &cli.image {
        Some(path) => app::window_title(&config.window.title, path),
        None => config.window.title.clone(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.size)
            .with_min_inner_size(config.window.min_size)
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "panview",
        options,
        Box::new(move |_cc| Ok(Box::new(app::PanViewApp::new(config, viewer)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

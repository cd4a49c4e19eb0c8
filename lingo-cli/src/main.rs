use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod tui;

use crate::tui::TuiApp;
use lingo_core::SettingsManager;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lingo - translate text and hear it spoken")]
struct Args {
    /// Use a specific settings file instead of ~/.lingo/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let local = tokio::task::LocalSet::new();
        local.run_until(async_main()).await
    })
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!("CLI startup: settings={:?}", args.settings);

    let settings_manager = match args.settings {
        Some(path) => SettingsManager::from_path(path)?,
        None => SettingsManager::new()?,
    };

    let mut app = TuiApp::new(settings_manager)?;
    app.run().await
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Create trace directory in user's home
    let home = dirs::home_dir().context("Failed to get home directory")?;
    let trace_dir = home.join(".lingo").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("lingo.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}

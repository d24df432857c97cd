#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use megilance_core::config::STORAGE_FILE;
use megilance_core::{default_data_dir, logging, storage, ClientConfig, Theme};

use crate::context::LaunchContext;

/// Everything `main` resolved before the window opened.
static LAUNCH: OnceLock<LaunchContext> = OnceLock::new();

/// The launch context, or an in-memory default when `main` did not run.
pub fn get_launch_context() -> LaunchContext {
    LAUNCH.get().cloned().unwrap_or_else(LaunchContext::ephemeral)
}

/// MegiLance - freelance marketplace client
#[derive(Parser, Debug)]
#[command(name = "megilance-desktop")]
#[command(about = "MegiLance - AI-assisted freelance marketplace client")]
struct Args {
    /// Data directory for storage, config and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Profile name (creates data dir: megilance-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Force a theme for this run (light or dark)
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Also write a JSONL session log under <data-dir>/logs
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| default_data_dir(args.name.as_deref()));
    let mut config = ClientConfig::load(&data_dir)
        .with_context(|| format!("loading config from {}", data_dir.display()))?;

    // Command line wins over the config file
    if args.theme.is_some() {
        config.theme = args.theme;
    }
    config.log_json |= args.log_json;

    let session = args.name.clone().unwrap_or_else(|| "default".to_string());
    let logs_dir = logging::logs_dir(&data_dir);
    let log_path = logging::init_logging(
        &config.log_filter,
        config.log_json.then_some(logs_dir.as_path()),
        &session,
    )
    .context("initialising logging")?;

    if let Some(path) = log_path {
        tracing::info!(path = %path.display(), "writing JSONL session log");
    }
    tracing::info!("Starting '{}' with data dir: {:?}", session, data_dir);

    let storage = storage::open_or_memory(data_dir.join(STORAGE_FILE));

    let title = match args.name.as_deref() {
        Some(name) if !name.is_empty() => format!("MegiLance - {}", name),
        _ => "MegiLance".to_string(),
    };

    let _ = LAUNCH.set(LaunchContext {
        data_dir,
        config,
        storage,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::{load_settings, validate_source_url};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::{StartupConfig, UserTableApp};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured source url.
    #[arg(long)]
    source_url: Option<String>,
}

fn startup_config(args: Args) -> anyhow::Result<StartupConfig> {
    let mut startup = StartupConfig::from(load_settings()?);
    if let Some(url) = args.source_url {
        validate_source_url(&url)?;
        startup.source_url = url;
    }
    Ok(startup)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let startup = startup_config(Args::parse())?;
    tracing::info!(source_url = %startup.source_url, "starting user table");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    runtime::launch(cmd_rx, ui_tx, startup.request_timeout_secs);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Table")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Table",
        options,
        Box::new(move |_cc| Ok(Box::new(UserTableApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop gui: {err}"))
}

use std::sync::Arc;

mod backend_bridge;
mod clipboard;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{load_settings, normalize_server_url, ReplyClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{EmailReplyApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop form that drafts replies to pasted emails")]
struct Args {
    /// Base URL of the reply generation service.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let raw_server_url = args
        .server_url
        .unwrap_or_else(|| load_settings().server_url);
    let server_url = normalize_server_url(&raw_server_url)
        .with_context(|| format!("unusable server url '{raw_server_url}'"))?;
    tracing::info!(%server_url, "starting email reply desktop app");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let generator = Arc::new(ReplyClient::new(server_url.clone()));
    backend_bridge::runtime::launch(cmd_rx, ui_tx, generator);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Email Generator")
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Email Generator",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(EmailReplyApp::bootstrap(
                cmd_tx,
                ui_rx,
                StartupConfig { server_url },
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop app exited with error: {err}"))
}

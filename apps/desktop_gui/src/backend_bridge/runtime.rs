//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::ReplyGenerator;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Spawns the worker thread. It exits once every command sender is dropped.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    generator: Arc<dyn ReplyGenerator>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                send_event(
                    &ui_tx,
                    UiEvent::Error(UiError::worker_startup(format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    ))),
                );
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            send_event(&ui_tx, UiEvent::Info("Ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateReply { request } => {
                        tracing::info!(tone = request.tone.as_wire(), "backend: generate_reply");
                        let event = match generator.generate_reply(&request).await {
                            Ok(reply) => UiEvent::ReplyGenerated(reply),
                            Err(err) => {
                                tracing::error!("backend: generate_reply failed: {err}");
                                UiEvent::Error(UiError::from_generate_error(&err))
                            }
                        };
                        send_event(&ui_tx, event);
                    }
                }
            }
            tracing::info!("backend worker stopped");
        });
    })
}

fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::warn!("ui event receiver dropped; discarding backend event");
    }
}

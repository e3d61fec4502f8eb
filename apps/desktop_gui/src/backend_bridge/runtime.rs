//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{config::Settings, loader, HttpRecordSource};
use crossbeam_channel::{Receiver, Sender};
use shared::{domain::Record, error::LoadError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. Commands are handled one at a time, so a
/// fetch always settles before the next one starts.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    request_timeout_secs: Option<u64>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                fail_pending_fetches(
                    &cmd_rx,
                    &ui_tx,
                    format!("backend worker startup failure: {err}"),
                );
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchRecords { source_url } => {
                        let settings = Settings {
                            source_url,
                            request_timeout_secs,
                        };
                        let outcome = match HttpRecordSource::from_settings(&settings) {
                            Ok(source) => loader::load(&source).await,
                            Err(err) => Err(LoadError::Network(format!("{err:#}"))),
                        };
                        deliver_outcome(&ui_tx, outcome);
                    }
                }
            }
            tracing::info!("backend command queue closed; worker exiting");
        });
    });
}

/// Without a runtime every fetch fails, but the UI still needs an answer so it
/// can leave the loading state.
fn fail_pending_fetches(
    cmd_rx: &Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
    reason: String,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::FetchRecords { .. } => {
                deliver_outcome(ui_tx, Err(LoadError::Network(reason.clone())));
            }
        }
    }
}

/// Every fetch must reach the UI, so this blocks while the event queue is
/// full. Returns false once the UI side has gone away.
fn deliver_outcome(ui_tx: &Sender<UiEvent>, outcome: Result<Vec<Record>, LoadError>) -> bool {
    match ui_tx.send(UiEvent::RecordsLoaded(outcome)) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("ui event queue disconnected; dropping fetch result");
            false
        }
    }
}

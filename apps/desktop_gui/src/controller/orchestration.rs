//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::reducer::FormState;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::queue("UI command queue is full; please retry")),
        Err(TrySendError::Disconnected(_)) => Err(UiError::queue(
            "Backend command processor disconnected (possible startup/runtime failure)",
        )),
    }
}

/// Starts a submission and hands it to the worker. Returns whether a request
/// is now in flight; a failed hand-off is rolled back into the error state.
pub fn submit_reply_request(state: &mut FormState, cmd_tx: &Sender<BackendCommand>) -> bool {
    let Some(request) = state.begin_submission() else {
        return false;
    };
    match dispatch_backend_command(cmd_tx, BackendCommand::GenerateReply { request }) {
        Ok(()) => true,
        Err(err) => {
            state.apply(UiEvent::Error(err));
            false
        }
    }
}

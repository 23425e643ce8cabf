//! Backend commands queued from UI to backend worker.

use shared::protocol::GenerateReplyRequest;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    GenerateReply { request: GenerateReplyRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::GenerateReply { .. } => "generate_reply",
        }
    }
}

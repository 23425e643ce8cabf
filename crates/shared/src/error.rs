use thiserror::Error;

/// The only failure text shown to users, whatever went wrong.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate email reply. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("failed to reach generation endpoint: {0}")]
    Transport(String),
    #[error("generation endpoint returned status {status}")]
    Status { status: u16 },
    #[error("failed to read generation response body: {0}")]
    Body(String),
}

impl GenerateError {
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

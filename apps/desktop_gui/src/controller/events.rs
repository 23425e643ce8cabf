//! UI/backend events and error modeling for the reply form.

use shared::error::{GenerateError, GENERATION_FAILED_MESSAGE};

pub const WORKER_STARTUP_FAILED_MESSAGE: &str =
    "Reply service worker failed to start; restart the app.";

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    ReplyGenerated(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Response,
    Queue,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    GenerateReply,
}

/// A failure as the form sees it: the detail is for logs, users only ever
/// get [`UiError::user_message`].
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        context: UiErrorContext,
        category: UiErrorCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    /// The form's request never reached the worker.
    pub fn queue(message: impl Into<String>) -> Self {
        Self::new(UiErrorContext::GenerateReply, UiErrorCategory::Queue, message)
    }

    pub fn worker_startup(message: impl Into<String>) -> Self {
        Self::new(
            UiErrorContext::BackendStartup,
            UiErrorCategory::Runtime,
            message,
        )
    }

    pub fn from_generate_error(err: &GenerateError) -> Self {
        let category = match err {
            GenerateError::Transport(_) => UiErrorCategory::Transport,
            GenerateError::Status { .. } => UiErrorCategory::Server,
            GenerateError::Body(_) => UiErrorCategory::Response,
        };
        Self {
            category,
            context: UiErrorContext::GenerateReply,
            message: err.to_string(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self.context {
            UiErrorContext::BackendStartup => WORKER_STARTUP_FAILED_MESSAGE,
            UiErrorContext::GenerateReply => GENERATION_FAILED_MESSAGE,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_errors_keep_their_cause_but_share_one_message() {
        let transport =
            UiError::from_generate_error(&GenerateError::Transport("connection refused".into()));
        let status = UiError::from_generate_error(&GenerateError::Status { status: 500 });

        assert_eq!(transport.category(), UiErrorCategory::Transport);
        assert_eq!(status.category(), UiErrorCategory::Server);
        assert_eq!(transport.user_message(), status.user_message());
        assert_eq!(status.user_message(), GENERATION_FAILED_MESSAGE);
        assert!(status.message().contains("500"));
    }

    #[test]
    fn queue_failures_show_the_generation_message() {
        let err = UiError::queue("Backend command processor disconnected");
        assert_eq!(err.category(), UiErrorCategory::Queue);
        assert_eq!(err.context(), UiErrorContext::GenerateReply);
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
    }

    #[test]
    fn startup_failures_get_their_own_message() {
        let err = UiError::worker_startup("failed to build runtime: out of file descriptors");
        assert_eq!(err.category(), UiErrorCategory::Runtime);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
        assert_eq!(err.user_message(), WORKER_STARTUP_FAILED_MESSAGE);
    }

    #[test]
    fn only_generate_errors_carry_http_categories() {
        let body = UiError::from_generate_error(&GenerateError::Body("truncated".into()));
        assert_eq!(body.category(), UiErrorCategory::Response);
        // Free text mentioning a status code is not reinterpreted.
        let queued = UiError::queue("status 500 while queueing");
        assert_eq!(queued.category(), UiErrorCategory::Queue);
    }
}

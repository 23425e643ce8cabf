//! Form state and the transitions user actions and backend events drive it through.

use std::time::{Duration, Instant};

use shared::{domain::Tone, protocol::GenerateReplyRequest};

use crate::clipboard::ClipboardSink;
use crate::controller::events::{UiError, UiEvent};

pub const COPY_CONFIRMATION_DURATION: Duration = Duration::from_secs(3);

/// Everything the reply form shows. Owned by the app; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    email_content: String,
    tone: Tone,
    generated_reply: String,
    loading: bool,
    error_message: Option<String>,
    dark_mode: bool,
    copy_confirmed_at: Option<Instant>,
    status: String,
}

impl FormState {
    pub fn email_content(&self) -> &str {
        &self.email_content
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn generated_reply(&self) -> &str {
        &self.generated_reply
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn copy_confirmed(&self) -> bool {
        self.copy_confirmed_at.is_some()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn update_email_content(&mut self, text: impl Into<String>) {
        self.email_content = text.into();
    }

    pub fn update_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// Whitespace-only content still counts as content.
    pub fn can_submit(&self) -> bool {
        !self.email_content.is_empty() && !self.loading
    }

    /// Enters the loading state and returns the request to send, or `None`
    /// (leaving the state untouched) when submission is not allowed.
    pub fn begin_submission(&mut self) -> Option<GenerateReplyRequest> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error_message = None;
        self.generated_reply.clear();
        self.status = "Generating reply...".to_string();
        Some(GenerateReplyRequest::new(self.email_content.clone(), self.tone))
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::ReplyGenerated(reply) => {
                self.generated_reply = reply;
                self.error_message = None;
                self.loading = false;
                self.status = "Reply ready".to_string();
            }
            UiEvent::Error(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &UiError) {
        tracing::error!(
            category = ?err.category(),
            context = ?err.context(),
            "reply form error: {}",
            err.message()
        );
        self.error_message = Some(err.user_message().to_string());
        self.loading = false;
        self.status = err.user_message().to_string();
    }

    /// Copies the current reply and raises the confirmation. Returns whether
    /// anything was copied.
    pub fn copy_to_clipboard(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) -> bool {
        if self.generated_reply.is_empty() {
            return false;
        }
        match clipboard.set_text(&self.generated_reply) {
            Ok(()) => {
                self.copy_confirmed_at = Some(now);
                true
            }
            Err(err) => {
                tracing::warn!("failed to copy reply to clipboard: {err}");
                self.status = format!("Failed to copy reply: {err}");
                false
            }
        }
    }

    pub fn copy_confirmation_remaining(&self, now: Instant) -> Option<Duration> {
        self.copy_confirmed_at
            .map(|at| COPY_CONFIRMATION_DURATION.saturating_sub(now.saturating_duration_since(at)))
    }

    pub fn expire_copy_confirmation(&mut self, now: Instant) {
        if self.copy_confirmation_remaining(now) == Some(Duration::ZERO) {
            self.copy_confirmed_at = None;
        }
    }

    pub fn dismiss_copy_confirmation(&mut self) {
        self.copy_confirmed_at = None;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

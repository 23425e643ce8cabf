use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::GenerateError,
    protocol::{reply_text_from_body, GenerateReplyRequest, GENERATE_REPLY_PATH},
};
use tracing::{debug, error, info};

pub mod config;

pub use config::{load_settings, normalize_server_url, Settings};

/// Produces a reply for an email. The HTTP client is the real implementation;
/// tests substitute their own.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(&self, request: &GenerateReplyRequest) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct ReplyClient {
    http: Client,
    server_url: String,
}

impl ReplyClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        Self {
            http,
            server_url: server_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{GENERATE_REPLY_PATH}",
            self.server_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ReplyGenerator for ReplyClient {
    async fn generate_reply(&self, request: &GenerateReplyRequest) -> Result<String, GenerateError> {
        let url = self.endpoint_url();
        info!(
            %url,
            tone = request.tone.as_wire(),
            chars = request.email_content.chars().count(),
            "requesting email reply"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!(%url, "generation request failed: {err}");
                GenerateError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, status = status.as_u16(), "generation endpoint rejected request");
            return Err(GenerateError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| {
            error!(%url, "failed to read generation response: {err}");
            GenerateError::Body(err.to_string())
        })?;
        debug!(bytes = body.len(), "generation response received");

        Ok(reply_text_from_body(&body))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

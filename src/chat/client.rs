use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info, warn};

use super::ChatMessage;

/// Client for posting messages to Google Chat incoming webhooks
#[derive(Clone, Default)]
pub struct ChatClient {
    client: Client,
}

impl ChatClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Post one message to a webhook URL.
    ///
    /// Exactly one attempt is made; there is no retry. A missing URL fails
    /// without touching the network.
    ///
    /// The URL carries the space's `key`/`token` credentials, so it is kept
    /// out of logs and out of the returned error.
    pub async fn send(
        &self,
        webhook_url: Option<&str>,
        message: &ChatMessage,
    ) -> Result<(), ChatClientError> {
        let Some(webhook_url) = webhook_url.filter(|u| !u.is_empty()) else {
            error!("Google Chat webhook URL is not configured, cannot send message");
            return Err(ChatClientError::NotConfigured);
        };

        debug!("Posting message to Google Chat");

        let response = self
            .client
            .post(webhook_url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .json(message)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(error = %e, "Failed to send message to Google Chat");
                ChatClientError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Google Chat returned error");
            return Err(ChatClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Successfully sent message to Google Chat");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("Webhook URL not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Google Chat error (status {status}): {body}")]
    Status { status: u16, body: String },
}

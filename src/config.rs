use serde::Deserialize;

use crate::router::Recipient;

/// Configuration for the ADO → Google Chat bridge.
/// All values are loaded from environment variables.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Username Azure DevOps sends in the Basic auth header
    pub ado_webhook_user: Option<String>,

    /// Password (usually a PAT) Azure DevOps sends in the Basic auth header
    pub ado_webhook_pass: Option<String>,

    /// Google Chat incoming webhook for Hans
    pub google_chat_webhook_url_hans: Option<String>,

    /// Google Chat incoming webhook for Alexis
    pub google_chat_webhook_url_alexis: Option<String>,

    /// Google Chat incoming webhook for Justin
    pub google_chat_webhook_url_justin: Option<String>,

    /// Google Chat incoming webhook for effort review requests
    pub google_chat_webhook_url_effort: Option<String>,

    /// Address to bind the HTTP server (default: "0.0.0.0:3000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

/// Treat empty environment values the same as unset ones.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    /// Environment variables are not prefixed (e.g., ADO_WEBHOOK_USER).
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// Basic auth credentials, only when both halves are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((
            non_empty(&self.ado_webhook_user)?,
            non_empty(&self.ado_webhook_pass)?,
        ))
    }

    /// The Google Chat webhook URL bound to a recipient, if configured.
    pub fn destination(&self, recipient: Recipient) -> Option<&str> {
        let url = match recipient {
            Recipient::Hans => &self.google_chat_webhook_url_hans,
            Recipient::Alexis => &self.google_chat_webhook_url_alexis,
            Recipient::Justin => &self.google_chat_webhook_url_justin,
            Recipient::Effort => &self.google_chat_webhook_url_effort,
        };
        non_empty(url)
    }

    /// Number of recipients with a destination URL.
    pub fn destination_count(&self) -> usize {
        Recipient::FALLBACK_ORDER
            .iter()
            .filter(|r| self.destination(**r).is_some())
            .count()
    }

    pub fn has_any_destination(&self) -> bool {
        self.destination_count() > 0
    }

    /// First configured destination in fallback preference order.
    /// Used for diagnostic messages when a request could not be processed.
    pub fn fallback_destination(&self) -> Option<(Recipient, &str)> {
        Recipient::FALLBACK_ORDER
            .iter()
            .find_map(|r| self.destination(*r).map(|url| (*r, url)))
    }
}

//! Minimal Discord REST client
//!
//! Only the surface this service needs: posting a message into a
//! channel by id, authenticated with the bot token. Used outside the
//! interaction request/response cycle, when a game webhook arrives.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";
const USER_AGENT: &str = "DiscordBot (https://github.com/zkhr/roze, 1.0.0)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Discord REST call errors
#[derive(Debug, Error)]
pub enum DiscordApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("got {status} from Discord: {body}")]
    Status { status: StatusCode, body: String },
}

/// REST client holding the bot token.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    bot_token: String,
    base_url: String,
}

impl DiscordClient {
    /// Create a client for the public Discord API.
    pub fn new(bot_token: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_API_BASE, bot_token)
    }

    /// Create a client against a non-default base URL (tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        bot_token: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            bot_token: bot_token.into(),
            base_url: base_url.into(),
        })
    }

    /// Post a plain-text message into a channel.
    pub async fn post_message(
        &self,
        channel_id: &str,
        content: &str,
    ) -> Result<(), DiscordApiError> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel_id);
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(&json!({ "content": content }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %url, "Discord API call failed");
            return Err(DiscordApiError::Status { status, body });
        }

        Ok(())
    }
}

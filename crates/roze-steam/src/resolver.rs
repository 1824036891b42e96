//! Vanity-name resolver backed by the Steam community website

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::StatusCode;
use tracing::{debug, error};

use roze_core::{ResolveError, SteamId64, SteamResolver};

const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

fn steam_id64_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<steamID64>(\d{17})</steamID64>").expect("pattern is valid")
    })
}

/// Errors from a single community-site lookup.
///
/// Internal to this crate: callers of [`SteamResolver`] only ever see
/// the collapsed [`ResolveError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("profile response carried no steamID64")]
    MissingId,
}

/// Resolver implementation using `https://steamcommunity.com/id/{name}?xml=1`.
pub struct SteamWebResolver {
    http: reqwest::Client,
    base_url: String,
}

impl SteamWebResolver {
    /// Create a resolver with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Create a resolver against a non-default base URL (tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn lookup(&self, name: &str) -> Result<SteamId64, LookupError> {
        let url = format!("{}/id/{}?xml=1", self.base_url, name);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        extract_steam_id64(&body).ok_or(LookupError::MissingId)
    }
}

#[async_trait]
impl SteamResolver for SteamWebResolver {
    async fn resolve(&self, name: &str) -> Result<SteamId64, ResolveError> {
        // Already a SteamID64: skip the round trip entirely.
        if let Ok(id) = SteamId64::parse(name) {
            debug!(name, "input already a SteamID64, skipping lookup");
            return Ok(id);
        }

        match self.lookup(name).await {
            Ok(id) => {
                debug!(name, steam_id = %id, "resolved vanity name");
                Ok(id)
            }
            Err(e) => {
                error!(name, error = %e, "failed to resolve vanity name");
                Err(ResolveError::NotFound(name.to_string()))
            }
        }
    }
}

/// Pull the SteamID64 out of a community profile XML document.
fn extract_steam_id64(xml: &str) -> Option<SteamId64> {
    steam_id64_pattern()
        .captures(xml)
        .and_then(|captures| captures.get(1))
        .map(|id| SteamId64::new(id.as_str()))
}

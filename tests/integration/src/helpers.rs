//! Test helpers for integration tests
//!
//! Spawns the real application (Axum router, PostgreSQL repositories,
//! migrations) on an ephemeral port, with a test keypair wired in as
//! the Discord application key so interaction callbacks can be signed.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use ed25519_dalek::{Signer, SigningKey};
use reqwest::{Client, Response};
use roze_api::{create_app, create_app_state};
use roze_common::{
    AppConfig, AppSettings, DatabaseConfig, DiscordConfig, Environment, ServerConfig,
    SteamConfig, WebhookConfig,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the environment provides a test database.
///
/// Tests return early when it does not, so the suite stays green on
/// machines without PostgreSQL.
pub fn check_test_env() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Deterministic keypair standing in for the Discord application key
pub fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

/// Build an AppConfig for tests, pointing at the env-provided database
fn test_config() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL")?;
    let public_key = hex::encode(test_signing_key().verifying_key().as_bytes());

    Ok(AppConfig {
        app: AppSettings {
            name: "roze-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        discord: DiscordConfig {
            public_key,
            bot_token: "test-token".to_string(),
        },
        steam: SteamConfig { timeout_secs: 2 },
        webhook: WebhookConfig {
            base_url: "http://roze.test".to_string(),
        },
    })
}

/// Generate ids unique across the test run, so repeated runs against
/// the same database never collide.
pub fn unique_id(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{prefix}-{nanos}-{n}")
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    signing_key: SigningKey,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: Client::new(),
            signing_key: test_signing_key(),
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a path
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// POST a JSON body without interaction signing
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// POST an interaction payload with a valid signature
    pub async fn post_interaction(&self, body: &serde_json::Value) -> Result<Response> {
        let raw = serde_json::to_vec(body)?;
        let timestamp = "1700000000";

        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(&raw);
        let signature = hex::encode(self.signing_key.sign(&message).to_bytes());

        Ok(self
            .client
            .post(self.url("/discord"))
            .header("X-Signature-Ed25519", signature)
            .header("X-Signature-Timestamp", timestamp)
            .header("Content-Type", "application/json")
            .body(raw)
            .send()
            .await?)
    }

    /// POST an interaction payload signed with the wrong key
    pub async fn post_badly_signed_interaction(
        &self,
        body: &serde_json::Value,
    ) -> Result<Response> {
        let raw = serde_json::to_vec(body)?;
        let timestamp = "1700000000";
        let wrong_key = SigningKey::from_bytes(&[9u8; 32]);

        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(&raw);
        let signature = hex::encode(wrong_key.sign(&message).to_bytes());

        Ok(self
            .client
            .post(self.url("/discord"))
            .header("X-Signature-Ed25519", signature)
            .header("X-Signature-Timestamp", timestamp)
            .header("Content-Type", "application/json")
            .body(raw)
            .send()
            .await?)
    }
}

/// Build a `/civ` command interaction payload
pub fn civ_command(
    guild_id: &str,
    channel_id: &str,
    user_id: &str,
    options: serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "type": 2,
        "guild_id": guild_id,
        "channel_id": channel_id,
        "member": {"user": {"id": user_id}},
        "data": {"name": "civ", "options": options}
    })
}

/// Pull the reply content out of an interaction response body
pub fn reply_content(body: &serde_json::Value) -> &str {
    body["data"]["content"].as_str().unwrap_or_default()
}

//! Inbound interaction payloads
//!
//! Mirrors the subset of the Discord interaction object this service
//! reads. Ids stay strings end to end; snowflakes are not safe as JSON
//! numbers.

use serde::Deserialize;

/// Interaction types this service distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum InteractionKind {
    /// Endpoint liveness probe from Discord (type 1)
    Ping,
    /// Slash command invocation (type 2)
    ApplicationCommand,
    /// Anything else, rejected with a plain 400
    Unknown,
}

impl From<u8> for InteractionKind {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            _ => Self::Unknown,
        }
    }
}

/// A parsed interaction callback.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub guild_id: Option<String>,
    pub channel_id: Option<String>,
    pub member: Option<Member>,
    pub data: Option<CommandData>,
}

/// The guild member invoking the command
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: User,
}

/// Discord user reference
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
}

/// Slash command payload: the command name and its option tree
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A sub-command option (e.g. `start` or `iam` under `/civ`)
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub options: Vec<OptionValue>,
}

/// A leaf option value.
///
/// Values arrive as whatever JSON type the command definition declared;
/// this service only ever reads strings.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl OptionValue {
    /// The value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Body of an inbound game-webhook relay request.
#[derive(Debug, Clone, Deserialize)]
pub struct GameUpdate {
    pub content: String,
}

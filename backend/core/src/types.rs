use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Opaque key identifying one chat session.
///
/// Telegram chat ids are signed 64-bit integers; the rest of the system
/// treats the value as opaque and only ever compares or hashes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a single message unit in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message unit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Per-chat response mode selecting generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Short,
    Creative,
}

impl FromStr for Mode {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Mode::Short),
            "creative" => Ok(Mode::Creative),
            other => Err(RelayError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Short => write!(f, "short"),
            Mode::Creative => write!(f, "creative"),
        }
    }
}

/// Concrete sampling parameters resolved from a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

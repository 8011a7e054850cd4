/**
 * Message Data Structure
 *
 * This module defines the Message struct used for transcript turns and the
 * `Role` enumeration that tags who authored each turn.
 *
 * Messages are serialized as-is in history responses and replayed to the
 * provider gateway as `HistoryTurn` pairs.
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Author of a transcript turn
///
/// Serialized in lowercase (`"user"` / `"ai"`), which is also the value
/// stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human-authored turn
    User,
    /// Provider-authored reply
    Ai,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "ai" => Ok(Self::Ai),
            other => Err(SharedError::validation(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// Represents a single turn in a transcript
///
/// # Fields
/// * `id` - Identifier, unique within the owning transcript
/// * `role` - Who authored the turn
/// * `content` - Message text
/// * `timestamp` - Creation time (UTC)
///
/// # Example
/// ```rust
/// use chatrelay::shared::{Message, Role};
///
/// let message = Message::user("Hello!");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current UTC time and a fresh id
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Role::Ai, content)
    }
}

/// Role and content of a prior turn, as sent to a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryTurn {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

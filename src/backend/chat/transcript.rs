use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{HistoryTurn, Message};

/// Ordered conversation history owned by one user
///
/// Insertion order is conversation order; it is replayed to providers as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    /// Empty transcript for a user, not yet persisted
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove a message by id, keeping the relative order of the rest
    pub fn remove_message(&mut self, message_id: Uuid) -> Option<Message> {
        let index = self.messages.iter().position(|m| m.id == message_id)?;
        Some(self.messages.remove(index))
    }

    /// Role and content pairs in conversation order
    pub fn history(&self) -> Vec<HistoryTurn> {
        self.messages.iter().map(HistoryTurn::from).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

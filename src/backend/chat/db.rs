/**
 * Transcript Store
 *
 * This module provides persistence for per-user transcripts behind the
 * `TranscriptStore` trait, with a Postgres implementation and an in-process
 * implementation.
 *
 * Transcripts are addressed only by the owning user's ID. Postgres enforces
 * one transcript per user with a unique index on `transcripts.user_id`;
 * messages live in `transcript_messages`, ordered by a `BIGSERIAL` column.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::chat::transcript::Transcript;
use crate::backend::error::StoreError;
use crate::shared::{Message, Role};

/// Transcript store operations
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Load the user's transcript with its messages in conversation order
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Transcript>, StoreError>;

    /// Create an empty transcript for the user, or return the existing one
    async fn create(&self, user_id: Uuid) -> Result<Transcript, StoreError>;

    /// Append one message, creating the transcript if the user has none
    async fn append_message(&self, user_id: Uuid, message: &Message) -> Result<(), StoreError>;

    /// Remove one message by ID; returns whether a message was removed
    async fn remove_message(&self, user_id: Uuid, message_id: Uuid) -> Result<bool, StoreError>;

    /// Delete the user's transcript; returns whether one existed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError>;
}

#[derive(sqlx::FromRow)]
struct TranscriptRow {
    id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    role: String,
    content: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = StoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Message {
            id: row.id,
            role,
            content: row.content,
            timestamp: row.timestamp,
        })
    }
}

/// Postgres-backed transcript store
#[derive(Clone)]
pub struct PgTranscriptStore {
    pool: PgPool,
}

impl PgTranscriptStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert the transcript row if missing and return it
///
/// The no-op `DO UPDATE` makes `RETURNING` yield the existing row, including
/// one committed by a concurrent first append after this statement started.
async fn ensure_transcript<'e, E>(executor: E, user_id: Uuid) -> Result<TranscriptRow, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    sqlx::query_as::<_, TranscriptRow>(
        r#"
        INSERT INTO transcripts (id, user_id, created_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING id, user_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl TranscriptStore for PgTranscriptStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Transcript>, StoreError> {
        let Some(row) = sqlx::query_as::<_, TranscriptRow>(
            r#"
            SELECT id, user_id, created_at
            FROM transcripts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, role, content, timestamp
            FROM transcript_messages
            WHERE transcript_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        let messages = rows
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Transcript {
            id: row.id,
            user_id: row.user_id,
            messages,
            created_at: row.created_at,
        }))
    }

    async fn create(&self, user_id: Uuid) -> Result<Transcript, StoreError> {
        let row = ensure_transcript(&self.pool, user_id).await?;
        match self.find_by_user(row.user_id).await? {
            Some(transcript) => Ok(transcript),
            None => Err(StoreError::Corrupt(format!(
                "transcript for user {} vanished after creation",
                user_id
            ))),
        }
    }

    async fn append_message(&self, user_id: Uuid, message: &Message) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let transcript = ensure_transcript(&mut *tx, user_id).await?;

        sqlx::query(
            r#"
            INSERT INTO transcript_messages (id, transcript_id, role, content, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id)
        .bind(transcript.id)
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.timestamp)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn remove_message(&self, user_id: Uuid, message_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM transcript_messages m
            USING transcripts t
            WHERE m.transcript_id = t.id
              AND t.user_id = $1
              AND m.id = $2
            "#,
        )
        .bind(user_id)
        .bind(message_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM transcripts WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-process transcript store, one entry per user
#[derive(Default)]
pub struct InMemoryTranscriptStore {
    transcripts: RwLock<HashMap<Uuid, Transcript>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Transcript>, StoreError> {
        Ok(self.transcripts.read().await.get(&user_id).cloned())
    }

    async fn create(&self, user_id: Uuid) -> Result<Transcript, StoreError> {
        let mut transcripts = self.transcripts.write().await;
        Ok(transcripts
            .entry(user_id)
            .or_insert_with(|| Transcript::new(user_id))
            .clone())
    }

    async fn append_message(&self, user_id: Uuid, message: &Message) -> Result<(), StoreError> {
        let mut transcripts = self.transcripts.write().await;
        transcripts
            .entry(user_id)
            .or_insert_with(|| Transcript::new(user_id))
            .push(message.clone());
        Ok(())
    }

    async fn remove_message(&self, user_id: Uuid, message_id: Uuid) -> Result<bool, StoreError> {
        let mut transcripts = self.transcripts.write().await;
        Ok(transcripts
            .get_mut(&user_id)
            .and_then(|transcript| transcript.remove_message(message_id))
            .is_some())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.transcripts.write().await.remove(&user_id).is_some())
    }
}

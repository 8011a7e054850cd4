/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `UserStore` seam with two
 * implementations: Postgres (`PgUserStore`) and an in-process map
 * (`InMemoryUserStore`) used when no database is configured and in tests.
 *
 * Emails are unique across users; a second `create` with the same email
 * fails with `StoreError::Duplicate { field: "email" }`.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::StoreError;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Credential store operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a new user
    ///
    /// # Errors
    /// `StoreError::Duplicate` if the email is already registered
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}

/// Postgres-backed credential store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate { field: "email" })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process credential store
///
/// Keyed by email so the uniqueness check and the insert happen under one
/// write lock.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(StoreError::Duplicate { field: "email" });
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }
}

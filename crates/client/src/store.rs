//! Local key-value storage (the terminal client's "local storage").
//!
//! A single SQLite table of string keys to string values. Values are opaque to
//! the store; callers that keep JSON use [`LocalStore::get_json`] and
//! [`LocalStore::set_json`].

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create storage directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("local storage failure: {0}")]
    Sqlite(#[from] sqlx::Error),

    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// SQLite-backed key-value store.
///
/// Cheap to clone; clones share one lazily opened pool.
#[derive(Debug, Clone)]
pub struct LocalStore {
    options: SqliteConnectOptions,
    path: Option<PathBuf>,
    pool: Arc<Mutex<Option<SqlitePool>>>,
}

impl LocalStore {
    /// Store backed by a file; the file and its directory are created on first use.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Self {
            options,
            path: Some(path),
            pool: Arc::new(Mutex::new(None)),
        }
    }

    /// Store that lives as long as this handle (and its clones).
    pub fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Ok(Self {
            options,
            path: None,
            pool: Arc::new(Mutex::new(None)),
        })
    }

    /// Get the pool, opening the database and creating the table on first use.
    async fn pool(&self) -> Result<SqlitePool, StoreError> {
        let mut guard = self.pool.lock().await;
        if let Some(pool) = guard.as_ref() {
            return Ok(pool.clone());
        }

        if let Some(parent) = self.path.as_deref().and_then(Path::parent) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // In-memory databases are per connection, so the pool holds exactly one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(self.options.clone())
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        tracing::debug!(path = ?self.path, "local storage opened");

        *guard = Some(pool.clone());
        Ok(pool)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let pool = self.pool().await?;

        let row = sqlx::query(
            r#"
            SELECT value
            FROM local_storage
            WHERE key = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let pool = self.pool().await?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key)
            DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&pool)
        .await?;

        Ok(())
    }

    /// Remove a key. Removing a missing key is not an error.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        sqlx::query(
            r#"
            DELETE FROM local_storage
            WHERE key = ?1
            "#,
        )
        .bind(key)
        .execute(&pool)
        .await?;

        Ok(())
    }

    /// Read and decode a JSON value. A value that fails to decode is an error;
    /// callers that treat garbage as absent decide so themselves.
    pub async fn get_json<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn set_json<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let payload = serde_json::to_string(value)?;
        self.set(key, &payload).await
    }
}

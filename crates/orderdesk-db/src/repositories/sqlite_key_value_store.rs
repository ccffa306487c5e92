//! `SQLite` implementation of the `KeyValueStore` port.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use orderdesk_core::{KeyValueStore, RepositoryError};

/// Key-value store backed by the `kv_store` table.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Create a store over a pool whose schema was set up by `setup_database`.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of stored entries.
    pub async fn len(&self) -> Result<usize, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM kv_store")
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;
        let n: i64 = row.get("n");
        Ok(usize::try_from(n).unwrap_or_default())
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query("INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        tracing::trace!(key, "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(())
    }
}

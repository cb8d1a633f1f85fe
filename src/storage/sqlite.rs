use async_trait::async_trait;
use sql_middleware::middleware::{
    AsyncDatabaseExecutor, ConfigAndPool, MiddlewarePool, RowValues,
};

use crate::storage::blob::{BlobStore, StorageError};

const DDL: &str = "CREATE TABLE IF NOT EXISTS blob_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    ins_ts TEXT NOT NULL
);";

/// Production backend: one SQLite file, one row per blob key.
#[derive(Clone)]
pub struct SqliteBlobStore {
    config_and_pool: ConfigAndPool,
}

impl SqliteBlobStore {
    /// Open (or create) the database at `db_path` and ensure the blob
    /// table exists. `file::memory:?cache=shared` works for tests.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the pool cannot be built or the DDL fails.
    pub async fn new(db_path: String) -> Result<Self, StorageError> {
        let config_and_pool = ConfigAndPool::new_sqlite(db_path)
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;
        let store = Self { config_and_pool };

        let pool = store
            .config_and_pool
            .pool
            .get()
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;
        let mut conn = MiddlewarePool::get_connection(pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;
        conn.execute_batch(DDL)
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;

        Ok(store)
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let pool = self
            .config_and_pool
            .pool
            .get()
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;
        let mut conn = MiddlewarePool::get_connection(pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;

        let result = conn
            .execute_select(
                "SELECT value FROM blob_store WHERE key = ?1;",
                &[RowValues::Text(key.to_string())],
            )
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;

        Ok(result
            .results
            .first()
            .and_then(|row| row.get("value"))
            .and_then(|v| v.as_text())
            .map(std::string::ToString::to_string))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let pool = self
            .config_and_pool
            .pool
            .get()
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;
        let mut conn = MiddlewarePool::get_connection(pool)
            .await
            .map_err(|e| StorageError::new(e.to_string()))?;

        let ins_ts = chrono::Utc::now()
            .naive_utc()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        conn.execute_dml(
            "INSERT INTO blob_store (key, value, ins_ts) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, ins_ts = excluded.ins_ts;",
            &[
                RowValues::Text(key.to_string()),
                RowValues::Text(value.to_string()),
                RowValues::Text(ins_ts),
            ],
        )
        .await
        .map_err(|e| StorageError::new(e.to_string()))?;

        Ok(())
    }
}

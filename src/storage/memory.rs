use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::storage::blob::{BlobStore, StorageError};

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, bypassing the gateway. Useful for legacy-format
    /// fixtures.
    pub fn insert(&self, key: &str, value: &str) {
        self.blobs
            .lock()
            .expect("blob map lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .blobs
            .lock()
            .map_err(|_| StorageError::new("blob map lock poisoned"))?
            .get(key)
            .cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs
            .lock()
            .map_err(|_| StorageError::new("blob map lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

use async_trait::async_trait;
use thiserror::Error;

/// Key for the serialized club collection blob.
pub const CLUBS_KEY: &str = "yardage-tracker-clubs";
/// Key for the user-added custom brand list blob.
pub const CUSTOM_BRANDS_KEY: &str = "yardage-tracker-custom-brands";

#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Get/set a named blob of UTF-8 JSON in the local key-value store. One
/// implementation per deployment target; nothing above this trait branches
/// on the backend.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

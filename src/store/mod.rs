pub mod memory;
pub mod postgres;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    /// The key was already written. Entries are write-once.
    Conflict(String),
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Conflict(key) => write!(f, "Key already exists: {key}"),
            StoreError::Backend(msg) => write!(f, "Store backend error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Write capability the contact form persists into.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

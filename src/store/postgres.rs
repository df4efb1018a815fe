use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;

use super::{KeyValueStore, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for PgStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        db::contact_entries::create(&self.pool, key, value)
            .await
            .map(|_| ())
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    StoreError::Conflict(key.to_string())
                }
                other => StoreError::Backend(other.to_string()),
            })
    }
}

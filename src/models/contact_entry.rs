use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactEntry {
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

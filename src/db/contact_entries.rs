use sqlx::PgPool;

use crate::models::ContactEntry;

pub async fn create(pool: &PgPool, key: &str, value: &str) -> Result<ContactEntry, sqlx::Error> {
    sqlx::query_as::<_, ContactEntry>(
        "INSERT INTO contact_entries (key, value) VALUES ($1, $2) RETURNING *",
    )
    .bind(key)
    .bind(value)
    .fetch_one(pool)
    .await
}

pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<ContactEntry>, sqlx::Error> {
    sqlx::query_as::<_, ContactEntry>("SELECT * FROM contact_entries WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_entries")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

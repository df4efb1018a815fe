use sqlx::postgres::PgPoolOptions;

use sahasra::contact::{self, Draft, Field, KeyGenerator};
use sahasra::db;
use sahasra::store::{KeyValueStore, PgStore, StoreError};

/// Runs only when DATABASE_URL points at a disposable database.
#[tokio::test]
async fn pg_store_persists_and_refuses_duplicate_keys() {
    let _ = dotenvy::dotenv();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return;
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let store = PgStore::new(pool);
    let keys = KeyGenerator::new();

    let mut draft = Draft::default();
    draft.update(Field::Name, "Alice").unwrap();
    draft.update(Field::Phone, "555-1000").unwrap();
    draft.update(Field::Email, "a@x.com").unwrap();
    draft.update(Field::Service, "Email Marketing").unwrap();

    let before = db::contact_entries::count(store.pool()).await.unwrap();
    let accepted = contact::submit(draft, &store, &keys).await.unwrap();

    let entry = db::contact_entries::find_by_key(store.pool(), &accepted.key)
        .await
        .unwrap()
        .expect("entry was not written");
    let value: serde_json::Value = serde_json::from_str(&entry.value).unwrap();
    assert_eq!(value["service"], "Email Marketing");
    assert_eq!(db::contact_entries::count(store.pool()).await.unwrap(), before + 1);

    let err = store.put(&accepted.key, "{}").await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    sqlx::query("DELETE FROM contact_entries WHERE key = $1")
        .bind(&accepted.key)
        .execute(store.pool())
        .await
        .unwrap();
}

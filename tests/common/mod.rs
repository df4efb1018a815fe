#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use sahasra::config::Config;
use sahasra::state::SharedState;
use sahasra::store::{KeyValueStore, MemoryStore};

/// A running test server. `memory` is set when it is backed by a `MemoryStore`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub memory: Option<Arc<MemoryStore>>,
    pub state: SharedState,
}

impl TestApp {
    pub fn store(&self) -> &MemoryStore {
        self.memory
            .as_deref()
            .expect("test app is not backed by a MemoryStore")
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Post the contact page form, return the raw response.
    pub async fn post_form(&self, data: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/contact"))
            .form(data)
            .send()
            .await
            .expect("form post failed")
    }

    /// Submit JSON to the contact API, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub fn stored(&self, key: &str) -> Option<Value> {
        self.store()
            .get(key)
            .map(|raw| serde_json::from_str(&raw).expect("stored value is not JSON"))
    }
}

pub fn test_config() -> Config {
    Config {
        submit_limit: 1_000,
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn the app on a random port with the given config.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let mut app = spawn_app_with_store(store.clone(), config).await;
    app.memory = Some(store);
    app
}

/// Spawn the app over any store implementation.
pub async fn spawn_app_with_store(store: Arc<dyn KeyValueStore>, config: Config) -> TestApp {
    let (app, state) = sahasra::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        memory: None,
        state,
    }
}

pub mod catalog;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::contact::KeyGenerator;
use crate::rate_limit::SubmissionRateLimiter;
use crate::state::{AppState, SharedState};
use crate::store::KeyValueStore;

pub fn build_app(store: Arc<dyn KeyValueStore>, config: Config) -> (Router, SharedState) {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        keys: KeyGenerator::new(),
        config,
        submission_limiter: SubmissionRateLimiter::new(),
    });

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(layers)
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}

pub mod catalog;
pub mod contact;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/contact", post(contact::submit))
        .route("/api/v1/services", get(catalog::services))
        .route("/api/v1/testimonials", get(catalog::testimonials))
}

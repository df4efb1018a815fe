use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unprocessable(String, Vec<&'static str>),
    RateLimited(u64),
    Unavailable(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Unprocessable(msg, _) => write!(f, "Unprocessable: {msg}"),
            AppError::RateLimited(secs) => write!(f, "Rate Limited: retry after {secs}s"),
            AppError::Unavailable(msg) => write!(f, "Unavailable: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Unprocessable(msg, missing) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": msg, "missing": missing }),
            ),
            AppError::RateLimited(secs) => {
                let body = json!({ "error": format!("Rate limited. Retry after {secs}s") });
                let retry_after = [("retry-after", secs.to_string())];
                return (StatusCode::TOO_MANY_REQUESTS, retry_after, axum::Json(body))
                    .into_response();
            }
            AppError::Unavailable(msg) => {
                tracing::error!("Store unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Submission could not be stored" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Unavailable(err.to_string())
    }
}

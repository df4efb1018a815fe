use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::contact::{Notification, SubmissionRecord, SubmitError};
use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::client_ip;
use crate::submission::parser::{self, IntakeError};
use crate::submission::pipeline::{self, PipelineError};

#[derive(Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub key: String,
    pub record: SubmissionRecord,
    pub notification: Notification,
}

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let fields = parser::parse_request(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;

    let draft = parser::draft_from_fields(&fields).map_err(|e| match e {
        IntakeError::Malformed(msg) => AppError::BadRequest(msg),
        IntakeError::UnknownService { source, .. } => AppError::BadRequest(source.to_string()),
    })?;

    let ip = client_ip::resolve(&headers, Some(addr.ip()), &state.config.trusted_proxies);

    let accepted = pipeline::run(&state, ip, draft).await.map_err(|e| match e {
        PipelineError::RateLimited { retry_after, .. } => AppError::RateLimited(retry_after),
        PipelineError::Rejected(rejected) => {
            let message = rejected.reason.to_string();
            match rejected.reason {
                SubmitError::Incomplete { missing } => AppError::Unprocessable(
                    message,
                    missing.iter().map(|field| field.id()).collect(),
                ),
                SubmitError::Store(err) => AppError::from(err),
            }
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            status: "created",
            key: accepted.key,
            record: accepted.record,
            notification: Notification::Submitted,
        }),
    ))
}

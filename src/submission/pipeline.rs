use std::net::IpAddr;

use crate::contact::{self, Accepted, Draft, Rejected};
use crate::state::SharedState;

#[derive(Debug)]
pub enum PipelineError {
    RateLimited { draft: Draft, retry_after: u64 },
    Rejected(Rejected),
}

/// Rate-limit the client, then hand the draft to the contact form handler.
pub async fn run(
    state: &SharedState,
    client_ip: IpAddr,
    draft: Draft,
) -> Result<Accepted, PipelineError> {
    if let Err(retry_after) = state.submission_limiter.check(
        client_ip,
        state.config.submit_limit,
        state.config.submit_window_secs,
    ) {
        tracing::warn!("Contact submissions from {client_ip} rate limited for {retry_after}s");
        return Err(PipelineError::RateLimited { draft, retry_after });
    }

    contact::submit(draft, state.store.as_ref(), &state.keys)
        .await
        .map_err(PipelineError::Rejected)
}

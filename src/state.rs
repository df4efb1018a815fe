use std::sync::Arc;

use crate::config::Config;
use crate::contact::KeyGenerator;
use crate::rate_limit::SubmissionRateLimiter;
use crate::store::KeyValueStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub keys: KeyGenerator,
    pub config: Config,
    pub submission_limiter: SubmissionRateLimiter,
}

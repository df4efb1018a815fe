use std::net::IpAddr;
use std::time::{Duration, Instant};

use sahasra::config::Config;
use sahasra::rate_limit::SubmissionRateLimiter;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn blocks_after_limit_within_window() {
    let limiter = SubmissionRateLimiter::new();
    let start = Instant::now();

    assert!(limiter.check_at(ip("203.0.113.1"), 2, 60, start).is_ok());
    assert!(limiter.check_at(ip("203.0.113.1"), 2, 60, start).is_ok());

    let retry_after = limiter
        .check_at(ip("203.0.113.1"), 2, 60, start + Duration::from_secs(15))
        .unwrap_err();
    assert_eq!(retry_after, 45);

    // Other clients have their own budget.
    assert!(limiter.check_at(ip("203.0.113.2"), 2, 60, start).is_ok());
}

#[test]
fn count_resets_when_window_rolls_over() {
    let limiter = SubmissionRateLimiter::new();
    let start = Instant::now();
    let client = ip("203.0.113.1");

    assert!(limiter.check_at(client, 1, 60, start).is_ok());
    assert!(limiter.check_at(client, 1, 60, start + Duration::from_secs(59)).is_err());

    let later = start + Duration::from_secs(61);
    assert!(limiter.check_at(client, 1, 60, later).is_ok());
    assert!(limiter.check_at(client, 1, 60, later + Duration::from_secs(1)).is_err());
}

#[test]
fn cleanup_drops_only_stale_entries() {
    let limiter = SubmissionRateLimiter::new();
    let start = Instant::now();

    limiter.check_at(ip("203.0.113.1"), 5, 60, start).unwrap();
    limiter
        .check_at(ip("203.0.113.2"), 5, 60, start + Duration::from_secs(100))
        .unwrap();
    assert_eq!(limiter.tracked(), 2);

    limiter.cleanup_at(Duration::from_secs(120), start + Duration::from_secs(110));
    assert_eq!(limiter.tracked(), 2);

    limiter.cleanup_at(Duration::from_secs(120), start + Duration::from_secs(150));
    assert_eq!(limiter.tracked(), 1);

    // The dropped client starts a fresh window.
    assert!(
        limiter
            .check_at(ip("203.0.113.1"), 1, 60, start + Duration::from_secs(150))
            .is_ok()
    );
}

#[test]
fn zero_window_is_rejected_by_config() {
    let config = Config {
        submit_window_secs: 0,
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.contains("SAHASRA_SUBMIT_WINDOW_SECS"));
}

#[test]
fn zero_limit_is_rejected_by_config() {
    let config = Config {
        submit_limit: 0,
        ..Config::default()
    };
    assert!(config.validate().unwrap_err().contains("SAHASRA_SUBMIT_LIMIT"));
}

#[test]
fn default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
    assert_eq!(Config::default().host, ip("0.0.0.0"));
}

use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    /// When set, submissions go to PostgreSQL; otherwise they are kept in memory.
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub submit_limit: u32,
    pub submit_window_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let host: IpAddr = env_or("SAHASRA_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SAHASRA_HOST: {e}"))?;

        let port: u16 = env_or("SAHASRA_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SAHASRA_PORT: {e}"))?;

        let max_body_size: usize = env_or("SAHASRA_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SAHASRA_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies = parse_proxies(&env_or("SAHASRA_TRUSTED_PROXIES", ""))?;

        let submit_limit: u32 = env_or("SAHASRA_SUBMIT_LIMIT", "10")
            .parse()
            .map_err(|e| format!("Invalid SAHASRA_SUBMIT_LIMIT: {e}"))?;

        let submit_window_secs: u64 = env_or("SAHASRA_SUBMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid SAHASRA_SUBMIT_WINDOW_SECS: {e}"))?;

        let log_level = env_or("SAHASRA_LOG_LEVEL", "info");

        let config = Config {
            database_url,
            host,
            port,
            max_body_size,
            trusted_proxies,
            submit_limit,
            submit_window_secs,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would switch the submission limiter off.
    pub fn validate(&self) -> Result<(), String> {
        if self.submit_limit == 0 {
            return Err("SAHASRA_SUBMIT_LIMIT must be at least 1".to_string());
        }
        if self.submit_window_secs == 0 {
            return Err("SAHASRA_SUBMIT_WINDOW_SECS must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            max_body_size: 65_536,
            trusted_proxies: vec![],
            submit_limit: 10,
            submit_window_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

pub fn parse_proxies(raw: &str) -> Result<Vec<IpNet>, String> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|e| format!("Invalid SAHASRA_TRUSTED_PROXIES entry '{s}': {e}"))
        })
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

// src/config.rs
use crate::auth::token::random_secret;
use crate::errors::ConfigError;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Keys the session cookie tag. Random per process unless configured,
    /// which logs everyone out on restart.
    pub cookie_secret: String,
    /// Agent whose listings the dashboard shows.
    pub dashboard_agent_id: String,
    /// Verified listings shown on the landing page.
    pub featured_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            cookie_secret: random_secret(),
            dashboard_agent_id: "1".to_string(),
            featured_count: 3,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `RENTPROOF_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("RENTPROOF_ADDR") {
            cfg.bind_addr = parse_var("RENTPROOF_ADDR", v)?;
        }
        if let Some(v) = lookup("RENTPROOF_WORKERS") {
            cfg.max_workers = parse_var("RENTPROOF_WORKERS", v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::InvalidValue {
                    var: "RENTPROOF_WORKERS",
                    value: "0".into(),
                });
            }
        }
        if let Some(v) = lookup("RENTPROOF_COOKIE_SECRET").filter(|v| !v.is_empty()) {
            cfg.cookie_secret = v;
        }
        if let Some(v) = lookup("RENTPROOF_DASHBOARD_AGENT").filter(|v| !v.is_empty()) {
            cfg.dashboard_agent_id = v;
        }
        if let Some(v) = lookup("RENTPROOF_FEATURED") {
            cfg.featured_count = parse_var("RENTPROOF_FEATURED", v)?;
        }

        Ok(cfg)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}

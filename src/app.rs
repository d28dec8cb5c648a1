// src/app.rs
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::errors::ConfigError;

/// Everything a request handler may read. Built once, then shared by
/// reference across the server's worker threads.
#[derive(Debug, Clone)]
pub struct App {
    pub catalog: Catalog,
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        if catalog.agent(&config.dashboard_agent_id).is_none() {
            return Err(ConfigError::InvalidValue {
                var: "RENTPROOF_DASHBOARD_AGENT",
                value: config.dashboard_agent_id.clone(),
            });
        }
        Ok(Self { catalog, config })
    }

    /// Embedded catalog plus configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(AppConfig::from_env()?, Catalog::embedded()?)
    }
}

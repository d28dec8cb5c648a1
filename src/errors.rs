// errors.rs
use crate::domain::filter::InvalidFilter;
use std::fmt;

/// Errors surfaced by request handling. Each maps onto an HTML error page.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<InvalidFilter> for ServerError {
    fn from(e: InvalidFilter) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

/// Startup-time configuration problems.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { var: &'static str, value: String },
    Catalog(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
            ConfigError::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

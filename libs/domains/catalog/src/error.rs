use core_config::ConfigError;
use std::error::Error as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Message recorded alongside a failed operation.
    ///
    /// Prefers the underlying cause's message and falls back to this error's own.
    pub fn failure_detail(&self) -> String {
        self.source()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

//! Error types for the data gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::envelope::InternalErrorResponse;

/// Application-wide error type for start-up and unexpected request failures
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request handler panicked; carries the panic message
    #[error("{0}")]
    Panic(String),
}

impl AppError {
    /// Shorthand for a configuration validation failure
    pub fn invalid_config(message: impl Into<String>) -> Self {
        AppError::Config(config::ConfigError::Message(message.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed with an unhandled error");

        let body = Json(InternalErrorResponse::new(self.to_string()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Why the scraped document could not be loaded.
///
/// The `Display` text is what clients see in the `error` / `warning` fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("File not found")]
    NotFound,

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Error reading file: {0}")]
    Io(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

//! JSON envelopes returned by the API

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::gateway::health_check::HealthReport;

pub const API_NAME: &str = "Web Scraper API";

/// Every route with its description, as listed by `/info` and the 404 body
pub const ENDPOINTS: [(&str, &str); 4] = [
    ("/", "Get scraped data with metadata"),
    ("/raw", "Get raw scraped data"),
    ("/health", "Health check endpoint"),
    ("/info", "API information"),
];

/// Current UTC time, RFC 3339 with microseconds
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `GET /` when the document loaded and the producer reported success
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Value,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub server_time: String,
    pub data_source: String,
}

impl SuccessResponse {
    pub fn new(data: Value, data_source: String) -> Self {
        Self {
            status: "success",
            message: "Data retrieved successfully",
            data,
            server_info: ServerInfo {
                server_time: timestamp(),
                data_source,
            },
        }
    }
}

/// `GET /` when the document could not be loaded
#[derive(Debug, Serialize)]
pub struct LoadFailureResponse {
    pub status: &'static str,
    pub error: String,
    pub message: &'static str,
    pub timestamp: String,
}

impl LoadFailureResponse {
    pub fn new(error: String) -> Self {
        Self {
            status: "error",
            error,
            message: "Failed to load scraped data",
            timestamp: timestamp(),
        }
    }
}

/// `GET /` when the document itself reports a failed scrape
#[derive(Debug, Serialize)]
pub struct ScrapingFailedResponse {
    pub status: &'static str,
    pub error: Value,
    pub details: Value,
    pub timestamp: String,
}

impl ScrapingFailedResponse {
    pub fn new(error: Value, details: Value) -> Self {
        Self {
            status: "scraping_failed",
            error,
            details,
            timestamp: timestamp(),
        }
    }
}

/// `GET /raw` when the document could not be loaded
#[derive(Debug, Serialize)]
pub struct RawErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub data_file_exists: bool,
    pub data_loadable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<&HealthReport> for HealthResponse {
    fn from(report: &HealthReport) -> Self {
        Self {
            status: report.status.as_str(),
            timestamp: timestamp(),
            data_file_exists: report.data_file_exists,
            data_loadable: report.data_loadable(),
            warning: report.load_error.as_ref().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub api_name: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub timestamp: String,
}

impl InfoResponse {
    pub fn new() -> Self {
        Self {
            api_name: API_NAME,
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS.into_iter().collect(),
            timestamp: timestamp(),
        }
    }
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub available_endpoints: Vec<&'static str>,
    pub timestamp: String,
}

impl NotFoundResponse {
    pub fn new() -> Self {
        Self {
            error: "Endpoint not found",
            message: "The requested endpoint does not exist",
            available_endpoints: ENDPOINTS.iter().map(|(path, _)| *path).collect(),
            timestamp: timestamp(),
        }
    }
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of every 500 that is not a data-path failure
#[derive(Debug, Serialize)]
pub struct InternalErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub timestamp: String,
}

impl InternalErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: "Internal server error",
            message: message.into(),
            timestamp: timestamp(),
        }
    }
}

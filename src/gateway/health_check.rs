//! Health check for the scraped data file

use tracing::debug;

use crate::error::LoadError;
use crate::gateway::source::DocumentSource;

/// Overall health of the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
        }
    }
}

/// Result of probing the document source
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// Direct existence check, independent of whether the file parses
    pub data_file_exists: bool,
    /// Why the document could not be loaded, if it could not
    pub load_error: Option<LoadError>,
}

impl HealthReport {
    pub fn data_loadable(&self) -> bool {
        self.load_error.is_none()
    }
}

/// Probe the source: one full load plus an existence check
pub async fn check(source: &dyn DocumentSource) -> HealthReport {
    let load_error = source.load().await.err();
    let data_file_exists = source.exists().await;

    // The source already warns about the load failure itself
    let status = match load_error {
        None => HealthStatus::Healthy,
        Some(_) => HealthStatus::Degraded,
    };

    debug!(
        source = %source.describe(),
        status = status.as_str(),
        data_file_exists,
        "Health check completed"
    );

    HealthReport {
        status,
        data_file_exists,
        load_error,
    }
}

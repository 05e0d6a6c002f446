//! Scraped Data Gateway
//!
//! A read-only HTTP service that republishes a JSON document written to disk
//! by an external scraper, with status wrapping and health diagnostics.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod middleware;

pub use error::{AppError, LoadError, Result};

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use gateway::{DocumentSource, FileDocumentSource};

/// Application state shared across all handlers
pub struct AppState {
    pub settings: config::Settings,
    pub source: Arc<dyn DocumentSource>,
}

impl AppState {
    pub fn new(settings: config::Settings, source: Arc<dyn DocumentSource>) -> Self {
        Self { settings, source }
    }

    /// State backed by the data file named in the settings
    pub fn from_settings(settings: config::Settings) -> Self {
        let source = Arc::new(FileDocumentSource::new(&settings.data.file_path));
        Self::new(settings, source)
    }
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = api::create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

//! Document sources the gateway republishes

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::LoadError;

/// Outcome of a single load attempt
pub type LoadOutcome = std::result::Result<Value, LoadError>;

/// Something that can produce the scraped document on demand.
///
/// Implementations must not cache: every `load` reflects the current state of
/// the underlying storage.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read and parse the current document
    async fn load(&self) -> LoadOutcome;

    /// Whether the underlying document exists, regardless of its contents
    async fn exists(&self) -> bool;

    /// Human-readable label reported as `data_source`
    fn describe(&self) -> String;
}

/// Reads the document from a JSON file on local disk
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    /// Create a new file source
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_and_parse(&self) -> LoadOutcome {
        if !self.exists().await {
            return Err(LoadError::NotFound);
        }

        let contents = fs::read_to_string(&self.path).await?;
        let document = serde_json::from_str(&contents)?;
        Ok(document)
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn load(&self) -> LoadOutcome {
        let outcome = self.read_and_parse().await;

        match &outcome {
            Ok(_) => debug!(path = ?self.path, "Loaded scraped document"),
            Err(e) => warn!(path = ?self.path, error = %e, "Failed to load scraped document"),
        }

        outcome
    }

    async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

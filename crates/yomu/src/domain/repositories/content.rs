use async_trait::async_trait;

use thiserror::Error;

/// Filename of the precomputed chapter list a build step may leave next to
/// the chapter files. Absence switches discovery to probe mode.
pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ContentRepositoryError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("malformed manifest: {0}")]
    ManifestError(#[from] serde_json::Error),
    #[error("{0} not found")]
    NotFound(String),
}

/// Read-only blob store addressed by filename: local directory, remote HTTP
/// host, whatever holds the chapter files.
#[async_trait]
pub trait ContentRepository {
    async fn exists(&self, filename: &str) -> Result<bool, ContentRepositoryError>;

    async fn read(&self, filename: &str) -> Result<String, ContentRepositoryError>;

    async fn manifest(&self) -> Result<Option<Vec<String>>, ContentRepositoryError>;
}

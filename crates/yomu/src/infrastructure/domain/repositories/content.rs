use async_trait::async_trait;

use crate::domain::repositories::content::{ContentRepository, ContentRepositoryError};

use super::{http::HttpContentRepositoryImpl, local::LocalContentRepositoryImpl};

/// Runtime-selected content source, picked from configuration at startup.
#[derive(Clone)]
pub enum ContentRepositoryImpl {
    Local(LocalContentRepositoryImpl),
    Http(HttpContentRepositoryImpl),
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn exists(&self, filename: &str) -> Result<bool, ContentRepositoryError> {
        match self {
            Self::Local(repo) => repo.exists(filename).await,
            Self::Http(repo) => repo.exists(filename).await,
        }
    }

    async fn read(&self, filename: &str) -> Result<String, ContentRepositoryError> {
        match self {
            Self::Local(repo) => repo.read(filename).await,
            Self::Http(repo) => repo.read(filename).await,
        }
    }

    async fn manifest(&self) -> Result<Option<Vec<String>>, ContentRepositoryError> {
        match self {
            Self::Local(repo) => repo.manifest().await,
            Self::Http(repo) => repo.manifest().await,
        }
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::repositories::content::{
    ContentRepository, ContentRepositoryError, MANIFEST_FILENAME,
};

/// Chapter files in a directory on disk.
#[derive(Clone)]
pub struct LocalContentRepositoryImpl {
    path: PathBuf,
}

impl LocalContentRepositoryImpl {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = PathBuf::new().join(path);
        Self { path }
    }
}

#[async_trait]
impl ContentRepository for LocalContentRepositoryImpl {
    async fn exists(&self, filename: &str) -> Result<bool, ContentRepositoryError> {
        Ok(tokio::fs::try_exists(self.path.join(filename)).await?)
    }

    async fn read(&self, filename: &str) -> Result<String, ContentRepositoryError> {
        match tokio::fs::read_to_string(self.path.join(filename)).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ContentRepositoryError::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn manifest(&self) -> Result<Option<Vec<String>>, ContentRepositoryError> {
        let raw = match tokio::fs::read_to_string(self.path.join(MANIFEST_FILENAME)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_exists() {
        let repo = LocalContentRepositoryImpl::new("../../test/data/chapters");

        assert!(repo.exists("ch_1.txt").await.unwrap());
        assert!(!repo.exists("ch_3.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_read() {
        let repo = LocalContentRepositoryImpl::new("../../test/data/chapters");

        let body = repo.read("ch_1.txt").await.unwrap();

        assert!(body.contains("spring rain"));
    }

    #[tokio::test]
    async fn test_read_missing_chapter() {
        let repo = LocalContentRepositoryImpl::new("../../test/data/chapters");

        let err = repo.read("ch_3.txt").await.unwrap_err();

        assert!(matches!(err, ContentRepositoryError::NotFound(f) if f == "ch_3.txt"));
    }

    #[tokio::test]
    async fn test_manifest_absent() {
        let repo = LocalContentRepositoryImpl::new("../../test/data/chapters");

        assert_eq!(repo.manifest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_manifest_present() {
        let repo = LocalContentRepositoryImpl::new("../../test/data/published");

        let manifest = repo.manifest().await.unwrap();

        assert_eq!(
            manifest,
            Some(vec!["ch_1.txt".to_string(), "ch_2.txt".to_string()])
        );
    }
}

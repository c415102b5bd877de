use async_trait::async_trait;

use crate::domain::repositories::content::{
    ContentRepository, ContentRepositoryError, MANIFEST_FILENAME,
};

/// Chapter files served by a remote host under a base URL. Existence checks
/// are HEAD requests, reads are plain GETs.
#[derive(Clone)]
pub struct HttpContentRepositoryImpl {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentRepositoryImpl {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url, filename)
    }
}

#[async_trait]
impl ContentRepository for HttpContentRepositoryImpl {
    async fn exists(&self, filename: &str) -> Result<bool, ContentRepositoryError> {
        let res = self.client.head(self.url_for(filename)).send().await?;

        Ok(res.status().is_success())
    }

    async fn read(&self, filename: &str) -> Result<String, ContentRepositoryError> {
        let res = self.client.get(self.url_for(filename)).send().await?;

        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentRepositoryError::NotFound(filename.to_string()));
        }

        Ok(res.error_for_status()?.text().await?)
    }

    async fn manifest(&self) -> Result<Option<Vec<String>>, ContentRepositoryError> {
        let res = self.client.get(self.url_for(MANIFEST_FILENAME)).send().await?;

        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let raw = res.error_for_status()?.text().await?;

        Ok(Some(serde_json::from_str(&raw)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let repo = HttpContentRepositoryImpl::new("https://example.com/book/");

        assert_eq!(
            repo.url_for("ch_1.txt"),
            "https://example.com/book/ch_1.txt"
        );
    }
}

use async_trait::async_trait;

use thiserror::Error;

pub const LAST_READ_CHAPTER_KEY: &str = "last_read_chapter";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum SettingRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

/// Durable string key-value store scoped to one reader. Survives restarts.
#[async_trait]
pub trait SettingRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, SettingRepositoryError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingRepositoryError>;
}

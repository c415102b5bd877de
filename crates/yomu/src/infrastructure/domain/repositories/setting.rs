use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::repositories::setting::{SettingRepository, SettingRepositoryError},
    infrastructure::database::Pool,
};

#[derive(Clone)]
pub struct SettingRepositoryImpl {
    pool: Pool,
}

impl SettingRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl SettingRepository for SettingRepositoryImpl {
    async fn get(&self, key: &str) -> Result<Option<String>, SettingRepositoryError> {
        let value = sqlx::query(
            r#"
        SELECT value FROM setting WHERE key = ?"#,
        )
        .bind(key)
        .fetch_optional(&self.pool as &SqlitePool)
        .await?
        .map(|row| row.get(0));

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingRepositoryError> {
        sqlx::query(
            r#"
        INSERT INTO setting(key, value, updated_at) VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE
        SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    async fn repo() -> SettingRepositoryImpl {
        // One connection only: every pooled connection to :memory: would
        // otherwise see its own empty database.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        SettingRepositoryImpl::new(pool)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let repo = repo().await;

        assert_eq!(repo.get("last_read_chapter").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let repo = repo().await;

        repo.set("last_read_chapter", "5").await.unwrap();

        assert_eq!(
            repo.get("last_read_chapter").await.unwrap(),
            Some("5".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let repo = repo().await;

        repo.set("theme", "light").await.unwrap();
        repo.set("theme", "dark").await.unwrap();

        assert_eq!(repo.get("theme").await.unwrap(), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let repo = repo().await;

        repo.set("last_read_chapter", "5").await.unwrap();
        repo.set("theme", "dark").await.unwrap();

        assert_eq!(
            repo.get("last_read_chapter").await.unwrap(),
            Some("5".to_string())
        );
        assert_eq!(repo.get("theme").await.unwrap(), Some("dark".to_string()));
    }
}

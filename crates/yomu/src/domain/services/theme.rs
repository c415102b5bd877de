use thiserror::Error;

use crate::domain::{
    entities::theme::Theme,
    repositories::setting::{SettingRepository, SettingRepositoryError, THEME_KEY},
};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("setting store error: {0}")]
    RepositoryError(#[from] SettingRepositoryError),
}

pub struct ThemeService<S>
where
    S: SettingRepository,
{
    repo: S,
}

impl<S> ThemeService<S>
where
    S: SettingRepository,
{
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// The persisted theme; unknown or missing values read as the default.
    pub async fn theme(&self) -> Result<Theme, ThemeError> {
        let theme = self
            .repo
            .get(THEME_KEY)
            .await?
            .and_then(|value| Theme::from_name(&value))
            .unwrap_or_default();

        Ok(theme)
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.repo.set(THEME_KEY, theme.as_str()).await?;

        Ok(())
    }

    pub async fn toggle_theme(&self) -> Result<Theme, ThemeError> {
        let theme = self.theme().await?.toggled();
        self.set_theme(theme).await?;

        Ok(theme)
    }
}

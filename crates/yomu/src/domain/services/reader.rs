use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    entities::{catalog::Catalog, chapter::ChapterContent},
    repositories::{
        content::{ContentRepository, ContentRepositoryError},
        setting::{LAST_READ_CHAPTER_KEY, SettingRepository, SettingRepositoryError},
    },
};

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("catalog has no chapters")]
    EmptyCatalog,
    #[error("chapter {0} not found")]
    ChapterNotFound(i64),
    #[error("failed to fetch chapter {number}: {source}")]
    ContentFetch {
        number: i64,
        source: ContentRepositoryError,
    },
    #[error("setting store error: {0}")]
    Setting(#[from] SettingRepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationAvailability {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Sequential navigation over an immutable catalog. The only state is the
/// current chapter number, which always names a catalog entry once set.
pub struct Reader<C, S>
where
    C: ContentRepository,
    S: SettingRepository,
{
    catalog: Catalog,
    current_chapter: Option<i64>,
    content_repo: C,
    setting_repo: S,
}

impl<C, S> Reader<C, S>
where
    C: ContentRepository,
    S: SettingRepository,
{
    pub fn new(catalog: Catalog, content_repo: C, setting_repo: S) -> Self {
        Self {
            catalog,
            current_chapter: None,
            content_repo,
            setting_repo,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_chapter(&self) -> Option<i64> {
        self.current_chapter
    }

    /// Moves to `number` and fetches its body. An unknown number leaves the
    /// state untouched. A body fetch failure still moves the state to the
    /// requested chapter, so prev/next keep operating relative to the
    /// chapter we tried to show; the number is persisted only when lookup
    /// and fetch both succeed.
    pub async fn load_chapter(&mut self, number: i64) -> Result<ChapterContent, ReaderError> {
        let chapter = self
            .catalog
            .get(number)
            .cloned()
            .ok_or(ReaderError::ChapterNotFound(number))?;

        self.current_chapter = Some(chapter.number);

        let raw = self
            .content_repo
            .read(&chapter.filename)
            .await
            .map_err(|source| ReaderError::ContentFetch {
                number: chapter.number,
                source,
            })?;

        if let Err(e) = self
            .setting_repo
            .set(LAST_READ_CHAPTER_KEY, &chapter.number.to_string())
            .await
        {
            warn!("failed to persist last read chapter {}: {e}", chapter.number);
        }

        Ok(ChapterContent::from_raw(chapter.number, &raw))
    }

    pub async fn load_first(&mut self) -> Result<ChapterContent, ReaderError> {
        let first = self
            .catalog
            .first()
            .map(|c| c.number)
            .ok_or(ReaderError::EmptyCatalog)?;

        self.load_chapter(first).await
    }

    /// Loads the next chapter in catalog order (not numeric order: with a
    /// catalog of 1, 2, 5, 6 this moves 2 to 5). `None` when uninitialized
    /// or already at the last entry.
    pub async fn next(&mut self) -> Result<Option<ChapterContent>, ReaderError> {
        let Some(index) = self.current_index() else {
            return Ok(None);
        };

        match self.catalog.chapters().get(index + 1).map(|c| c.number) {
            Some(number) => self.load_chapter(number).await.map(Some),
            None => Ok(None),
        }
    }

    /// Mirror of [`Reader::next`].
    pub async fn previous(&mut self) -> Result<Option<ChapterContent>, ReaderError> {
        let Some(index) = self.current_index() else {
            return Ok(None);
        };

        if index == 0 {
            return Ok(None);
        }

        let number = self.catalog.chapters()[index - 1].number;
        self.load_chapter(number).await.map(Some)
    }

    /// The persisted last-read chapter, if it still names a catalog entry.
    /// The caller decides whether to auto-load it or show a "continue"
    /// affordance.
    pub async fn resume_last_read(&self) -> Result<Option<i64>, ReaderError> {
        if self.catalog.is_empty() {
            return Ok(None);
        }

        let Some(value) = self.setting_repo.get(LAST_READ_CHAPTER_KEY).await? else {
            return Ok(None);
        };

        let Ok(number) = value.parse::<i64>() else {
            warn!("ignoring unparsable last read chapter {value:?}");
            return Ok(None);
        };

        Ok(self.catalog.get(number).map(|c| c.number))
    }

    pub fn navigation_availability(&self) -> NavigationAvailability {
        match self.current_index() {
            Some(index) => NavigationAvailability {
                can_go_prev: index > 0,
                can_go_next: index + 1 < self.catalog.len(),
            },
            None => NavigationAvailability {
                can_go_prev: false,
                can_go_next: false,
            },
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.current_chapter
            .and_then(|number| self.catalog.index_of(number))
    }
}

use thiserror::Error;

use crate::domain::{
    entities::{catalog::Catalog, chapter::Chapter},
    repositories::content::{ContentRepository, ContentRepositoryError},
};

/// Hard ceiling for probe-mode discovery.
pub const MAX_PROBE_CHAPTERS: i64 = 1000;

/// Consecutive misses with zero hits so far before probing gives up. A
/// heuristic for "the source is empty", not a guarantee: a catalog whose
/// first chapter is numbered past the window reads as empty.
pub const EMPTY_PROBE_MISS_LIMIT: u32 = 10;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no chapters discoverable")]
    Empty,
    #[error("content source error: {0}")]
    Source(#[from] ContentRepositoryError),
    #[error("filename does not match ch_<digits>.txt: {0}")]
    InvalidFilename(String),
}

pub struct CatalogService<C>
where
    C: ContentRepository,
{
    repo: C,
    empty_probe_miss_limit: u32,
}

impl<C> CatalogService<C>
where
    C: ContentRepository,
{
    pub fn new(repo: C) -> Self {
        Self {
            repo,
            empty_probe_miss_limit: EMPTY_PROBE_MISS_LIMIT,
        }
    }

    pub fn with_empty_probe_miss_limit(self, limit: u32) -> Self {
        Self {
            empty_probe_miss_limit: limit,
            ..self
        }
    }

    /// Discovers the catalog, preferring a manifest over probing.
    pub async fn build_catalog(&self) -> Result<Catalog, CatalogError> {
        let chapters = match self.repo.manifest().await? {
            Some(filenames) => parse_manifest(filenames)?,
            None => self.probe_chapters().await?,
        };

        if chapters.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Catalog::from_chapters(chapters))
    }

    async fn probe_chapters(&self) -> Result<Vec<Chapter>, CatalogError> {
        let mut chapters = Vec::new();
        let mut consecutive_misses = 0;

        for number in 1..=MAX_PROBE_CHAPTERS {
            let filename = Chapter::filename_for(number);

            if self.repo.exists(&filename).await? {
                chapters.push(Chapter { number, filename });
                consecutive_misses = 0;
            } else {
                consecutive_misses += 1;
                if chapters.is_empty() && consecutive_misses >= self.empty_probe_miss_limit {
                    debug!("no chapter found in {consecutive_misses} probes, treating source as empty");
                    break;
                }
            }
        }

        Ok(chapters)
    }
}

fn parse_manifest(filenames: Vec<String>) -> Result<Vec<Chapter>, CatalogError> {
    filenames
        .into_iter()
        .map(|filename| {
            Chapter::from_filename(&filename).ok_or_else(|| CatalogError::InvalidFilename(filename))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Content source double: a set of present filenames, an optional
    /// manifest, and a probe counter.
    #[derive(Default)]
    struct FakeContent {
        files: HashSet<String>,
        manifest: Option<Vec<String>>,
        unreachable: bool,
        existence_checks: AtomicU32,
    }

    impl FakeContent {
        fn with_chapters(numbers: &[i64]) -> Self {
            Self {
                files: numbers.iter().map(|n| Chapter::filename_for(*n)).collect(),
                ..Self::default()
            }
        }

        fn with_manifest(filenames: &[&str]) -> Self {
            Self {
                manifest: Some(filenames.iter().map(|f| f.to_string()).collect()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ContentRepository for FakeContent {
        async fn exists(&self, filename: &str) -> Result<bool, ContentRepositoryError> {
            if self.unreachable {
                return Err(unreachable_error());
            }
            self.existence_checks.fetch_add(1, Ordering::SeqCst);
            Ok(self.files.contains(filename))
        }

        async fn read(&self, filename: &str) -> Result<String, ContentRepositoryError> {
            Err(ContentRepositoryError::NotFound(filename.to_string()))
        }

        async fn manifest(&self) -> Result<Option<Vec<String>>, ContentRepositoryError> {
            if self.unreachable {
                return Err(unreachable_error());
            }
            Ok(self.manifest.clone())
        }
    }

    fn unreachable_error() -> ContentRepositoryError {
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "source unreachable").into()
    }

    #[tokio::test]
    async fn test_manifest_mode_parses_and_sorts() {
        let svc = CatalogService::new(FakeContent::with_manifest(&[
            "ch_6.txt", "ch_1.txt", "ch_5.txt", "ch_2.txt",
        ]));

        let catalog = svc.build_catalog().await.unwrap();

        let numbers: Vec<i64> = catalog.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 5, 6]);
    }

    #[tokio::test]
    async fn test_manifest_mode_skips_probing() {
        let mut repo = FakeContent::with_manifest(&["ch_1.txt"]);
        repo.files.insert(Chapter::filename_for(2));

        let svc = CatalogService::new(repo);
        let catalog = svc.build_catalog().await.unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_manifest_mode_rejects_invalid_filename() {
        let svc =
            CatalogService::new(FakeContent::with_manifest(&["ch_1.txt", "chapter_two.txt"]));

        let err = svc.build_catalog().await.unwrap_err();

        assert!(matches!(err, CatalogError::InvalidFilename(f) if f == "chapter_two.txt"));
    }

    #[tokio::test]
    async fn test_empty_manifest() {
        let svc = CatalogService::new(FakeContent::with_manifest(&[]));

        assert!(matches!(
            svc.build_catalog().await,
            Err(CatalogError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_probe_mode_finds_contiguous_chapters() {
        let svc = CatalogService::new(FakeContent::with_chapters(&[1, 2, 3]));

        let catalog = svc.build_catalog().await.unwrap();

        let numbers: Vec<i64> = catalog.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_probe_mode_keeps_going_over_gaps_once_anything_hit() {
        let svc = CatalogService::new(FakeContent::with_chapters(&[1, 2, 3, 500]));

        let catalog = svc.build_catalog().await.unwrap();

        let numbers: Vec<i64> = catalog.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 500]);
    }

    #[tokio::test]
    async fn test_probe_mode_probes_to_the_ceiling_after_a_hit() {
        let repo = FakeContent::with_chapters(&[1]);
        let svc = CatalogService::new(repo);

        svc.build_catalog().await.unwrap();

        assert_eq!(
            svc.repo.existence_checks.load(Ordering::SeqCst),
            MAX_PROBE_CHAPTERS as u32
        );
    }

    #[tokio::test]
    async fn test_probe_mode_stops_early_when_nothing_found() {
        let repo = FakeContent::with_chapters(&[15, 16]);
        let svc = CatalogService::new(repo);

        let result = svc.build_catalog().await;

        assert!(matches!(result, Err(CatalogError::Empty)));
        assert_eq!(
            svc.repo.existence_checks.load(Ordering::SeqCst),
            EMPTY_PROBE_MISS_LIMIT
        );
    }

    #[tokio::test]
    async fn test_probe_miss_limit_is_configurable() {
        let repo = FakeContent::with_chapters(&[4]);
        let svc = CatalogService::new(repo).with_empty_probe_miss_limit(3);

        let result = svc.build_catalog().await;

        assert!(matches!(result, Err(CatalogError::Empty)));
        assert_eq!(svc.repo.existence_checks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_unreachable_source() {
        let repo = FakeContent {
            unreachable: true,
            ..FakeContent::default()
        };

        let result = CatalogService::new(repo).build_catalog().await;

        assert!(matches!(result, Err(CatalogError::Source(_))));
    }
}

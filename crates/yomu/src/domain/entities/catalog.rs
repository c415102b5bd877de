use super::chapter::Chapter;

/// Ordered list of discoverable chapters. Built once at startup and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    chapters: Vec<Chapter>,
}

impl Catalog {
    /// Sorts ascending by number. Duplicate numbers keep the first
    /// occurrence in source order.
    pub fn from_chapters(mut chapters: Vec<Chapter>) -> Self {
        chapters.sort_by_key(|c| c.number);
        chapters.dedup_by_key(|c| c.number);

        Self { chapters }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn get(&self, number: i64) -> Option<&Chapter> {
        self.index_of(number).map(|index| &self.chapters[index])
    }

    pub fn index_of(&self, number: i64) -> Option<usize> {
        self.chapters
            .binary_search_by_key(&number, |c| c.number)
            .ok()
    }

    pub fn first(&self) -> Option<&Chapter> {
        self.chapters.first()
    }

    pub fn last(&self) -> Option<&Chapter> {
        self.chapters.last()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chapter(number: i64) -> Chapter {
        Chapter {
            number,
            filename: Chapter::filename_for(number),
        }
    }

    #[test]
    fn test_sorted_ascending() {
        let catalog = Catalog::from_chapters(vec![chapter(6), chapter(1), chapter(5), chapter(2)]);

        let numbers: Vec<i64> = catalog.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let first = Chapter {
            number: 2,
            filename: "ch_2.txt".to_string(),
        };
        let duplicate = Chapter {
            number: 2,
            filename: "ch_02.txt".to_string(),
        };
        let catalog = Catalog::from_chapters(vec![chapter(1), first.clone(), duplicate]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2), Some(&first));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_chapters(vec![chapter(1), chapter(2), chapter(5)]);

        assert_eq!(catalog.index_of(5), Some(2));
        assert_eq!(catalog.index_of(3), None);
        assert_eq!(catalog.get(2).map(|c| c.filename.as_str()), Some("ch_2.txt"));
        assert_eq!(catalog.first().map(|c| c.number), Some(1));
        assert_eq!(catalog.last().map(|c| c.number), Some(5));
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.first(), None);
        assert_eq!(catalog.last(), None);
    }
}

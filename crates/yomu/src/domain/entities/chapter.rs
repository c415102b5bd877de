use fancy_regex::Regex;
use serde::Serialize;

/// A single entry of the catalog, parsed from a `ch_<digits>.txt` filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub number: i64,
    pub filename: String,
}

impl Chapter {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let number = parse_chapter_number(filename)?;

        Some(Self {
            number,
            filename: filename.to_string(),
        })
    }

    pub fn filename_for(number: i64) -> String {
        format!("ch_{number}.txt")
    }
}

pub fn parse_chapter_number(filename: &str) -> Option<i64> {
    let Ok(number_re) = Regex::new(r"^ch_(\d+)\.txt$") else {
        return None;
    };

    let number = number_re
        .captures(filename)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())?;

    (number >= 1).then_some(number)
}

/// A fetched chapter body, split into display paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterContent {
    pub number: i64,
    pub paragraphs: Vec<String>,
}

impl ChapterContent {
    /// One paragraph per non-blank line, trimmed, original order. Lines are
    /// never merged or re-wrapped.
    pub fn from_raw(number: i64, raw: &str) -> Self {
        let paragraphs = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { number, paragraphs }
    }
}

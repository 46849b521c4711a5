use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// A 4-digit year in the 1900s or 2000s, standing alone
// e.g., "Roja 1992", "Barbie 2023", "2022/2023 Pop Hit"
static TITLE_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<year>(?:19|20)\d{2})\b").unwrap()
});

/// One row of the song catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Track name plus source film/year, e.g. "Kadhal Rojave (Roja 1992)".
    pub title: String,
    pub artist: String,
    /// Language/era tag, e.g. "Tamil/Modern-2025".
    pub category: String,
    pub popularity_score: f64,
    pub listen_url: String,
}

impl SongRecord {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        category: impl Into<String>,
        popularity_score: f64,
        listen_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            category: category.into(),
            popularity_score,
            listen_url: listen_url.into(),
        }
    }

    /// Release year embedded in the title, if any.
    /// Takes the last year token so "(2022/2023 Pop Hit)" yields 2023.
    pub fn release_year(&self) -> Option<u16> {
        TITLE_YEAR_RE
            .captures_iter(&self.title)
            .last()
            .and_then(|caps| caps["year"].parse().ok())
    }

    /// Name of the first blank text field, if any.
    pub(crate) fn blank_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("artist", &self.artist),
            ("category", &self.category),
            ("listen_url", &self.listen_url),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// A selected song as handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSong<'a> {
    pub rank: usize,
    pub title: &'a str,
    pub artist: &'a str,
    pub category: &'a str,
    pub popularity_score: f64,
    pub listen_url: &'a str,
    pub release_year: Option<u16>,
}

impl<'a> RankedSong<'a> {
    pub fn new(rank: usize, song: &'a SongRecord) -> Self {
        Self {
            rank,
            title: &song.title,
            artist: &song.artist,
            category: &song.category,
            popularity_score: song.popularity_score,
            listen_url: &song.listen_url,
            release_year: song.release_year(),
        }
    }
}

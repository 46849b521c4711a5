mod builtin;
pub mod models;

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

pub use builtin::builtin_songs;
pub use models::{RankedSong, SongRecord};

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("custom song #{index} has an empty `{field}` field")]
    IncompleteRecord { index: usize, field: &'static str },
    #[error("custom song #{index} has a non-finite popularity score ({score})")]
    InvalidScore { index: usize, score: f64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Config file song definition (deserialized from TOML `[[songs]]`).
#[derive(Debug, Deserialize, Clone)]
pub struct CustomSongConfig {
    pub title: String,
    pub artist: String,
    pub category: String,
    pub popularity_score: f64,
    pub listen_url: String,
}

impl From<&CustomSongConfig> for SongRecord {
    fn from(custom: &CustomSongConfig) -> Self {
        SongRecord::new(
            custom.title.trim(),
            custom.artist.trim(),
            custom.category.trim(),
            custom.popularity_score,
            custom.listen_url.trim(),
        )
    }
}

/// The song catalog. Immutable once built; share it by reference.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<SongRecord>,
    /// Distinct categories, sorted
    categories: Vec<String>,
    /// Maps category → number of rows
    category_counts: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_records(builtin_songs())
    }

    /// Built-in rows followed by custom rows from the config file.
    pub fn with_custom(custom_songs: &[CustomSongConfig]) -> Result<Self> {
        let mut records = builtin_songs();

        for (i, custom) in custom_songs.iter().enumerate() {
            let index = i + 1;
            let song = SongRecord::from(custom);
            if let Some(field) = song.blank_field() {
                return Err(CatalogError::IncompleteRecord { index, field });
            }
            if !song.popularity_score.is_finite() {
                return Err(CatalogError::InvalidScore {
                    index,
                    score: song.popularity_score,
                });
            }
            records.push(song);
        }

        if !custom_songs.is_empty() {
            log::info!("Added {} custom songs from config", custom_songs.len());
        }

        Ok(Self::from_records(records))
    }

    /// Build a catalog from rows as given. Row order is kept.
    pub fn from_records(records: Vec<SongRecord>) -> Self {
        let mut category_counts: HashMap<String, usize> = HashMap::new();
        for song in &records {
            *category_counts.entry(song.category.clone()).or_insert(0) += 1;
        }

        let mut categories: Vec<String> = category_counts.keys().cloned().collect();
        categories.sort();

        log::debug!(
            "Catalog built: {} songs in {} categories",
            records.len(),
            categories.len()
        );

        Catalog {
            records,
            categories,
            category_counts,
        }
    }

    /// All rows in catalog order.
    pub fn records(&self) -> &[SongRecord] {
        &self.records
    }

    /// Distinct categories present, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of rows tagged with `category` (exact match).
    pub fn category_count(&self, category: &str) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest release years found in titles.
    pub fn year_span(&self) -> Option<(u16, u16)> {
        let years = self.records.iter().filter_map(SongRecord::release_year);
        years.fold(None, |span, year| match span {
            None => Some((year, year)),
            Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
        })
    }
}

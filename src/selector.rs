use thiserror::Error;

use crate::catalog::{Catalog, RankedSong, SongRecord};

/// Picker label meaning "all categories combined".
pub const COMBINED_LABEL: &str = "Top Tamil & English Mix (Combined)";

#[derive(Error, Debug, PartialEq)]
pub enum SelectError {
    #[error("invalid argument: count must be a positive integer, got {0}")]
    InvalidArgument(i64),
}

pub type Result<T> = std::result::Result<T, SelectError>;

/// Which rows a selection draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every row in the catalog
    All,
    /// Rows whose category equals this string exactly
    Exact(String),
}

impl CategoryFilter {
    /// `None` or the combined picker label → `All`; anything else is an exact match.
    pub fn from_option(category: Option<String>) -> Self {
        match category {
            None => Self::All,
            Some(c) if c == COMBINED_LABEL => Self::All,
            Some(c) => Self::Exact(c),
        }
    }

    pub fn matches(&self, song: &SongRecord) -> bool {
        match self {
            Self::All => true,
            Self::Exact(category) => song.category == *category,
        }
    }

    /// Results heading for this filter.
    pub fn heading(&self) -> &str {
        match self {
            Self::All => "Top Combined Mix",
            Self::Exact(category) => category,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(category: Option<String>) -> Self {
        Self::from_option(category)
    }
}

/// Outcome of a selection. `Empty` is not an error: no rows matched the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    Empty,
    /// Best score first; `select` never returns this without rows
    Songs(Vec<&'a SongRecord>),
}

impl<'a> Selection<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Songs(songs) => songs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn songs(&self) -> &[&'a SongRecord] {
        match self {
            Self::Empty => &[],
            Self::Songs(songs) => songs,
        }
    }

    /// Songs paired with their 1-based rank.
    pub fn ranked(&self) -> Vec<RankedSong<'a>> {
        self.songs()
            .iter()
            .enumerate()
            .map(|(i, &song)| RankedSong::new(i + 1, song))
            .collect()
    }
}

/// Top `count` songs matching `filter`, highest popularity first.
/// Equal scores keep catalog order. Returns fewer than `count` songs when fewer match.
pub fn select<'a>(
    catalog: &'a Catalog,
    filter: &CategoryFilter,
    count: i64,
) -> Result<Selection<'a>> {
    if count <= 0 {
        return Err(SelectError::InvalidArgument(count));
    }

    let mut matching: Vec<&SongRecord> = catalog
        .records()
        .iter()
        .filter(|song| filter.matches(song))
        .collect();

    if matching.is_empty() {
        log::debug!("No songs match {:?}", filter);
        return Ok(Selection::Empty);
    }

    // sort_by is stable, so ties stay in catalog order
    matching.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));

    let n = usize::try_from(count).unwrap_or(usize::MAX).min(matching.len());
    log::debug!(
        "Selected {} of {} matching songs for {:?} (requested {})",
        n,
        matching.len(),
        filter,
        count
    );
    matching.truncate(n);

    Ok(Selection::Songs(matching))
}

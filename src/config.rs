use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::CustomSongConfig;

/// Count used when the caller doesn't ask for one.
pub const DEFAULT_COUNT: i64 = 10;

/// Largest count the CLI accepts.
pub const DEFAULT_MAX_COUNT: i64 = 1_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("requested {requested} songs; the maximum is {max} (set max_count in config to raise it)")]
    CountTooLarge { requested: i64, max: i64 },
}

/// Application configuration loaded from TOML config file.
/// All fields have sensible defaults; the config file is optional.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of songs to show when `-n` is omitted.
    pub default_count: i64,
    /// Upper bound on the requested number of songs.
    pub max_count: i64,
    /// Extra songs appended to the built-in catalog.
    pub songs: Vec<CustomSongConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            max_count: DEFAULT_MAX_COUNT,
            songs: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load config from `path`, or from `~/.config/songpick/config.toml` when `None`.
    /// Returns default config if file doesn't exist.
    /// Logs a warning if the file exists but can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).or_else(Self::config_path);
        match config_path {
            Some(path) if path.exists() => match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::parse(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            None => {
                log::debug!("No config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Parse config TOML. Out-of-range counts are replaced with defaults.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<AppConfig>(contents).map(Self::with_valid_counts)
    }

    /// Reset `max_count` below 1, then `default_count` outside `1..=max_count`.
    fn with_valid_counts(mut self) -> Self {
        if self.max_count < 1 {
            log::warn!(
                "max_count must be at least 1, got {}. Using {}.",
                self.max_count,
                DEFAULT_MAX_COUNT
            );
            self.max_count = DEFAULT_MAX_COUNT;
        }
        if !(1..=self.max_count).contains(&self.default_count) {
            let fallback = DEFAULT_COUNT.min(self.max_count);
            log::warn!(
                "default_count must be between 1 and {}, got {}. Using {}.",
                self.max_count,
                self.default_count,
                fallback
            );
            self.default_count = fallback;
        }
        self
    }

    /// Resolve requested count: CLI value > config default.
    pub fn resolve_count(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.default_count)
    }

    /// Reject counts above `max_count`. Non-positive counts are left to the selector.
    pub fn check_count(&self, count: i64) -> Result<(), ConfigError> {
        if count > self.max_count {
            return Err(ConfigError::CountTooLarge {
                requested: count,
                max: self.max_count,
            });
        }
        Ok(())
    }

    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.default_count, 10);
        assert_eq!(config.max_count, 1_000_000);
        assert!(config.songs.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::parse(
            r#"
            default_count = 3
            max_count = 5

            [[songs]]
            title = "Kesariya (Brahmastra 2022)"
            artist = "Arijit Singh"
            category = "Hindi/2020s"
            popularity_score = 9.3
            listen_url = "https://www.youtube.com/watch?v=example"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_count, 3);
        assert_eq!(config.max_count, 5);
        assert_eq!(config.songs.len(), 1);
        assert_eq!(config.songs[0].category, "Hindi/2020s");
        assert_eq!(config.songs[0].popularity_score, 9.3);
    }

    #[test]
    fn test_song_missing_field_is_parse_error() {
        let result = AppConfig::parse(
            r#"
            [[songs]]
            title = "No Artist"
            category = "English/90s"
            popularity_score = 9.0
            listen_url = "https://example.com"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_count() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_count(None), 10);
        assert_eq!(config.resolve_count(Some(4)), 4);
        assert_eq!(config.resolve_count(Some(0)), 0);
    }

    #[test]
    fn test_zero_max_count_replaced() {
        let config = AppConfig::parse("max_count = 0").unwrap();
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert_eq!(config.default_count, DEFAULT_COUNT);
        assert_eq!(config.check_count(1), Ok(()));
    }

    #[test]
    fn test_negative_max_count_replaced() {
        let config = AppConfig::parse("max_count = -4\ndefault_count = 3").unwrap();
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert_eq!(config.default_count, 3);
    }

    #[test]
    fn test_non_positive_default_count_replaced() {
        assert_eq!(AppConfig::parse("default_count = -5").unwrap().default_count, DEFAULT_COUNT);
        assert_eq!(AppConfig::parse("default_count = 0").unwrap().default_count, DEFAULT_COUNT);
    }

    #[test]
    fn test_default_count_above_max_replaced() {
        let config = AppConfig::parse("max_count = 5\ndefault_count = 8").unwrap();
        assert_eq!(config.max_count, 5);
        assert_eq!(config.default_count, 5);

        let config = AppConfig::parse("max_count = 50\ndefault_count = 80").unwrap();
        assert_eq!(config.default_count, DEFAULT_COUNT);
    }

    #[test]
    fn test_default_count_at_max_kept() {
        let config = AppConfig::parse("max_count = 5\ndefault_count = 5").unwrap();
        assert_eq!(config.default_count, 5);
    }

    #[test]
    fn test_check_count() {
        let config = AppConfig::parse("max_count = 5").unwrap();
        assert_eq!(config.check_count(5), Ok(()));
        assert_eq!(config.check_count(1), Ok(()));
        assert_eq!(
            config.check_count(6),
            Err(ConfigError::CountTooLarge { requested: 6, max: 5 })
        );
        // Zero and negatives are the selector's to reject
        assert_eq!(config.check_count(0), Ok(()));
        assert_eq!(config.check_count(-2), Ok(()));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("songpick-test-does-not-exist.toml");
        let config = AppConfig::load(Some(&path));
        assert_eq!(config.default_count, DEFAULT_COUNT);
    }

    #[test]
    fn test_load_unparseable_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "songpick-test-bad-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "default_count = \"many\"").unwrap();
        let config = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert_eq!(config.default_count, DEFAULT_COUNT);
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "songpick-test-good-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "default_count = 7").unwrap();
        let config = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert_eq!(config.default_count, 7);
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
    }
}

pub mod catalog;
pub mod config;
pub mod selector;

/// Application name for XDG paths
pub const APP_NAME: &str = "songpick";

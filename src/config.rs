//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use guestbook::canvas::{AxisOrder, CanvasError};
use guestbook::selection::{SelectionError, SelectionPolicy};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "data/guestbook.json";
pub const DEFAULT_COLUMNS: usize = 48;
pub const DEFAULT_ROWS: usize = 24;
pub const DEFAULT_RELOAD_SECS: u64 = 0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GUESTBOOK_SELECTION: {0}")]
    Selection(#[from] SelectionError),
    #[error("GUESTBOOK_AXES: {0}")]
    Axes(#[from] CanvasError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub policy: SelectionPolicy,
    pub axes: AxisOrder,
    /// Seconds between data-file reloads; 0 loads once at startup.
    pub reload_secs: u64,
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            policy: SelectionPolicy::default(),
            axes: AxisOrder::default(),
            reload_secs: DEFAULT_RELOAD_SECS,
        }
    }
}

impl GuestbookConfig {
    /// Build typed config from environment variables.
    ///
    /// All optional:
    /// - `PORT`: default 3000
    /// - `GUESTBOOK_DATA`: path to the entries JSON file
    /// - `GUESTBOOK_WIDTH` / `GUESTBOOK_HEIGHT`: grid columns / rows
    /// - `GUESTBOOK_SELECTION`: `first` (default), `last` or `most_recent`
    /// - `GUESTBOOK_AXES`: `row_is_y` (default) or `row_is_x`
    /// - `GUESTBOOK_RELOAD_SECS`: default 0 (no reload)
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown selection policy or axis order.
    pub fn from_env() -> Result<Self, ConfigError> {
        let policy = match std::env::var("GUESTBOOK_SELECTION") {
            Ok(raw) => raw.parse()?,
            Err(_) => SelectionPolicy::default(),
        };
        let axes = match std::env::var("GUESTBOOK_AXES") {
            Ok(raw) => raw.parse()?,
            Err(_) => AxisOrder::default(),
        };

        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT),
            data_path: std::env::var("GUESTBOOK_DATA").map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
            rows: env_parse("GUESTBOOK_HEIGHT", DEFAULT_ROWS),
            columns: env_parse("GUESTBOOK_WIDTH", DEFAULT_COLUMNS),
            policy,
            axes,
            reload_secs: env_parse("GUESTBOOK_RELOAD_SECS", DEFAULT_RELOAD_SECS),
        })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

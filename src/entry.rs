//! Guestbook entries and their display colors.
//!
//! An [`Entry`] is one submission: who wrote it, what they wrote, which cell
//! they painted and with what color. Entries arrive fully formed from the
//! loader and are never mutated afterwards.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::consts::DEFAULT_COLOR;

// =============================================================================
// COLOR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color is empty")]
    Empty,
    #[error("color must have 3 or 6 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digit in color: {0}")]
    Digit(String),
}

/// A CSS hex color stored without the leading `#`, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The unpainted-cell color, `ffffff`.
    #[must_use]
    pub fn white() -> Self {
        Self(DEFAULT_COLOR.to_owned())
    }

    /// Hex digits without the `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS form with the leading `#`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::white()
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ColorError::Length(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(digits.to_owned()));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// One guestbook submission.
///
/// Coordinates are signed so that malformed data (negative or far out of
/// range) can still be represented; consumers clip instead of rejecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub color: HexColor,
    pub position_x: i64,
    pub position_y: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Entry {
    /// Fragment id used for click-to-jump links, `r-<id>`.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("r-{}", self.id)
    }

    /// `created_at` in UTC as `YYYY-MM-DD HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted (year outside
    /// the four-digit range).
    pub fn formatted_timestamp(&self) -> Result<String, time::error::Format> {
        self.created_at
            .to_offset(UtcOffset::UTC)
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
    }
}

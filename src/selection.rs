//! Display policy for cells holding more than one entry.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, HexColor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown selection policy: {0} (expected 'first', 'last' or 'most_recent')")]
    Unknown(String),
}

/// Which entry of a stacked cell provides the displayed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Earliest in stacking order.
    #[default]
    First,
    /// Latest in stacking order.
    Last,
    /// Greatest `created_at`; ties go to the earlier stacking position.
    MostRecent,
}

impl SelectionPolicy {
    /// The entry whose color the cell displays.
    #[must_use]
    pub fn pick(self, cell: &[Entry]) -> Option<&Entry> {
        match self {
            Self::First => cell.first(),
            Self::Last => cell.last(),
            Self::MostRecent => cell.iter().reduce(|best, e| if e.created_at > best.created_at { e } else { best }),
        }
    }

    /// Display color for a cell; white when nobody painted it.
    #[must_use]
    pub fn cell_color(self, cell: &[Entry]) -> HexColor {
        self.pick(cell).map(|e| e.color.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::MostRecent => "most_recent",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = SelectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "most_recent" => Ok(Self::MostRecent),
            other => Err(SelectionError::Unknown(other.to_owned())),
        }
    }
}

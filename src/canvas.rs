//! The guestbook grid: rows of columns of entry stacks.
//!
//! DESIGN
//! ======
//! A [`Canvas`] is always rectangular. Each cell holds zero or more entries
//! in stacking order; overlapping submissions are expected and resolved at
//! display time by a [`crate::selection::SelectionPolicy`], never here.
//!
//! Which entry coordinate selects the row is an explicit [`AxisOrder`]
//! rather than a convention baked into the loops. The same value must be
//! used to arrange the grid and to cut neighborhoods out of it.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown axis order: {0} (expected 'row_is_y' or 'row_is_x')")]
    UnknownAxisOrder(String),
}

/// Maps entry coordinates onto grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// Row index follows `position_y`, column index follows `position_x`.
    #[default]
    RowIsY,
    /// Row index follows `position_x`, column index follows `position_y`.
    RowIsX,
}

impl AxisOrder {
    /// `(row, column)` coordinates of an entry under this mapping.
    #[must_use]
    pub fn cell_of(self, entry: &Entry) -> (i64, i64) {
        match self {
            Self::RowIsY => (entry.position_y, entry.position_x),
            Self::RowIsX => (entry.position_x, entry.position_y),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RowIsY => "row_is_y",
            Self::RowIsX => "row_is_x",
        }
    }
}

impl FromStr for AxisOrder {
    type Err = CanvasError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "row_is_y" => Ok(Self::RowIsY),
            "row_is_x" => Ok(Self::RowIsX),
            other => Err(CanvasError::UnknownAxisOrder(other.to_owned())),
        }
    }
}

/// One grid cell: every entry painted there, in stacking order.
pub type Cell = Vec<Entry>;

/// Rectangular guestbook grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
    columns: usize,
}

/// Result of placing loaded entries on a grid.
#[derive(Debug, Clone)]
pub struct Arrangement {
    pub canvas: Canvas,
    /// Entries whose coordinates fall outside the grid.
    pub skipped: Vec<Entry>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Canvas {
    /// Build a canvas from pre-arranged rows.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Ragged`] if any row length differs from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, CanvasError> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(CanvasError::Ragged { row, expected: columns, found });
        }
        Ok(Self { rows, columns })
    }

    /// A `rows × columns` canvas with every cell empty.
    #[must_use]
    pub fn blank(rows: usize, columns: usize) -> Self {
        Self { rows: vec![vec![Vec::new(); columns]; rows], columns }
    }

    /// Place entries on a blank `rows × columns` grid.
    ///
    /// Entries keep their input order within a cell. Entries outside the
    /// grid are returned in [`Arrangement::skipped`].
    #[must_use]
    pub fn arrange(rows: usize, columns: usize, entries: Vec<Entry>, axes: AxisOrder) -> Arrangement {
        let mut canvas = Self::blank(rows, columns);
        let mut skipped = Vec::new();

        for entry in entries {
            let (row, col) = axes.cell_of(&entry);
            match canvas.cell_index(row, col) {
                Some((r, c)) => canvas.rows[r][c].push(entry),
                None => skipped.push(entry),
            }
        }

        Arrangement { canvas, skipped }
    }

    fn cell_index(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            return None;
        };
        (r < self.rows.len() && c < self.columns).then_some((r, c))
    }
}

// =============================================================================
// ACCESS
// =============================================================================

impl Canvas {
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    /// Entries stacked at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&[Entry]> {
        self.rows.get(row)?.get(col).map(Vec::as_slice)
    }

    /// Every entry on the grid, row-major, in stacking order within a cell.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.rows.iter().flatten().flatten()
    }
}

//! Clipped context window around a post.
//!
//! A [`Neighborhood`] borrows the canvas and records which rows and columns
//! lie within `radius` cells of the post. Near an edge the window shrinks
//! instead of padding or wrapping, so it can be asymmetric. A post whose
//! coordinates miss the grid entirely yields an empty window.

#[cfg(test)]
#[path = "neighborhood_test.rs"]
mod neighborhood_test;

use std::ops::Range;

use crate::canvas::{AxisOrder, Canvas, Cell};
use crate::entry::Entry;

/// Non-owning view of the cells within `radius` of a post.
#[derive(Debug, Clone)]
pub struct Neighborhood<'a> {
    canvas: &'a Canvas,
    rows: Range<usize>,
    columns: Range<usize>,
}

impl<'a> Neighborhood<'a> {
    /// Window of side at most `2 * radius + 1` centered on `post`.
    #[must_use]
    pub fn around(canvas: &'a Canvas, post: &Entry, radius: usize, axes: AxisOrder) -> Self {
        let (row, col) = axes.cell_of(post);
        let rows = clip(row, radius, canvas.row_count());
        let columns = clip(col, radius, canvas.column_count());

        // Rows that keep no columns are dropped too: the window collapses to
        // zero rows instead of a stack of empty rows.
        if rows.is_empty() || columns.is_empty() {
            return Self { canvas, rows: 0..0, columns: 0..0 };
        }
        Self { canvas, rows, columns }
    }

    /// Half-open range of canvas rows inside the window.
    #[must_use]
    pub fn row_range(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Half-open range of canvas columns inside the window.
    #[must_use]
    pub fn column_range(&self) -> Range<usize> {
        self.columns.clone()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Window rows, each a slice of the cells inside the column range.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> {
        let canvas: &'a Canvas = self.canvas;
        let columns = self.columns.clone();
        canvas.rows()[self.rows.clone()]
            .iter()
            .map(move |row| &row[columns.clone()])
    }
}

/// Intersect `[center - radius, center + radius]` with `[0, len)`.
fn clip(center: i64, radius: usize, len: usize) -> Range<usize> {
    let radius = i64::try_from(radius).unwrap_or(i64::MAX);
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);

    let lo = center.saturating_sub(radius).max(0);
    let hi = center.saturating_add(radius).saturating_add(1).min(len_i);
    if lo >= hi {
        return 0..0;
    }

    // Both bounds are within [0, len] here.
    let lo = usize::try_from(lo).unwrap_or(len);
    let hi = usize::try_from(hi).unwrap_or(len);
    lo..hi
}

//! Shared constants for the guestbook crate.

// ── Grid ────────────────────────────────────────────────────────

/// Half-width of a post's context window, in cells.
pub const NEIGHBORHOOD_RADIUS: usize = 3;

/// Color shown for a cell nobody has painted.
pub const DEFAULT_COLOR: &str = "ffffff";

// ── Rendering ───────────────────────────────────────────────────

/// Edge length of one pixel on the full canvas, in CSS pixels.
pub const PIXEL_SIZE_PX: u32 = 12;

/// Edge length of one pixel inside a message preview, in CSS pixels.
pub const PREVIEW_PIXEL_SIZE_PX: u32 = 8;

/// Tooltip displacement from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (12.0, 16.0);

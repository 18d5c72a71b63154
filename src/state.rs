//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the immutable configuration and the current guestbook
//! snapshot. The loader task swaps whole snapshots; handlers only read.

use std::sync::Arc;

use guestbook::canvas::Canvas;
use guestbook::entry::Entry;
use tokio::sync::RwLock;

use crate::config::GuestbookConfig;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// One consistent view of the guestbook: the arranged grid plus the posts
/// in display order (newest first, as sorted by `build_snapshot`).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub canvas: Canvas,
    pub posts: Vec<Entry>,
    /// False until the first successful load.
    pub ready: bool,
}

impl Snapshot {
    /// Blank grid of the configured size, not yet ready.
    #[must_use]
    pub fn pending(config: &GuestbookConfig) -> Self {
        Self { canvas: Canvas::blank(config.rows, config.columns), posts: Vec::new(), ready: false }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GuestbookConfig>,
    pub guestbook: Arc<RwLock<Snapshot>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: GuestbookConfig) -> Self {
        let pending = Snapshot::pending(&config);
        Self { config: Arc::new(config), guestbook: Arc::new(RwLock::new(pending)) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

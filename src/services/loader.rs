//! Loader service — reads guestbook entries and publishes snapshots.
//!
//! DESIGN
//! ======
//! Entries live in a JSON array on disk. A background task loads the file
//! at startup and, when a reload interval is configured, again on every
//! tick. Each successful load builds a complete [`Snapshot`] off-lock and
//! swaps it in with a single write, so readers never see a half-built grid.
//!
//! ERROR HANDLING
//! ==============
//! A failed load is logged and the previous snapshot stays in place,
//! including its readiness. A broken file after a good load therefore
//! keeps serving the last good guestbook.

use std::path::{Path, PathBuf};
use std::time::Duration;

use guestbook::canvas::Canvas;
use guestbook::entry::Entry;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::config::GuestbookConfig;
use crate::state::{AppState, Snapshot};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// LOADING
// =============================================================================

/// Read a JSON array of entries from `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not a valid entry array.
pub async fn load_entries(path: &Path) -> Result<Vec<Entry>, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

/// Arrange `entries` on the configured grid and order posts newest first.
///
/// Grid stacking keeps file order; the post list is a stable sort on
/// `created_at` so equal timestamps also keep file order.
#[must_use]
pub fn build_snapshot(config: &GuestbookConfig, entries: Vec<Entry>) -> Snapshot {
    let mut posts = entries.clone();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let arranged = Canvas::arrange(config.rows, config.columns, entries, config.axes);
    for entry in &arranged.skipped {
        warn!(
            id = %entry.id,
            x = entry.position_x,
            y = entry.position_y,
            rows = config.rows,
            columns = config.columns,
            "guestbook: entry outside grid, not painted"
        );
    }

    Snapshot { canvas: arranged.canvas, posts, ready: true }
}

/// Load the data file and swap in a fresh snapshot. Returns the entry count.
///
/// # Errors
///
/// Returns the load error; the current snapshot is left untouched.
pub async fn reload(state: &AppState) -> Result<usize, LoadError> {
    let entries = load_entries(&state.config.data_path).await?;
    let count = entries.len();
    let snapshot = build_snapshot(&state.config, entries);

    *state.guestbook.write().await = snapshot;
    Ok(count)
}

/// Spawn the background loader task. Returns a handle for shutdown.
pub fn spawn_loader_task(state: AppState) -> JoinHandle<()> {
    let reload_secs = state.config.reload_secs;
    info!(path = %state.config.data_path.display(), reload_secs, "guestbook loader configured");

    tokio::spawn(async move {
        load_and_log(&state).await;
        if reload_secs == 0 {
            return;
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(reload_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; the initial load already ran.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            load_and_log(&state).await;
        }
    })
}

async fn load_and_log(state: &AppState) {
    match reload(state).await {
        Ok(entries) => info!(entries, "guestbook: snapshot loaded"),
        Err(e) => error!(error = %e, "guestbook: load failed, keeping previous snapshot"),
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;

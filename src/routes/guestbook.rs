//! Guestbook page and read-only JSON routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use guestbook::canvas::Cell;
use guestbook::consts::NEIGHBORHOOD_RADIUS;
use guestbook::entry::{Entry, HexColor};
use guestbook::neighborhood::Neighborhood;
use guestbook::pointer::{MousePosition, PagePoint, PointerEvents, StickCursor};
use guestbook::render::{self, GuestbookPage, Hover};
use guestbook::selection::SelectionPolicy;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum GuestbookError {
    #[error("entry not found: {0}")]
    NotFound(Uuid),
}

pub(crate) fn guestbook_error_to_status(err: GuestbookError) -> StatusCode {
    match err {
        GuestbookError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// Optional hover preview on `GET /`: the cell to highlight and the pointer
/// position its tooltip follows.
#[derive(Debug, Default, Deserialize)]
pub struct HoverQuery {
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Track `events` for the requested cell and replay the requested pointer
/// position into it. The returned hover holds the only listener; dropping it
/// unsubscribes.
pub(crate) fn hover_from_query(query: &HoverQuery, events: &PointerEvents) -> Option<Hover> {
    let (Some(row), Some(column)) = (query.row, query.column) else {
        return None;
    };
    let mouse = MousePosition::track(events);
    if let (Some(x), Some(y)) = (query.x, query.y) {
        events.emit(PagePoint::new(x, y));
    }
    Some(Hover { row, column, cursor: StickCursor::new(mouse) })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasResponse {
    pub ready: bool,
    pub rows: usize,
    pub columns: usize,
    pub colors: Vec<Vec<HexColor>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodResponse {
    pub id: Uuid,
    pub row_start: usize,
    pub row_end: usize,
    pub column_start: usize,
    pub column_end: usize,
    pub colors: Vec<Vec<HexColor>>,
}

fn colors<'a>(rows: impl Iterator<Item = &'a [Cell]>, policy: SelectionPolicy) -> Vec<Vec<HexColor>> {
    rows.map(|row| row.iter().map(|cell| policy.cell_color(cell)).collect())
        .collect()
}

/// `GET /` — the guestbook page, rendered server-side.
pub async fn page(State(state): State<AppState>, Query(query): Query<HoverQuery>) -> Html<String> {
    let (canvas, ready, posts) = {
        let snapshot = state.guestbook.read().await;
        (Arc::new(snapshot.canvas.clone()), snapshot.ready, snapshot.posts.clone())
    };
    let policy = state.config.policy;
    let axes = state.config.axes;
    let events = PointerEvents::new();
    let hover = hover_from_query(&query, &events);

    Html(render::to_html(move || {
        view! {
            <GuestbookPage
                canvas=canvas
                ready=ready
                posts=posts
                policy=policy
                axes=axes
                hover=hover
                events=events
            />
        }
    }))
}

/// `GET /api/guestbook/canvas` — display color of every cell.
pub async fn canvas(State(state): State<AppState>) -> Json<CanvasResponse> {
    let snapshot = state.guestbook.read().await;
    let grid = &snapshot.canvas;

    Json(CanvasResponse {
        ready: snapshot.ready,
        rows: grid.row_count(),
        columns: grid.column_count(),
        colors: colors(grid.rows().iter().map(Vec::as_slice), state.config.policy),
    })
}

/// `GET /api/guestbook/entries` — all posts, newest first.
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.guestbook.read().await.posts.clone())
}

/// `GET /api/guestbook/entries/:id/neighborhood` — the post's context window.
pub async fn entry_neighborhood(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NeighborhoodResponse>, StatusCode> {
    let snapshot = state.guestbook.read().await;
    let post = snapshot
        .posts
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| guestbook_error_to_status(GuestbookError::NotFound(id)))?;

    let window = Neighborhood::around(&snapshot.canvas, post, NEIGHBORHOOD_RADIUS, state.config.axes);
    let rows = window.row_range();
    let columns = window.column_range();

    Ok(Json(NeighborhoodResponse {
        id,
        row_start: rows.start,
        row_end: rows.end,
        column_start: columns.start,
        column_end: columns.end,
        colors: colors(window.rows(), state.config.policy),
    }))
}

#[cfg(test)]
#[path = "guestbook_test.rs"]
mod tests;

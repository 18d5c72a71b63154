//! Rendering: leptos components for pixels, the canvas, messages and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the only place that produces markup. Components receive
//! owned snapshots of the canvas and entries plus the pointer state and are
//! rendered server-side with [`to_html`]; they never mutate guestbook state.
//!
//! Data problems never surface as errors: empty cells paint white, posts off
//! the grid get an empty preview, unformattable timestamps are left out.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use time::format_description::well_known::Rfc3339;

use crate::canvas::{AxisOrder, Canvas};
use crate::consts::{NEIGHBORHOOD_RADIUS, PIXEL_SIZE_PX, PREVIEW_PIXEL_SIZE_PX};
use crate::entry::{Entry, HexColor};
use crate::neighborhood::Neighborhood;
use crate::pointer::{PagePoint, PointerEvents, StickCursor};
use crate::selection::SelectionPolicy;

const PAGE_STYLE: &str = ".guestbook-row{display:flex}\
    .pixel-tooltip{background:#111;color:#fff;padding:4px 8px}";

/// A hovered canvas cell and the cursor its tooltip follows.
#[derive(Clone)]
pub struct Hover {
    pub row: usize,
    pub column: usize,
    pub cursor: StickCursor,
}

/// Render a view tree to an HTML string inside a fresh reactive owner.
pub fn to_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

fn pixel_style(color: &HexColor, size_px: u32) -> String {
    format!("width:{size_px}px;height:{size_px}px;background-color:{}", color.css())
}

// =============================================================
// Pixel
// =============================================================

/// One colored cell. With an entry attached it links to `#r-<id>`; with a
/// cursor attached as well it shows the entry's message in a tooltip that
/// follows the pointer.
#[component]
pub fn Pixel(
    color: HexColor,
    size_px: u32,
    #[prop(default = None)] entry: Option<Entry>,
    #[prop(default = None)] cursor: Option<StickCursor>,
) -> impl IntoView {
    let swatch = view! { <div class="pixel" style=pixel_style(&color, size_px)></div> };

    let Some(entry) = entry else {
        return swatch.into_any();
    };

    let href = format!("#{}", entry.anchor());
    let tooltip = cursor.map(|cursor| {
        let text = entry.message;
        cursor.render(Box::new(move || view! { <div class="pixel-tooltip">{text}</div> }.into_any()))
    });

    view! {
        <a class="pixel-link" href=href>
            {swatch}
        </a>
        {tooltip}
    }
    .into_any()
}

// =============================================================
// Canvas
// =============================================================

/// The full grid, one pixel per cell, colored by the selection policy.
///
/// Pointer moves over the grid are fed to `events`, which is what any
/// [`MousePosition`](crate::pointer::MousePosition) tracking them listens to.
#[component]
pub fn CanvasGuestbook(
    canvas: Arc<Canvas>,
    ready: bool,
    policy: SelectionPolicy,
    #[prop(default = None)] hover: Option<Hover>,
    #[prop(optional)] events: PointerEvents,
) -> impl IntoView {
    let class = if ready { "guestbook-canvas" } else { "guestbook-canvas guestbook-canvas--loading" };
    let on_mouse_move = move |ev: MouseEvent| {
        events.emit(PagePoint::new(f64::from(ev.page_x()), f64::from(ev.page_y())));
    };

    let rows = canvas
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let pixels = row
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    let cursor = hover
                        .as_ref()
                        .filter(|h| h.row == r && h.column == c)
                        .map(|h| h.cursor.clone());
                    view! {
                        <Pixel
                            color=policy.cell_color(cell)
                            size_px=PIXEL_SIZE_PX
                            entry=policy.pick(cell).cloned()
                            cursor=cursor
                        />
                    }
                })
                .collect_view();
            view! { <div class="guestbook-row">{pixels}</div> }
        })
        .collect_view();

    view! {
        <div
            class=class
            data-ready=ready.to_string()
            data-rows=canvas.row_count().to_string()
            data-columns=canvas.column_count().to_string()
            on:mousemove=on_mouse_move
        >
            {rows}
        </div>
    }
}

// =============================================================
// Message
// =============================================================

/// One post: its neighborhood preview beside name, text and timestamp.
#[component]
pub fn Message(post: Entry, canvas: Arc<Canvas>, policy: SelectionPolicy, axes: AxisOrder) -> impl IntoView {
    let anchor = post.anchor();
    let window = Neighborhood::around(&canvas, &post, NEIGHBORHOOD_RADIUS, axes);
    let preview_rows = window.row_count().to_string();
    let preview_columns = window.column_count().to_string();
    let preview = window
        .rows()
        .map(|row| {
            let pixels = row
                .iter()
                .map(|cell| view! { <Pixel color=policy.cell_color(cell) size_px=PREVIEW_PIXEL_SIZE_PX/> })
                .collect_view();
            view! { <div class="guestbook-row">{pixels}</div> }
        })
        .collect_view();

    let timestamp = match (post.created_at.format(&Rfc3339), post.formatted_timestamp()) {
        (Ok(machine), Ok(human)) => Some(view! { <time datetime=machine>{human}</time> }),
        _ => None,
    };

    view! {
        <article class="guestbook-message" id=anchor>
            <div class="guestbook-preview" data-rows=preview_rows data-columns=preview_columns>
                {preview}
            </div>
            <div class="guestbook-message__body">
                <span class="guestbook-message__name">{post.name}</span>
                {timestamp}
                <p class="guestbook-message__text">{post.message}</p>
            </div>
        </article>
    }
}

// =============================================================
// Page
// =============================================================

/// The complete guestbook document.
///
/// `posts` render in the order given; the server's loader hands them over
/// newest first.
#[component]
pub fn GuestbookPage(
    canvas: Arc<Canvas>,
    ready: bool,
    posts: Vec<Entry>,
    policy: SelectionPolicy,
    axes: AxisOrder,
    #[prop(default = None)] hover: Option<Hover>,
    #[prop(optional)] events: PointerEvents,
) -> impl IntoView {
    let count = posts.len().to_string();
    let messages = posts
        .into_iter()
        .map(|post| view! { <Message post=post canvas=Arc::clone(&canvas) policy=policy axes=axes/> })
        .collect_view();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Guestbook"</title>
                <style>{PAGE_STYLE}</style>
            </head>
            <body>
                <main>
                    <h1>"Guestbook"</h1>
                    <CanvasGuestbook canvas=canvas ready=ready policy=policy hover=hover events=events/>
                    <section class="guestbook-messages" data-count=count>
                        {messages}
                    </section>
                </main>
            </body>
        </html>
    }
}

//! Pixel guestbook: data model, neighborhood windows and markup rendering.
//!
//! Guestbook entries each claim one cell of a rectangular grid and paint it
//! with a chosen color. This crate owns the read side of that grid: arranging
//! loaded entries into a [`canvas::Canvas`], picking a display color per cell,
//! cutting out the small window around a post for its context preview, and
//! rendering all of it to HTML through leptos components. The binary in `main.rs` wraps it in an HTTP
//! server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`entry`] | Guestbook entries and hex colors |
//! | [`canvas`] | Rectangular grid of entry stacks and the axis mapping |
//! | [`neighborhood`] | Clipped window around a post |
//! | [`selection`] | Which entry of a stacked cell is displayed |
//! | [`pointer`] | Pointer-move emitter, scoped subscriptions, cursor-following tooltip |
//! | [`render`] | Leptos components for pixels, the canvas, messages and the page |
//! | [`consts`] | Shared constants (radius, sizes, default color) |

pub mod canvas;
pub mod consts;
pub mod entry;
pub mod neighborhood;
pub mod pointer;
pub mod render;
pub mod selection;

//! Pointer-move tracking with scoped subscriptions.
//!
//! ARCHITECTURE
//! ============
//! [`PointerEvents`] is the source of pointer-move notifications. Anything
//! that needs the live pointer position subscribes and receives a
//! [`Subscription`] guard; the listener stays registered exactly as long as
//! the guard lives. [`MousePosition`] is the common case: it subscribes on
//! construction, remembers the latest point, and releases its listener when
//! dropped. [`StickCursor`] pins rendered children at that point plus a fixed
//! offset.
//!
//! Dispatch clones the listener list and releases the registry lock before
//! invoking anything, so a listener may subscribe or unsubscribe from inside
//! its own callback.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::TOOLTIP_OFFSET;

// =============================================================================
// POINT
// =============================================================================

/// A position in page coordinates (CSS pixels from the document origin).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, offset: PagePoint) -> Self {
        Self { x: self.x + offset.x, y: self.y + offset.y }
    }
}

// =============================================================================
// EMITTER
// =============================================================================

type Listener = Arc<dyn Fn(PagePoint) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Source of pointer-move events. Clones share one listener registry.
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Arc<Mutex<Registry>>,
}

impl PointerEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every subsequent [`emit`](Self::emit).
    ///
    /// The listener is removed when the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(PagePoint) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(listener));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Deliver a pointer move to every live listener, in subscription order.
    pub fn emit(&self, point: PagePoint) {
        let listeners: Vec<Listener> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.values().cloned().collect()
        };
        for listener in listeners {
            listener(point);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

/// Guard for one registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener now instead of at end of scope.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Emitter already gone: nothing left to detach from.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .remove(&self.id);
    }
}

// =============================================================================
// MOUSE POSITION
// =============================================================================

/// Latest pointer position, tracked for as long as any clone of this value
/// lives. The listener is released when the last clone drops.
#[derive(Clone)]
pub struct MousePosition {
    latest: Arc<Mutex<Option<PagePoint>>>,
    _subscription: Arc<Subscription>,
}

impl MousePosition {
    /// Start tracking pointer moves from `events`.
    #[must_use]
    pub fn track(events: &PointerEvents) -> Self {
        let latest = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&latest);
        let subscription = events.subscribe(move |point| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(point);
        });
        Self { latest, _subscription: Arc::new(subscription) }
    }

    /// Last reported position, `None` until the pointer first moves.
    #[must_use]
    pub fn current(&self) -> Option<PagePoint> {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// STICK CURSOR
// =============================================================================

/// Floating wrapper that follows the pointer at a fixed offset.
#[derive(Clone)]
pub struct StickCursor {
    mouse: MousePosition,
    offset: PagePoint,
}

impl StickCursor {
    /// Follow `mouse` at the standard tooltip offset.
    #[must_use]
    pub fn new(mouse: MousePosition) -> Self {
        Self::with_offset(mouse, PagePoint::new(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1))
    }

    #[must_use]
    pub fn with_offset(mouse: MousePosition, offset: PagePoint) -> Self {
        Self { mouse, offset }
    }

    #[must_use]
    pub fn offset(&self) -> PagePoint {
        self.offset
    }

    /// Where the element belongs right now, if the pointer has moved yet.
    #[must_use]
    pub fn position(&self) -> Option<PagePoint> {
        self.mouse.current().map(|p| p.offset_by(self.offset))
    }

    /// Wrap `children` in an absolutely positioned element at
    /// [`position`](Self::position). Nothing is drawn before the first move.
    pub fn render(&self, children: Children) -> impl IntoView + use<> {
        self.position().map(|at| {
            let style = format!("position:absolute;left:{}px;top:{}px;pointer-events:none", at.x, at.y);
            view! {
                <div class="stick-cursor" style=style>
                    {children()}
                </div>
            }
        })
    }
}

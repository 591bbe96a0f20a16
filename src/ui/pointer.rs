//! # Outside-Pointer Subscriptions
//!
//! Lets a component learn about pointer-down events that land *outside* the
//! area it last rendered. Each subscriber gets a [`PointerSubscription`]
//! guard; dropping the guard removes the listener, so mounting and unmounting
//! components repeatedly never accumulates stale listeners.
//!
//! Everything runs on the UI thread, hence `Rc`/`RefCell` rather than locks.

use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct Listener {
    id: u64,
    /// Area the subscriber occupied on the last frame. `None` until first drawn.
    region: Option<Rect>,
    on_outside: Box<dyn FnMut()>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Shared hub that fans pointer-down events out to subscribers.
#[derive(Clone, Default)]
pub struct PointerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl fmt::Debug for PointerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

impl PointerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `on_outside` to run for every pointer-down outside the
    /// subscriber's region. The callback must not subscribe or unsubscribe.
    pub fn subscribe(&self, on_outside: impl FnMut() + 'static) -> PointerSubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            region: None,
            on_outside: Box::new(on_outside),
        });

        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Dispatch a pointer-down at terminal cell `(column, row)`.
    pub fn pointer_down(&self, column: u16, row: u16) {
        let position = Position::new(column, row);
        let mut registry = self.inner.borrow_mut();
        for listener in &mut registry.listeners {
            let inside = listener
                .region
                .is_some_and(|region| region.contains(position));
            if !inside {
                (listener.on_outside)();
            }
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for one listener. Unsubscribes on drop.
pub struct PointerSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl PointerSubscription {
    /// Record the area the subscriber covers on the current frame.
    pub fn set_region(&self, region: Option<Rect>) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            if let Some(listener) = registry.listeners.iter_mut().find(|l| l.id == self.id) {
                listener.region = region;
            }
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

//! Observable scroll position
//!
//! A `ScrollPosition` holds the single scalar offset of a scroll container and
//! notifies subscribed listeners whenever the host scroller moves it. Widgets
//! that derive visuals from the offset subscribe a listener that requests a
//! re-render instead of polling.
//!
//! ```rust
//! use perch_core::scroll::ScrollPosition;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let position = ScrollPosition::shared();
//! let hits = Arc::new(AtomicUsize::new(0));
//! let hits_clone = hits.clone();
//!
//! let id = ScrollPosition::subscribe(&position, move |_offset| {
//!     hits_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! ScrollPosition::set_offset(&position, 24.0);
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//!
//! ScrollPosition::unsubscribe(&position, id);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle for a subscribed scroll listener
    pub struct ListenerId;
}

/// Callback invoked with the new offset after every change
pub type ScrollListener = Arc<dyn Fn(f32) + Send + Sync>;

/// Scroll position shared between its owner and the host scroller
pub type SharedScrollPosition = Arc<Mutex<ScrollPosition>>;

/// Scalar scroll offset with change listeners
///
/// Positive offsets scroll content up. Negative values are overscroll and are
/// stored as-is; consumers decide how to treat them.
pub struct ScrollPosition {
    offset: f32,
    listeners: SlotMap<ListenerId, ScrollListener>,
}

impl fmt::Debug for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollPosition")
            .field("offset", &self.offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPosition {
    /// Create a position at offset 0 with no listeners
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            listeners: SlotMap::with_key(),
        }
    }

    /// Create a position already wrapped for sharing
    pub fn shared() -> SharedScrollPosition {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Current offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Number of subscribed listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Read the offset of a shared position
    ///
    /// A poisoned lock still yields the last written offset.
    pub fn read(position: &SharedScrollPosition) -> f32 {
        match position.lock() {
            Ok(guard) => guard.offset,
            Err(poisoned) => poisoned.into_inner().offset,
        }
    }

    /// Subscribe a listener to offset changes
    pub fn subscribe<F>(position: &SharedScrollPosition, listener: F) -> ListenerId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        let mut guard = match position.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.listeners.insert(Arc::new(listener))
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(position: &SharedScrollPosition, id: ListenerId) -> bool {
        let mut guard = match position.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.listeners.remove(id).is_some()
    }

    /// Move to `offset`, notifying listeners if the value changed
    ///
    /// Listeners run after the lock is released, so they may read the
    /// position. Returns true when listeners were notified.
    pub fn set_offset(position: &SharedScrollPosition, offset: f32) -> bool {
        let listeners: SmallVec<[ScrollListener; 4]> = {
            let mut guard = match position.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if guard.offset == offset {
                return false;
            }
            guard.offset = offset;
            guard.listeners.values().cloned().collect()
        };

        tracing::trace!(offset, listeners = listeners.len(), "scroll offset changed");
        for listener in &listeners {
            listener(offset);
        }
        true
    }

    /// Move by `delta` relative to the current offset
    pub fn jump_by(position: &SharedScrollPosition, delta: f32) -> bool {
        let current = Self::read(position);
        Self::set_offset(position, current + delta)
    }
}

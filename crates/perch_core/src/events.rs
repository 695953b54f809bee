//! Event identifiers and redraw signalling
//!
//! Widgets never drive the frame loop themselves. They mark a shared dirty
//! flag and optionally poke a host-supplied redraw callback; the host decides
//! when to render.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const SCROLL: EventType = 30;
    pub const RESIZE: EventType = 40;
    /// Safe-area insets changed
    pub const INSETS_CHANGED: EventType = 41;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// Callback registered by the host to schedule a frame
pub type RedrawCallback = Arc<dyn Fn() + Send + Sync>;

/// Coalescing "needs render" flag shared between a widget and its listeners
///
/// Any number of `mark` calls between two `take` calls yield one pending
/// render.
#[derive(Clone, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl fmt::Debug for DirtyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DirtyFlag").field(&self.is_set()).finish()
    }
}

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark dirty; returns true if this call transitioned clean -> dirty
    pub fn mark(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_flag_coalesces() {
        let flag = DirtyFlag::new();
        assert!(!flag.is_set());

        assert!(flag.mark());
        assert!(!flag.mark());
        assert!(!flag.mark());
        assert!(flag.is_set());

        assert!(flag.take());
        assert!(!flag.take());
        assert!(!flag.is_set());
    }

    #[test]
    fn test_dirty_flag_clones_share_state() {
        let flag = DirtyFlag::new();
        let listener_side = flag.clone();

        listener_side.mark();
        assert!(flag.is_set());
    }
}

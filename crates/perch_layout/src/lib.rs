//! Perch Layout
//!
//! A floating action control pinned over a collapsing-header scroll layout,
//! laid out with Taffy.
//!
//! The interesting part is [`mapper`]: two pure functions that turn the
//! current scroll offset into the control's position and scale and the edge
//! overlay's position and height. [`SliverFab`] mounts the layout, owns the
//! scroll position the host scroller drives and composes a [`perch_core::Layer`]
//! tree on each render.

pub mod config;
pub mod element;
pub mod environment;
pub mod error;
pub mod mapper;
pub mod style;
pub mod tree;
pub mod widgets;

pub use config::{FloatingContent, LayoutConfig, LayoutConfigBuilder, Placement, SliverFabSettings};
pub use element::ElementBounds;
pub use environment::{HostEnvironment, StaticEnvironment};
pub use error::{ConfigError, LayoutError, PerchError, Result};
pub use mapper::{
    DerivedVisualState, EdgeGeometry, FabGeometry, ScaleThresholds, ScrollInput,
    COLLAPSED_HEADER_HEIGHT,
};
pub use style::LayoutStyle;
pub use tree::{LayoutNodeId, LayoutTree};
pub use widgets::{MountedSliverFab, SliverFab};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::{
        FloatingContent, LayoutConfig, Placement, SliverFabSettings, DEFAULT_FAB_SIZE,
    };
    pub use crate::environment::{HostEnvironment, StaticEnvironment};
    pub use crate::error::{ConfigError, PerchError};
    pub use crate::mapper::{DerivedVisualState, ScrollInput, COLLAPSED_HEADER_HEIGHT};
    pub use crate::widgets::{MountedSliverFab, SliverFab};
}

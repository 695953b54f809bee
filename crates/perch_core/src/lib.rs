//! Perch Core Runtime
//!
//! This crate provides the foundational primitives shared by the Perch crates:
//!
//! - **Layers**: geometry, colors and the composable `Layer` tree widgets
//!   hand back to the host renderer
//! - **Scroll state**: an observable scroll offset with change listeners
//! - **Events**: event identifiers and the coalescing redraw flag
//!
//! # Example
//!
//! ```rust
//! use perch_core::{Layer, LayerProperties, Rect, UiNode};
//!
//! let tree = Layer::stack(vec![Layer::Content {
//!     node: UiNode::new(7),
//!     rect: Rect::new(0.0, 0.0, 56.0, 56.0),
//!     props: LayerProperties::new().with_name("fab"),
//! }]);
//!
//! assert!(tree.find_named("fab").is_some());
//! ```

pub mod events;
pub mod layer;
pub mod scroll;

pub use events::{event_types, DirtyFlag, EventType, RedrawCallback};
pub use layer::{
    Affine2D, Brush, Color, CornerRadius, Layer, LayerProperties, Point, Rect, Size, UiNode,
};
pub use scroll::{ListenerId, ScrollListener, ScrollPosition, SharedScrollPosition};

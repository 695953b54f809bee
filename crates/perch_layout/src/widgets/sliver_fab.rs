//! Sliver FAB layout node
//!
//! Pins a floating control over a collapsing-header scroll layout. While the
//! content scrolls the control follows the header edge and shrinks to nothing
//! as the header collapses, optionally with a rounded edge overlay drawn
//! between header and content.
//!
//! ```rust
//! use perch_core::{Color, ScrollPosition, Size, UiNode};
//! use perch_layout::prelude::*;
//!
//! let config = LayoutConfig::builder()
//!     .sections(vec![UiNode::new(1)])
//!     .floating_content(FloatingContent::new(UiNode::new(2)))
//!     .top_corner_radius(16.0)
//!     .has_pinned_header(true)
//!     .build()
//!     .unwrap();
//!
//! let fab = SliverFab::new(config);
//! let mut mounted = fab.mount(None).unwrap();
//! let env = StaticEnvironment::new(Size::new(360.0, 640.0)).with_surface_color(Color::WHITE);
//!
//! ScrollPosition::set_offset(mounted.scroll_position(), 150.0);
//! let layer = mounted.render(&env);
//! assert!(layer.find_named(SliverFab::FAB_LAYER).is_some());
//! ```

use perch_core::{
    event_types, Affine2D, Brush, CornerRadius, DirtyFlag, Layer, LayerProperties, ListenerId,
    RedrawCallback, ScrollPosition, SharedScrollPosition, Size,
};

use crate::config::{FloatingContent, LayoutConfig, Placement};
use crate::environment::HostEnvironment;
use crate::error::Result;
use crate::mapper::{self, DerivedVisualState, ScrollInput, COLLAPSED_HEADER_HEIGHT};
use crate::style::{AvailableSpace, Display, LayoutStyle, Style};
use crate::tree::{LayoutNodeId, LayoutTree};

/// Unmounted sliver FAB layout
#[derive(Clone, Debug)]
pub struct SliverFab {
    config: LayoutConfig,
}

impl SliverFab {
    /// Name of the root stack layer
    pub const ROOT_LAYER: &'static str = "sliver_fab";
    /// Name of the scroll content layer
    pub const CONTENT_LAYER: &'static str = "sliver_fab.content";
    /// Name of the edge overlay layer
    pub const EDGE_LAYER: &'static str = "sliver_fab.edge";
    /// Name of the floating control layer
    pub const FAB_LAYER: &'static str = "sliver_fab.fab";

    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Mount the layout
    ///
    /// Creates the scroll position the host scroller drives, subscribes the
    /// refresh listener and builds the layout tree. The returned guard
    /// unmounts when dropped.
    pub fn mount(&self, redraw: Option<RedrawCallback>) -> Result<MountedSliverFab<'_>> {
        let position = ScrollPosition::shared();
        let dirty = DirtyFlag::new();

        let subscription = {
            let dirty = dirty.clone();
            let listener = ScrollPosition::subscribe(&position, move |offset| {
                if dirty.mark() {
                    tracing::trace!(event = event_types::SCROLL, offset, "sliver fab invalidated");
                    if let Some(redraw) = &redraw {
                        redraw();
                    }
                }
            });
            Subscription {
                position: position.clone(),
                listener,
            }
        };

        let (tree, nodes) = build_tree(&self.config)?;

        let edges = self.config.thresholds(0.0, COLLAPSED_HEADER_HEIGHT);
        let threshold_warned = edges.is_degenerate();
        if threshold_warned {
            tracing::warn!(
                shrink_start = edges.shrink_start,
                vanish = edges.vanish,
                "sliver fab scale thresholds are inverted or empty; scale is not clamped"
            );
        }

        // nothing has been rendered yet
        dirty.mark();

        tracing::debug!(
            event = event_types::MOUNT,
            sections = self.config.sections().len(),
            edge = self.config.has_edge(),
            pinned = self.config.has_pinned_header(),
            "sliver fab mounted"
        );

        Ok(MountedSliverFab {
            fab: self,
            subscription,
            dirty,
            tree,
            nodes,
            last_frame: None,
            renders: 0,
            threshold_warned,
        })
    }
}

/// Listener registration released on drop
struct Subscription {
    position: SharedScrollPosition,
    listener: ListenerId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        ScrollPosition::unsubscribe(&self.position, self.listener);
    }
}

#[derive(Clone, Copy, Debug)]
struct LayoutNodes {
    root: LayoutNodeId,
    content: LayoutNodeId,
    edge: LayoutNodeId,
    fab: LayoutNodeId,
}

/// Inputs of the previous render, used to report environment changes
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrameInputs {
    inset_top: f32,
    viewport: Size,
}

fn build_tree(config: &LayoutConfig) -> Result<(LayoutTree, LayoutNodes)> {
    let mut tree = LayoutTree::new();

    let root = tree.create_node(LayoutStyle::stack_root(0.0, 0.0))?;
    let content = tree.create_node(LayoutStyle::fill())?;
    let edge = tree.create_node(hidden())?;
    let fab = tree.create_node(fab_style(config, 0.0))?;

    tree.add_child(root, content)?;
    tree.add_child(root, edge)?;
    tree.add_child(root, fab)?;

    Ok((
        tree,
        LayoutNodes {
            root,
            content,
            edge,
            fab,
        },
    ))
}

fn hidden() -> Style {
    Style {
        display: Display::None,
        ..Default::default()
    }
}

fn fab_style(config: &LayoutConfig, top: f32) -> Style {
    let FloatingContent { size, .. } = *config.floating_content();
    let placement: &Placement = config.floating_position();
    // both margins set: width comes from the margins
    let width = if placement.is_stretched() {
        None
    } else {
        Some(size.width)
    };

    LayoutStyle::anchored(
        top,
        placement.left_margin(),
        placement.right_margin(),
        width,
        size.height,
    )
}

/// Mounted sliver FAB
///
/// Owns the scroll position for as long as it lives. Dropping the guard (or
/// calling [`MountedSliverFab::unmount`]) removes the refresh listener.
pub struct MountedSliverFab<'a> {
    fab: &'a SliverFab,
    subscription: Subscription,
    dirty: DirtyFlag,
    tree: LayoutTree,
    nodes: LayoutNodes,
    last_frame: Option<FrameInputs>,
    renders: u64,
    threshold_warned: bool,
}

impl<'a> MountedSliverFab<'a> {
    pub fn config(&self) -> &'a LayoutConfig {
        &self.fab.config
    }

    /// Position for the host scroller to write offsets into
    pub fn scroll_position(&self) -> &SharedScrollPosition {
        &self.subscription.position
    }

    pub fn offset(&self) -> f32 {
        ScrollPosition::read(&self.subscription.position)
    }

    /// True when the offset changed since the last render
    pub fn needs_render(&self) -> bool {
        self.dirty.is_set()
    }

    /// Number of completed renders
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn input(&self, env: &dyn HostEnvironment) -> ScrollInput {
        ScrollInput::new(self.offset(), env.inset_top())
            .with_collapsed_header_height(env.collapsed_header_height())
    }

    /// Visual state at the current offset
    pub fn derive(&self, env: &dyn HostEnvironment) -> DerivedVisualState {
        self.config().derive(self.input(env))
    }

    /// Compose the layer tree for the current offset
    ///
    /// Layers are ordered back to front: scroll content, edge overlay (only
    /// with a positive corner radius), floating control.
    pub fn render(&mut self, env: &dyn HostEnvironment) -> Layer {
        self.dirty.take();

        let config = self.config();
        let input = self.input(env);
        let state = config.derive(input);
        let viewport = env.viewport();

        self.note_frame_inputs(FrameInputs {
            inset_top: input.inset_top,
            viewport,
        });
        self.warn_if_degenerate(input);

        self.tree
            .set_style(self.nodes.root, LayoutStyle::stack_root(viewport.width, viewport.height));
        self.tree
            .set_style(self.nodes.fab, fab_style(config, state.fab_top));
        let edge_style = match state.edge {
            Some(edge) => LayoutStyle::anchored(edge.top, Some(0.0), Some(0.0), None, edge.height),
            None => hidden(),
        };
        self.tree.set_style(self.nodes.edge, edge_style);

        self.tree.compute_layout(
            self.nodes.root,
            crate::style::Size {
                width: AvailableSpace::Definite(viewport.width),
                height: AvailableSpace::Definite(viewport.height),
            },
        );

        let origin = (0.0, 0.0);
        let bounds_of = |id| {
            self.tree
                .get_bounds(id, origin)
                .map(|bounds| bounds.to_rect())
                .unwrap_or_default()
        };

        let mut layers = Vec::with_capacity(3);

        layers.push(Layer::Scroll {
            sections: config.sections().to_vec(),
            rect: bounds_of(self.nodes.content),
            position: self.subscription.position.clone(),
            props: LayerProperties::new().with_name(SliverFab::CONTENT_LAYER),
        });

        if let Some(edge) = state.edge {
            layers.push(Layer::Fill {
                rect: bounds_of(self.nodes.edge),
                corner_radius: CornerRadius::top(edge.corner_radius),
                brush: Brush::Solid(env.surface_color()),
                props: LayerProperties::new().with_name(SliverFab::EDGE_LAYER),
            });
        }

        let fab_rect = bounds_of(self.nodes.fab);
        let content = Layer::Content {
            node: config.floating_content().node,
            rect: fab_rect,
            props: LayerProperties::new(),
        };
        layers.push(
            content
                .with_transform_2d(Affine2D::scale_about(state.fab_scale, fab_rect.center()))
                .named(SliverFab::FAB_LAYER),
        );

        self.renders += 1;
        tracing::trace!(
            offset = input.offset,
            fab_top = state.fab_top,
            fab_scale = state.fab_scale,
            edge_height = state.edge.map(|edge| edge.height),
            "sliver fab rendered"
        );

        Layer::stack(layers).named(SliverFab::ROOT_LAYER)
    }

    fn note_frame_inputs(&mut self, frame: FrameInputs) {
        if let Some(previous) = self.last_frame {
            if previous.inset_top != frame.inset_top {
                tracing::trace!(
                    event = event_types::INSETS_CHANGED,
                    inset_top = frame.inset_top,
                    "sliver fab inset changed"
                );
            }
            if previous.viewport != frame.viewport {
                tracing::trace!(
                    event = event_types::RESIZE,
                    width = frame.viewport.width,
                    height = frame.viewport.height,
                    "sliver fab viewport changed"
                );
            }
        }
        self.last_frame = Some(frame);
    }

    fn warn_if_degenerate(&mut self, input: ScrollInput) {
        if self.threshold_warned {
            return;
        }
        let edges = mapper::thresholds(
            self.config().settings(),
            input.inset_top,
            input.collapsed_header_height,
        );
        if edges.is_degenerate() {
            self.threshold_warned = true;
            tracing::warn!(
                shrink_start = edges.shrink_start,
                vanish = edges.vanish,
                inset_top = input.inset_top,
                "sliver fab scale thresholds are inverted or empty; scale is not clamped"
            );
        }
    }

    /// Unmount explicitly
    ///
    /// Equivalent to dropping the guard: the scroll listener is removed and
    /// no later offset change reaches the redraw callback.
    pub fn unmount(self) {}
}

impl Drop for MountedSliverFab<'_> {
    fn drop(&mut self) {
        tracing::debug!(
            event = event_types::UNMOUNT,
            renders = self.renders,
            "sliver fab unmounted"
        );
    }
}

impl std::fmt::Debug for MountedSliverFab<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedSliverFab")
            .field("offset", &self.offset())
            .field("dirty", &self.dirty)
            .field("renders", &self.renders)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnvironment;
    use perch_core::{Color, Layer, UiNode};

    fn config(radius: f32) -> LayoutConfig {
        LayoutConfig::builder()
            .sections(vec![UiNode::new(1), UiNode::new(2)])
            .floating_content(FloatingContent::new(UiNode::new(9)))
            .top_corner_radius(radius)
            .has_pinned_header(true)
            .build()
            .unwrap()
    }

    fn env() -> StaticEnvironment {
        StaticEnvironment::new(Size::new(360.0, 640.0)).with_surface_color(Color::WHITE)
    }

    #[test]
    fn test_mount_subscribes_one_listener() {
        let fab = SliverFab::new(config(16.0));
        let mounted = fab.mount(None).unwrap();
        let position = mounted.scroll_position().clone();

        assert_eq!(position.lock().unwrap().listener_count(), 1);
        assert!(mounted.needs_render());

        mounted.unmount();
        assert_eq!(position.lock().unwrap().listener_count(), 0);
    }

    #[test]
    fn test_render_clears_dirty_flag() {
        let fab = SliverFab::new(config(16.0));
        let mut mounted = fab.mount(None).unwrap();

        mounted.render(&env());
        assert!(!mounted.needs_render());
        assert_eq!(mounted.render_count(), 1);

        ScrollPosition::set_offset(mounted.scroll_position(), 10.0);
        assert!(mounted.needs_render());
    }

    #[test]
    fn test_layer_order() {
        let fab = SliverFab::new(config(16.0));
        let mut mounted = fab.mount(None).unwrap();
        let layer = mounted.render(&env());

        let Layer::Stack { layers, .. } = &layer else {
            panic!("expected a stack, got {layer:?}");
        };
        let names: Vec<_> = layers.iter().map(|layer| layer.name()).collect();
        assert_eq!(
            names,
            vec![
                Some(SliverFab::CONTENT_LAYER),
                Some(SliverFab::EDGE_LAYER),
                Some(SliverFab::FAB_LAYER)
            ]
        );
    }

    #[test]
    fn test_fab_anchored_right() {
        let fab = SliverFab::new(config(0.0));
        let mut mounted = fab.mount(None).unwrap();
        let layer = mounted.render(&env());

        let Some(Layer::Transform2D { layer: inner, .. }) = layer.find_named(SliverFab::FAB_LAYER)
        else {
            panic!("missing fab layer");
        };
        let Layer::Content { rect, node, .. } = inner.as_ref() else {
            panic!("fab layer should wrap content");
        };
        assert_eq!(*node, UiNode::new(9));
        assert_eq!(rect.x(), 360.0 - 16.0 - 56.0);
        assert_eq!(rect.y(), 228.0);
        assert_eq!(rect.width(), 56.0);
    }
}

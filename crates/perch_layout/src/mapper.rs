//! Scroll offset to visual parameter mapping
//!
//! Pure functions turning the current scroll offset into the floating
//! control's top/scale and the edge overlay's top/height. Nothing here holds
//! state; identical inputs always produce bit-identical outputs.
//!
//! Offsets are clamped at zero when subtracted from a top position, while the
//! raw signed offset is used for threshold comparisons.

use crate::config::{LayoutConfig, SliverFabSettings, DEFAULT_FAB_SIZE};

/// Height of a collapsed (pinned) header on a standard toolbar
pub const COLLAPSED_HEADER_HEIGHT: f32 = 56.0;

/// Per-render inputs supplied by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollInput {
    /// Current scroll offset (may be negative during overscroll)
    pub offset: f32,
    /// Top safe-area inset
    pub inset_top: f32,
    pub collapsed_header_height: f32,
}

impl ScrollInput {
    pub fn new(offset: f32, inset_top: f32) -> Self {
        Self {
            offset,
            inset_top,
            collapsed_header_height: COLLAPSED_HEADER_HEIGHT,
        }
    }

    pub fn with_collapsed_header_height(mut self, height: f32) -> Self {
        self.collapsed_header_height = height;
        self
    }

    fn clamped_offset(&self) -> f32 {
        self.offset.max(0.0)
    }
}

/// Position and scale of the floating control
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabGeometry {
    pub top: f32,
    pub scale: f32,
}

/// Position and size of the edge overlay
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub top: f32,
    pub height: f32,
    /// Radius of the two top corners; constant while the height shrinks
    pub corner_radius: f32,
}

/// Everything a render needs, recomputed on every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedVisualState {
    pub fab_top: f32,
    pub fab_scale: f32,
    pub edge: Option<EdgeGeometry>,
}

/// Offsets at which the floating control starts shrinking and vanishes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleThresholds {
    /// Below this offset the scale is 1
    pub shrink_start: f32,
    /// Above this offset the scale is 0
    pub vanish: f32,
}

impl ScaleThresholds {
    /// True when the interpolation window is empty or reversed
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.is_nan() || span <= 0.0
    }

    /// Width of the interpolation window
    pub fn span(&self) -> f32 {
        self.vanish - self.shrink_start
    }
}

fn default_top_margin(settings: &SliverFabSettings, inset_top: f32) -> f32 {
    settings.expanded_height + inset_top + settings.floating_position.top_or_default()
        - DEFAULT_FAB_SIZE / 2.0
}

/// Shrink and vanish offsets for the given settings
pub fn thresholds(
    settings: &SliverFabSettings,
    inset_top: f32,
    collapsed_header_height: f32,
) -> ScaleThresholds {
    ScaleThresholds {
        shrink_start: default_top_margin(settings, inset_top) - settings.top_scaling_edge,
        vanish: settings.expanded_height - collapsed_header_height - settings.disappear_at,
    }
}

/// Floating control geometry
///
/// The interpolated scale is not clamped; an empty window yields NaN at the
/// exact threshold.
pub fn fab_geometry(settings: &SliverFabSettings, input: ScrollInput) -> FabGeometry {
    let edges = thresholds(settings, input.inset_top, input.collapsed_header_height);
    let top = default_top_margin(settings, input.inset_top) - input.clamped_offset();

    let offset = input.offset;
    let scale = if offset < edges.shrink_start {
        1.0
    } else if offset > edges.vanish {
        0.0
    } else {
        (edges.vanish - offset) / (edges.vanish - edges.shrink_start)
    };

    FabGeometry { top, scale }
}

/// Edge overlay geometry, `None` when the corner radius is not positive
pub fn edge_geometry(settings: &SliverFabSettings, input: ScrollInput) -> Option<EdgeGeometry> {
    let radius = settings.top_corner_radius;
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }

    let mut top = input.inset_top + settings.expanded_height - radius - input.clamped_offset();
    let mut height = radius;

    if settings.has_pinned_header {
        let breakpoint = settings.expanded_height - input.collapsed_header_height - radius;
        if input.offset >= breakpoint {
            height = (radius - (input.offset - breakpoint)).max(0.0);
            top += radius - height;
        }
    }

    Some(EdgeGeometry {
        top,
        height,
        corner_radius: radius,
    })
}

/// Both computations at once
pub fn derive(settings: &SliverFabSettings, input: ScrollInput) -> DerivedVisualState {
    let fab = fab_geometry(settings, input);
    DerivedVisualState {
        fab_top: fab.top,
        fab_scale: fab.scale,
        edge: edge_geometry(settings, input),
    }
}

impl LayoutConfig {
    /// Derive the visual state of this layout at `input`
    pub fn derive(&self, input: ScrollInput) -> DerivedVisualState {
        derive(self.settings(), input)
    }

    pub fn thresholds(&self, inset_top: f32, collapsed_header_height: f32) -> ScaleThresholds {
        thresholds(self.settings(), inset_top, collapsed_header_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Placement;

    fn pinned(radius: f32) -> SliverFabSettings {
        SliverFabSettings {
            top_corner_radius: radius,
            has_pinned_header: true,
            ..Default::default()
        }
    }

    fn at(offset: f32) -> ScrollInput {
        ScrollInput::new(offset, 0.0)
    }

    #[test]
    fn test_standard_thresholds() {
        let edges = thresholds(&pinned(16.0), 0.0, COLLAPSED_HEADER_HEIGHT);
        assert_eq!(edges.vanish, 200.0);
        assert_eq!(edges.shrink_start, 132.0);
        assert!(!edges.is_degenerate());
        assert_eq!(edges.span(), 68.0);
    }

    #[test]
    fn test_scale_at_rest_and_mid_scroll() {
        let settings = pinned(16.0);

        assert_eq!(fab_geometry(&settings, at(0.0)).scale, 1.0);
        assert_eq!(fab_geometry(&settings, at(150.0)).scale, 50.0 / 68.0);
        assert_eq!(fab_geometry(&settings, at(132.0)).scale, 1.0);
        assert_eq!(fab_geometry(&settings, at(200.0)).scale, 0.0);
        assert_eq!(fab_geometry(&settings, at(400.0)).scale, 0.0);
    }

    #[test]
    fn test_scale_is_one_below_shrink_start() {
        let settings = SliverFabSettings::default();
        for offset in [-80.0, -1.0, 0.0, 10.0, 64.0, 131.0, 132.0] {
            assert_eq!(fab_geometry(&settings, at(offset)).scale, 1.0, "offset {offset}");
        }
    }

    #[test]
    fn test_scale_is_zero_past_vanish() {
        let settings = SliverFabSettings {
            disappear_at: 12.0,
            ..Default::default()
        };
        for offset in [188.0, 189.0, 250.0, 10_000.0] {
            assert_eq!(fab_geometry(&settings, at(offset)).scale, 0.0, "offset {offset}");
        }
    }

    #[test]
    fn test_scale_decreases_between_thresholds() {
        let settings = SliverFabSettings::default();
        let mut previous = 1.0;
        let mut offset = 133.0;
        while offset < 200.0 {
            let scale = fab_geometry(&settings, at(offset)).scale;
            assert!(scale > 0.0 && scale < 1.0, "offset {offset} scale {scale}");
            assert!(scale <= previous);
            previous = scale;
            offset += 0.5;
        }
    }

    #[test]
    fn test_fab_top_tracks_clamped_offset() {
        let settings = SliverFabSettings::default();
        assert_eq!(fab_geometry(&settings, at(0.0)).top, 228.0);
        assert_eq!(fab_geometry(&settings, at(100.0)).top, 128.0);
        // overscroll does not push the control down
        assert_eq!(fab_geometry(&settings, at(-40.0)).top, 228.0);
    }

    #[test]
    fn test_fab_top_includes_inset_and_nudge() {
        let settings = SliverFabSettings {
            floating_position: Placement::right(16.0).with_top(-10.0),
            ..Default::default()
        };
        let fab = fab_geometry(&settings, ScrollInput::new(20.0, 24.0));
        assert_eq!(fab.top, 256.0 + 24.0 - 10.0 - 28.0 - 20.0);

        let edges = thresholds(&settings, 24.0, COLLAPSED_HEADER_HEIGHT);
        assert_eq!(edges.shrink_start, 256.0 + 24.0 - 10.0 - 28.0 - 96.0);
    }

    #[test]
    fn test_no_edge_without_radius() {
        let settings = pinned(0.0);
        for offset in [-10.0, 0.0, 150.0, 200.0, 900.0] {
            assert!(edge_geometry(&settings, at(offset)).is_none());
        }
    }

    #[test]
    fn test_edge_height_constant_without_pinned_header() {
        let settings = SliverFabSettings {
            top_corner_radius: 16.0,
            ..Default::default()
        };
        for offset in [0.0, 184.0, 200.0, 512.0] {
            let edge = edge_geometry(&settings, at(offset)).unwrap();
            assert_eq!(edge.height, 16.0);
            assert_eq!(edge.top, 240.0 - offset);
        }
    }

    #[test]
    fn test_pinned_edge_shrinks_to_zero_at_collapse() {
        let settings = pinned(16.0);

        let rest = edge_geometry(&settings, at(0.0)).unwrap();
        assert_eq!(rest.height, 16.0);
        assert_eq!(rest.top, 240.0);
        assert_eq!(rest.corner_radius, 16.0);

        let breakpoint = edge_geometry(&settings, at(184.0)).unwrap();
        assert_eq!(breakpoint.height, 16.0);

        let halfway = edge_geometry(&settings, at(192.0)).unwrap();
        assert_eq!(halfway.height, 8.0);
        assert_eq!(halfway.top, 240.0 - 192.0 + 8.0);
        assert_eq!(halfway.corner_radius, 16.0);

        let collapsed = edge_geometry(&settings, at(200.0)).unwrap();
        assert_eq!(collapsed.height, 0.0);
        // bottom of the edge stays glued to the collapsed header
        assert_eq!(collapsed.top + collapsed.height, 56.0);

        let past = edge_geometry(&settings, at(260.0)).unwrap();
        assert_eq!(past.height, 0.0);
    }

    #[test]
    fn test_pinned_edge_height_strictly_decreasing() {
        let settings = pinned(16.0);
        let mut previous = f32::INFINITY;
        for step in 0..=16 {
            let offset = 184.0 + step as f32;
            let height = edge_geometry(&settings, at(offset)).unwrap().height;
            if step > 0 {
                assert!(height < previous, "offset {offset}");
            }
            previous = height;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_inverted_thresholds_are_not_clamped() {
        // vanish (256 - 56 - 150 = 50) lies before shrink start (132)
        let settings = SliverFabSettings {
            disappear_at: 150.0,
            ..Default::default()
        };
        let edges = thresholds(&settings, 0.0, COLLAPSED_HEADER_HEIGHT);
        assert!(edges.is_degenerate());

        assert_eq!(fab_geometry(&settings, at(10.0)).scale, 1.0);
        assert_eq!(fab_geometry(&settings, at(140.0)).scale, 0.0);
    }

    #[test]
    fn test_empty_window_yields_nan_at_threshold() {
        let settings = SliverFabSettings {
            top_scaling_edge: 28.0,
            disappear_at: 0.0,
            expanded_height: 256.0,
            ..Default::default()
        };
        // shrink start 256 - 28 - 28 = 200 == vanish
        let edges = thresholds(&settings, 0.0, COLLAPSED_HEADER_HEIGHT);
        assert_eq!(edges.shrink_start, edges.vanish);
        assert!(fab_geometry(&settings, at(200.0)).scale.is_nan());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let settings = pinned(24.0);
        let input = ScrollInput::new(163.25, 31.5).with_collapsed_header_height(64.0);

        let first = derive(&settings, input);
        let second = derive(&settings, input);
        assert_eq!(first.fab_top.to_bits(), second.fab_top.to_bits());
        assert_eq!(first.fab_scale.to_bits(), second.fab_scale.to_bits());
        assert_eq!(first.edge, second.edge);
    }
}

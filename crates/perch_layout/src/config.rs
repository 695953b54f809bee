//! Configuration values for the sliver FAB layout
//!
//! ```rust
//! use perch_core::UiNode;
//! use perch_layout::config::{FloatingContent, LayoutConfig, Placement};
//!
//! let config = LayoutConfig::builder()
//!     .sections(vec![UiNode::new(1), UiNode::new(2)])
//!     .floating_content(FloatingContent::new(UiNode::new(3)))
//!     .floating_position(Placement::left(24.0).with_top(-8.0))
//!     .top_corner_radius(16.0)
//!     .has_pinned_header(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.expanded_height(), 256.0);
//! ```

use perch_core::{Size, UiNode};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Expanded header height used when none is configured
pub const DEFAULT_EXPANDED_HEIGHT: f32 = 256.0;

/// Distance before the vertical centre line at which shrinking starts
pub const DEFAULT_TOP_SCALING_EDGE: f32 = 96.0;

/// Right margin of the default placement
pub const DEFAULT_FLOATING_MARGIN: f32 = 16.0;

/// Size of a standard floating action control
pub const DEFAULT_FAB_SIZE: f32 = 56.0;

// =========================================================================
// Placement
// =========================================================================

/// Horizontal anchoring and vertical nudge of the floating control
///
/// At least one of `left`/`right` is always set. With both set the control
/// stretches between the two margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement")]
pub struct Placement {
    top: Option<f32>,
    right: Option<f32>,
    left: Option<f32>,
}

#[derive(Deserialize)]
struct RawPlacement {
    #[serde(default)]
    top: Option<f32>,
    #[serde(default)]
    right: Option<f32>,
    #[serde(default)]
    left: Option<f32>,
}

impl TryFrom<RawPlacement> for Placement {
    type Error = ConfigError;

    fn try_from(raw: RawPlacement) -> Result<Self, Self::Error> {
        Placement::new(raw.top, raw.right, raw.left)
    }
}

impl Placement {
    /// Validate a placement; fails when neither horizontal margin is set
    pub fn new(top: Option<f32>, right: Option<f32>, left: Option<f32>) -> Result<Self, ConfigError> {
        if right.is_none() && left.is_none() {
            return Err(ConfigError::MissingHorizontalAnchor);
        }
        Ok(Self { top, right, left })
    }

    /// Anchor to the right edge
    pub const fn right(margin: f32) -> Self {
        Self {
            top: None,
            right: Some(margin),
            left: None,
        }
    }

    /// Anchor to the left edge
    pub const fn left(margin: f32) -> Self {
        Self {
            top: None,
            right: None,
            left: Some(margin),
        }
    }

    /// Stretch between both edges
    pub const fn stretch(left: f32, right: f32) -> Self {
        Self {
            top: None,
            right: Some(right),
            left: Some(left),
        }
    }

    /// Set the vertical nudge (may be negative)
    pub const fn with_top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn top(&self) -> Option<f32> {
        self.top
    }

    /// Vertical nudge used by position math (0 when unset)
    pub fn top_or_default(&self) -> f32 {
        self.top.unwrap_or(0.0)
    }

    pub fn right_margin(&self) -> Option<f32> {
        self.right
    }

    pub fn left_margin(&self) -> Option<f32> {
        self.left
    }

    /// True when both margins are set
    pub fn is_stretched(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::right(DEFAULT_FLOATING_MARGIN)
    }
}

// =========================================================================
// Floating content
// =========================================================================

/// Opaque floating control plus the intrinsic size it is laid out with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingContent {
    pub node: UiNode,
    pub size: Size,
}

impl FloatingContent {
    /// Standard 56x56 control
    pub fn new(node: UiNode) -> Self {
        Self {
            node,
            size: Size::square(DEFAULT_FAB_SIZE),
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

// =========================================================================
// Settings
// =========================================================================

/// Numeric configuration that can be loaded from TOML or JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliverFabSettings {
    pub expanded_height: f32,
    pub top_corner_radius: f32,
    pub top_scaling_edge: f32,
    pub disappear_at: f32,
    pub has_pinned_header: bool,
    pub floating_position: Placement,
}

impl Default for SliverFabSettings {
    fn default() -> Self {
        Self {
            expanded_height: DEFAULT_EXPANDED_HEIGHT,
            top_corner_radius: 0.0,
            top_scaling_edge: DEFAULT_TOP_SCALING_EDGE,
            disappear_at: 0.0,
            has_pinned_header: false,
            floating_position: Placement::default(),
        }
    }
}

// =========================================================================
// Layout config
// =========================================================================

/// Immutable description of a sliver FAB layout
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    sections: Vec<UiNode>,
    floating_content: FloatingContent,
    settings: SliverFabSettings,
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }

    /// Scrollable sections, in order
    pub fn sections(&self) -> &[UiNode] {
        &self.sections
    }

    pub fn floating_content(&self) -> &FloatingContent {
        &self.floating_content
    }

    pub fn settings(&self) -> &SliverFabSettings {
        &self.settings
    }

    pub fn expanded_height(&self) -> f32 {
        self.settings.expanded_height
    }

    /// Radius of the edge overlay; 0 disables the overlay
    pub fn top_corner_radius(&self) -> f32 {
        self.settings.top_corner_radius
    }

    pub fn top_scaling_edge(&self) -> f32 {
        self.settings.top_scaling_edge
    }

    pub fn disappear_at(&self) -> f32 {
        self.settings.disappear_at
    }

    pub fn floating_position(&self) -> &Placement {
        &self.settings.floating_position
    }

    pub fn has_pinned_header(&self) -> bool {
        self.settings.has_pinned_header
    }

    pub fn has_edge(&self) -> bool {
        self.settings.top_corner_radius > 0.0
    }
}

/// Builder for [`LayoutConfig`]
#[derive(Clone, Debug, Default)]
pub struct LayoutConfigBuilder {
    sections: Option<Vec<UiNode>>,
    floating_content: Option<FloatingContent>,
    settings: SliverFabSettings,
}

impl LayoutConfigBuilder {
    pub fn sections(mut self, sections: Vec<UiNode>) -> Self {
        self.sections = Some(sections);
        self
    }

    pub fn floating_content(mut self, content: FloatingContent) -> Self {
        self.floating_content = Some(content);
        self
    }

    /// Replace every numeric setting at once
    pub fn settings(mut self, settings: SliverFabSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn expanded_height(mut self, height: f32) -> Self {
        self.settings.expanded_height = height;
        self
    }

    pub fn top_corner_radius(mut self, radius: f32) -> Self {
        self.settings.top_corner_radius = radius;
        self
    }

    pub fn top_scaling_edge(mut self, edge: f32) -> Self {
        self.settings.top_scaling_edge = edge;
        self
    }

    pub fn disappear_at(mut self, offset: f32) -> Self {
        self.settings.disappear_at = offset;
        self
    }

    pub fn floating_position(mut self, placement: Placement) -> Self {
        self.settings.floating_position = placement;
        self
    }

    pub fn has_pinned_header(mut self, pinned: bool) -> Self {
        self.settings.has_pinned_header = pinned;
        self
    }

    pub fn build(self) -> Result<LayoutConfig, ConfigError> {
        let sections = self.sections.ok_or(ConfigError::MissingSections)?;
        let floating_content = self
            .floating_content
            .ok_or(ConfigError::MissingFloatingContent)?;

        Ok(LayoutConfig {
            sections,
            floating_content,
            settings: self.settings,
        })
    }
}

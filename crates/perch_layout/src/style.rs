//! Layout style helpers

pub use taffy::prelude::*;

/// Helper to create the styles used by overlay compositions
pub struct LayoutStyle;

impl LayoutStyle {
    /// Fixed-size positioning root that absolute children resolve against
    pub fn stack_root(width: f32, height: f32) -> Style {
        Style {
            position: Position::Relative,
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Default::default()
        }
    }

    /// Absolute child covering its whole parent
    pub fn fill() -> Style {
        Style {
            position: Position::Absolute,
            inset: Rect {
                left: LengthPercentageAuto::Length(0.0),
                right: LengthPercentageAuto::Length(0.0),
                top: LengthPercentageAuto::Length(0.0),
                bottom: LengthPercentageAuto::Length(0.0),
            },
            ..Default::default()
        }
    }

    /// Absolute child at `top`, anchored by whichever horizontal margins are set
    ///
    /// With both margins set and `width` of `None` the child stretches between
    /// them.
    pub fn anchored(
        top: f32,
        left: Option<f32>,
        right: Option<f32>,
        width: Option<f32>,
        height: f32,
    ) -> Style {
        let inset_of = |margin: Option<f32>| match margin {
            Some(value) => LengthPercentageAuto::Length(value),
            None => LengthPercentageAuto::Auto,
        };

        Style {
            position: Position::Absolute,
            inset: Rect {
                left: inset_of(left),
                right: inset_of(right),
                top: LengthPercentageAuto::Length(top),
                bottom: LengthPercentageAuto::Auto,
            },
            size: Size {
                width: width.map_or(Dimension::Auto, Dimension::Length),
                height: Dimension::Length(height),
            },
            ..Default::default()
        }
    }
}

//! Host environment seam
//!
//! The values a render reads from the surrounding framework on every frame.

use perch_core::{Color, Size};
use perch_theme::{ColorToken, ThemeState};

use crate::mapper::COLLAPSED_HEADER_HEIGHT;

/// Capabilities the host framework supplies to a render
pub trait HostEnvironment {
    /// Top safe-area inset (status bar and similar)
    fn inset_top(&self) -> f32;

    /// Size of the area the layout occupies
    fn viewport(&self) -> Size;

    /// Fill color of the edge overlay
    fn surface_color(&self) -> Color {
        ThemeState::try_get()
            .map(|theme| theme.color(ColorToken::Surface))
            .unwrap_or(Color::WHITE)
    }

    fn collapsed_header_height(&self) -> f32 {
        COLLAPSED_HEADER_HEIGHT
    }
}

/// Fixed environment values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticEnvironment {
    pub inset_top: f32,
    pub viewport: Size,
    /// Overrides the theme surface color when set
    pub surface_color: Option<Color>,
    pub collapsed_header_height: f32,
}

impl StaticEnvironment {
    pub fn new(viewport: Size) -> Self {
        Self {
            inset_top: 0.0,
            viewport,
            surface_color: None,
            collapsed_header_height: COLLAPSED_HEADER_HEIGHT,
        }
    }

    pub fn with_inset_top(mut self, inset_top: f32) -> Self {
        self.inset_top = inset_top;
        self
    }

    pub fn with_surface_color(mut self, color: Color) -> Self {
        self.surface_color = Some(color);
        self
    }

    pub fn with_collapsed_header_height(mut self, height: f32) -> Self {
        self.collapsed_header_height = height;
        self
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(Size::new(360.0, 640.0))
    }
}

impl HostEnvironment for StaticEnvironment {
    fn inset_top(&self) -> f32 {
        self.inset_top
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn surface_color(&self) -> Color {
        match self.surface_color {
            Some(color) => color,
            None => ThemeState::try_get()
                .map(|theme| theme.color(ColorToken::Surface))
                .unwrap_or(Color::WHITE),
        }
    }

    fn collapsed_header_height(&self) -> f32 {
        self.collapsed_header_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl HostEnvironment for Bare {
        fn inset_top(&self) -> f32 {
            12.0
        }

        fn viewport(&self) -> Size {
            Size::new(100.0, 200.0)
        }
    }

    #[test]
    fn test_trait_defaults() {
        let env = Bare;
        assert_eq!(env.collapsed_header_height(), 56.0);
        assert_eq!(env.inset_top(), 12.0);
    }

    #[test]
    fn test_static_environment_override() {
        let env = StaticEnvironment::default()
            .with_inset_top(24.0)
            .with_surface_color(Color::BLACK)
            .with_collapsed_header_height(64.0);

        assert_eq!(env.inset_top(), 24.0);
        assert_eq!(env.surface_color(), Color::BLACK);
        assert_eq!(env.collapsed_header_height(), 64.0);
        assert_eq!(env.viewport(), Size::new(360.0, 640.0));
    }
}

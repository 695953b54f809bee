//! Global theme state singleton
//!
//! Widgets read colors from `ThemeState` during render. Theme changes only
//! flag a repaint; they never invalidate layout.

use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::*;
use perch_core::Color;
use rustc_hash::FxHashMap;
use std::sync::{atomic::AtomicBool, atomic::Ordering, OnceLock, PoisonError, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Theme state - accessed by widgets during render
pub struct ThemeState {
    /// The current theme bundle (light/dark pair)
    bundle: ThemeBundle,

    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Current color tokens
    colors: RwLock<ColorTokens>,

    /// Dynamic color overrides
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,

    /// Flag indicating theme needs repaint (colors changed)
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Create a standalone theme state (not installed globally)
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        let colors = bundle.for_scheme(scheme).clone();
        Self {
            bundle,
            scheme: RwLock::new(scheme),
            colors: RwLock::new(colors),
            color_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Later calls are ignored; the first installed theme wins.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        if THEME_STATE.set(Self::new(bundle, scheme)).is_err() {
            tracing::debug!("ThemeState::init called more than once, keeping existing theme");
        }
    }

    /// Initialize with the built-in bundle in light mode
    pub fn init_default() {
        Self::init(ThemeBundle::default(), ColorScheme::Light);
    }

    /// Get the global theme state instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch color scheme; overrides survive the switch
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
        if *current == scheme {
            return;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            *current,
            scheme
        );
        *current = scheme;
        drop(current);

        *self.colors.write().unwrap_or_else(PoisonError::into_inner) =
            self.bundle.for_scheme(scheme).clone();
        self.mark_repaint();
    }

    /// Flip between light and dark
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    // ========== Colors ==========

    /// Resolve a color token, honoring overrides
    pub fn color(&self, token: ColorToken) -> Color {
        let overrides = self
            .color_overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(&color) = overrides.get(&token) {
            return color;
        }
        drop(overrides);
        self.colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
    }

    /// Override a color token at runtime (repaint only)
    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, color);
        self.mark_repaint();
    }

    /// Remove a single color override
    pub fn remove_color_override(&self, token: ColorToken) {
        let removed = self
            .color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token);
        if removed.is_some() {
            self.mark_repaint();
        }
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        let mut overrides = self
            .color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if overrides.is_empty() {
            return;
        }
        overrides.clear();
        drop(overrides);
        self.mark_repaint();
    }

    // ========== Repaint Tracking ==========

    /// Check and clear the repaint flag
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.swap(false, Ordering::AcqRel)
    }

    fn mark_repaint(&self) {
        self.needs_repaint.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_switch_swaps_palette() {
        let theme = ThemeState::new(ThemeBundle::default(), ColorScheme::Light);
        assert_eq!(theme.color(ColorToken::Surface), ColorTokens::light().surface);

        theme.set_scheme(ColorScheme::Dark);
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        assert_eq!(theme.color(ColorToken::Surface), ColorTokens::dark().surface);
        assert!(theme.take_needs_repaint());
        assert!(!theme.take_needs_repaint());
    }

    #[test]
    fn test_same_scheme_is_noop() {
        let theme = ThemeState::new(ThemeBundle::default(), ColorScheme::Dark);
        theme.set_scheme(ColorScheme::Dark);
        assert!(!theme.take_needs_repaint());
    }

    #[test]
    fn test_overrides_win_and_survive_scheme_switch() {
        let theme = ThemeState::new(ThemeBundle::default(), ColorScheme::Light);
        let custom = Color::from_hex(0xFAFAFA);

        theme.set_color_override(ColorToken::Surface, custom);
        assert_eq!(theme.color(ColorToken::Surface), custom);

        theme.toggle_scheme();
        assert_eq!(theme.color(ColorToken::Surface), custom);

        theme.remove_color_override(ColorToken::Surface);
        assert_eq!(theme.color(ColorToken::Surface), ColorTokens::dark().surface);
    }

    #[test]
    fn test_clear_overrides() {
        let theme = ThemeState::new(ThemeBundle::default(), ColorScheme::Light);
        theme.clear_overrides();
        assert!(!theme.take_needs_repaint());

        theme.set_color_override(ColorToken::Primary, Color::BLACK);
        theme.take_needs_repaint();
        theme.clear_overrides();
        assert!(theme.take_needs_repaint());
        assert_eq!(theme.color(ColorToken::Primary), ColorTokens::light().primary);
    }
}

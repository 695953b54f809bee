//! Edge color resolution through the global theme.
//!
//! Kept in its own test binary: the global `ThemeState` is installed once per
//! process.

use perch_core::{Brush, Color, Layer, ScrollPosition, Size, UiNode};
use perch_layout::prelude::*;
use perch_theme::{ColorScheme, ColorToken, ThemeBundle, ThemeFile, ThemeState};

struct HostOnly;

impl HostEnvironment for HostOnly {
    fn inset_top(&self) -> f32 {
        0.0
    }

    fn viewport(&self) -> Size {
        Size::new(360.0, 640.0)
    }
}

#[test]
fn unset_surface_color_resolves_global_theme() {
    let file = ThemeFile::from_toml("scheme = \"dark\"\n\n[colors]\nsurface = \"#123456\"\n").unwrap();
    ThemeState::init(ThemeBundle::default(), file.scheme);
    file.apply(ThemeState::get());

    let surface = Color::from_hex(0x123456);
    assert_eq!(ThemeState::get().scheme(), ColorScheme::Dark);
    assert_eq!(StaticEnvironment::default().surface_color(), surface);
    assert_eq!(HostOnly.surface_color(), surface);

    // an explicit color still wins over the theme
    let pinned = StaticEnvironment::default().with_surface_color(Color::BLACK);
    assert_eq!(pinned.surface_color(), Color::BLACK);

    let config = LayoutConfig::builder()
        .sections(vec![UiNode::new(1), UiNode::new(2)])
        .floating_content(FloatingContent::new(UiNode::new(0)))
        .settings(SliverFabSettings {
            top_corner_radius: 16.0,
            has_pinned_header: true,
            ..Default::default()
        })
        .build()
        .unwrap();
    let fab = SliverFab::new(config);
    let mut mounted = fab.mount(None).unwrap();
    ScrollPosition::set_offset(mounted.scroll_position(), 192.0);

    let layer = mounted.render(&StaticEnvironment::default());
    match layer.find_named(SliverFab::EDGE_LAYER) {
        Some(Layer::Fill { brush, .. }) => assert_eq!(*brush, Brush::Solid(surface)),
        other => panic!("unexpected edge layer {other:?}"),
    }

    // runtime overrides reach the next render
    ThemeState::get().set_color_override(ColorToken::Surface, Color::WHITE);
    ScrollPosition::set_offset(mounted.scroll_position(), 190.0);
    let layer = mounted.render(&StaticEnvironment::default());
    match layer.find_named(SliverFab::EDGE_LAYER) {
        Some(Layer::Fill { brush, .. }) => assert_eq!(*brush, Brush::Solid(Color::WHITE)),
        other => panic!("unexpected edge layer {other:?}"),
    }
}

//! Layer Model for Perch Composition
//!
//! Every frame a widget produces is a tree of composable layers handed back to
//! the host renderer. This module provides the geometry types the layers are
//! described in and the `Layer` enum itself.
//!
//! # Layer Types
//!
//! - **Content**: an opaque caller-supplied node placed in a rectangle
//! - **Scroll**: ordered sections rendered by the host scroller, bound to a
//!   shared scroll position
//! - **Fill**: a rounded rectangle filled with a brush
//! - **Composition**: Stack and Transform2D layers

use crate::scroll::SharedScrollPosition;

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Uniform scale that keeps `center` fixed
    pub fn scale_about(factor: f32, center: Point) -> Self {
        Self::translation(center.x, center.y)
            .then(&Self::scale(factor, factor))
            .then(&Self::translation(-center.x, -center.y))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(a * point.x + c * point.y + tx, b * point.x + d * point.y + ty)
    }

    /// Map a rect through the transform (axis-aligned transforms only)
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        let min = self.transform_point(rect.origin);
        let max = self.transform_point(Point::new(rect.right(), rect.bottom()));
        Rect::new(
            min.x.min(max.x),
            min.y.min(max.y),
            (max.x - min.x).abs(),
            (max.y - min.y).abs(),
        )
    }

    /// Scale factors along the x and y axes
    pub fn scale_factors(&self) -> (f32, f32) {
        let [a, b, c, d, _, _] = self.elements;
        ((a * a + b * b).sqrt(), (c * c + d * d).sqrt())
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine2D) -> Affine2D {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        Affine2D {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color and Visual Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Round only the two top corners
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::ZERO
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layer Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Reference to a node owned by the host (content the widget does not inspect)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UiNode {
    pub id: u64,
}

impl UiNode {
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Properties common to all layers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerProperties {
    /// Optional name for debugging and lookup
    pub name: Option<String>,
}

impl LayerProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layer Enum
// ─────────────────────────────────────────────────────────────────────────────

/// All visual content a widget hands back to the host is a `Layer`.
#[derive(Clone, Debug)]
pub enum Layer {
    /// Opaque content placed in `rect`
    Content {
        node: UiNode,
        rect: Rect,
        props: LayerProperties,
    },

    /// Ordered sections rendered by the host scroller
    ///
    /// The host writes scroll offsets into `position`; the owner of the
    /// position is notified and recomposes.
    Scroll {
        sections: Vec<UiNode>,
        rect: Rect,
        position: SharedScrollPosition,
        props: LayerProperties,
    },

    /// Rounded rectangle filled with a brush
    Fill {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
        props: LayerProperties,
    },

    /// Layers composited back to front
    Stack {
        layers: Vec<Layer>,
        props: LayerProperties,
    },

    /// 2D transform applied to a layer
    Transform2D {
        transform: Affine2D,
        layer: Box<Layer>,
        props: LayerProperties,
    },
}

impl Layer {
    /// Get the layer properties
    pub fn props(&self) -> &LayerProperties {
        match self {
            Layer::Content { props, .. } => props,
            Layer::Scroll { props, .. } => props,
            Layer::Fill { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform2D { props, .. } => props,
        }
    }

    /// Get mutable layer properties
    pub fn props_mut(&mut self) -> &mut LayerProperties {
        match self {
            Layer::Content { props, .. } => props,
            Layer::Scroll { props, .. } => props,
            Layer::Fill { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform2D { props, .. } => props,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.props().name.as_deref()
    }

    /// Create a stack of layers
    pub fn stack(layers: Vec<Layer>) -> Self {
        Layer::Stack {
            layers,
            props: LayerProperties::new(),
        }
    }

    /// Wrap this layer with a 2D transform
    pub fn with_transform_2d(self, transform: Affine2D) -> Self {
        Layer::Transform2D {
            transform,
            layer: Box::new(self),
            props: LayerProperties::new(),
        }
    }

    /// Replace the layer name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.props_mut().name = Some(name.into());
        self
    }

    /// Visit direct children
    pub fn visit_children<'a, F: FnMut(&'a Layer)>(&'a self, mut f: F) {
        match self {
            Layer::Stack { layers, .. } => {
                for layer in layers {
                    f(layer);
                }
            }
            Layer::Transform2D { layer, .. } => f(layer),
            Layer::Content { .. } | Layer::Scroll { .. } | Layer::Fill { .. } => {}
        }
    }

    /// Depth-first search for a layer by name (self included)
    pub fn find_named(&self, name: &str) -> Option<&Layer> {
        if self.name() == Some(name) {
            return Some(self);
        }
        let mut found = None;
        self.visit_children(|child| {
            if found.is_none() {
                found = child.find_named(name);
            }
        });
        found
    }

    /// Total number of layers in this subtree (self included)
    pub fn layer_count(&self) -> usize {
        let mut count = 1;
        self.visit_children(|child| count += child.layer_count());
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollPosition;

    #[test]
    fn test_geometry_types() {
        let r = Rect::new(1.0, 2.0, 100.0, 50.0);

        assert_eq!(r.center(), Point::new(51.0, 27.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
        assert_eq!(r.bottom(), 52.0);
        assert_eq!(r.right(), 101.0);

        let rect: Rect = Size::new(200.0, 100.0).into();
        assert_eq!(rect.x(), 0.0);
        assert_eq!(rect.height(), 100.0);
        assert_eq!(Size::square(56.0).to_rect(), Rect::new(0.0, 0.0, 56.0, 56.0));
    }

    #[test]
    fn test_scale_about_keeps_center_fixed() {
        let rect = Rect::new(100.0, 200.0, 56.0, 56.0);
        let transform = Affine2D::scale_about(0.5, rect.center());

        assert_eq!(transform.transform_point(rect.center()), rect.center());

        let scaled = transform.transform_rect(rect);
        assert_eq!(scaled, Rect::new(114.0, 214.0, 28.0, 28.0));
        assert_eq!(transform.scale_factors(), (0.5, 0.5));
    }

    #[test]
    fn test_scale_about_zero_collapses_to_center() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        let transform = Affine2D::scale_about(0.0, rect.center());
        let scaled = transform.transform_rect(rect);

        assert_eq!(scaled.size(), Size::ZERO);
        assert_eq!(scaled.origin, Point::new(20.0, 10.0));
    }

    #[test]
    fn test_then_applies_right_operand_first() {
        let t = Affine2D::translation(10.0, 0.0);
        let s = Affine2D::scale(2.0, 2.0);

        // scale first, then translate
        assert_eq!(t.then(&s).transform_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
        // translate first, then scale
        assert_eq!(s.then(&t).transform_point(Point::new(1.0, 1.0)), Point::new(22.0, 2.0));
    }

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
    }

    #[test]
    fn test_top_corner_radius() {
        let radius = CornerRadius::top(12.0);
        assert_eq!(radius.top_left, 12.0);
        assert_eq!(radius.top_right, 12.0);
        assert_eq!(radius.bottom_right, 0.0);
        assert_eq!(radius.bottom_left, 0.0);
    }

    #[test]
    fn test_find_named_and_count() {
        let tree = Layer::stack(vec![
            Layer::Scroll {
                sections: vec![UiNode::new(1), UiNode::new(2)],
                rect: Rect::new(0.0, 0.0, 100.0, 100.0),
                position: ScrollPosition::shared(),
                props: LayerProperties::new().with_name("content"),
            },
            Layer::Content {
                node: UiNode::new(3),
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                props: LayerProperties::new(),
            }
            .with_transform_2d(Affine2D::IDENTITY)
            .named("fab"),
        ]);

        assert_eq!(tree.layer_count(), 4);
        assert!(tree.find_named("content").is_some());
        assert!(matches!(
            tree.find_named("fab"),
            Some(Layer::Transform2D { .. })
        ));
        assert!(tree.find_named("edge").is_none());
    }

    #[test]
    fn test_find_named_reaches_through_transform() {
        let tree = Layer::stack(vec![Layer::Content {
            node: UiNode::new(7),
            rect: Rect::new(4.0, 8.0, 16.0, 16.0),
            props: LayerProperties::new().with_name("inner"),
        }
        .with_transform_2d(Affine2D::scale(2.0, 2.0))]);

        let found = tree.find_named("inner");
        match found {
            Some(Layer::Content { node, rect, .. }) => {
                assert_eq!(*node, UiNode::new(7));
                assert_eq!(*rect, Rect::new(4.0, 8.0, 16.0, 16.0));
            }
            other => panic!("expected content layer, got {other:?}"),
        }
        assert_eq!(tree.layer_count(), 3);
    }
}

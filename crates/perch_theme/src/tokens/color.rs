//! Color tokens for theming

use perch_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    // Brand colors
    Primary,
    OnPrimary,
    Accent,

    // Surface colors
    Background,
    Surface,
    SurfaceElevated,

    // Text colors
    TextPrimary,

    // Border colors
    Border,
}

impl ColorToken {
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 8] = [
            ColorToken::Primary,
            ColorToken::OnPrimary,
            ColorToken::Accent,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::SurfaceElevated,
            ColorToken::TextPrimary,
            ColorToken::Border,
        ];
        &TOKENS
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub on_primary: Color,
    pub accent: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    pub text_primary: Color,

    pub border: Color,
}

impl ColorTokens {
    /// Default light palette
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x1E66F5),
            on_primary: Color::WHITE,
            accent: Color::from_hex(0x8839EF),
            background: Color::from_hex(0xEFF1F5),
            surface: Color::WHITE,
            surface_elevated: Color::from_hex(0xF7F8FA),
            text_primary: Color::from_hex(0x4C4F69),
            border: Color::from_hex(0xCCD0DA),
        }
    }

    /// Default dark palette
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0x89B4FA),
            on_primary: Color::from_hex(0x11111B),
            accent: Color::from_hex(0xCBA6F7),
            background: Color::from_hex(0x11111B),
            surface: Color::from_hex(0x1E1E2E),
            surface_elevated: Color::from_hex(0x313244),
            text_primary: Color::from_hex(0xCDD6F4),
            border: Color::from_hex(0x45475A),
        }
    }

    /// Get a color by token
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::OnPrimary => self.on_primary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::Border => self.border,
        }
    }

    /// Replace a color by token
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::Accent => &mut self.accent,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceElevated => &mut self.surface_elevated,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::Border => &mut self.border,
        };
        *slot = color;
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// Parse `#RRGGBB`, `RRGGBB`, `0xRRGGBB` or the same with a trailing alpha byte
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let digits = input
        .trim()
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(Color::from_hex),
        8 => {
            let value = u32::from_str_radix(digits, 16).ok()?;
            let alpha = (value & 0xFF) as f32 / 255.0;
            Some(Color::from_hex(value >> 8).with_alpha(alpha))
        }
        _ => None,
    }
}

//! Color schemes and light/dark theme bundles

use serde::{Deserialize, Serialize};

use crate::tokens::ColorTokens;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// A light/dark pair of color token sets
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub name: String,
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: ColorTokens, dark: ColorTokens) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// Tokens for the given scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::new("Perch", ColorTokens::light(), ColorTokens::dark())
    }
}

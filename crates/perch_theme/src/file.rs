//! TOML theme files
//!
//! ```toml
//! scheme = "dark"
//!
//! [colors]
//! surface = "#1E1E2E"
//! primary = "#89B4FA"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::state::ThemeState;
use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{parse_hex_color, ColorToken};

/// On-disk theme description: a scheme plus optional color overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub scheme: ColorScheme,
    /// Hex color overrides keyed by token name
    #[serde(default)]
    pub colors: BTreeMap<ColorToken, String>,
}

impl ThemeFile {
    pub fn from_toml(input: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(input)?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    fn validate(&self) -> Result<()> {
        for (&token, value) in &self.colors {
            if parse_hex_color(value).is_none() {
                return Err(ThemeError::InvalidColor {
                    token,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a standalone theme state with the overrides applied
    pub fn to_state(&self, bundle: ThemeBundle) -> ThemeState {
        let state = ThemeState::new(bundle, self.scheme);
        self.apply(&state);
        state.take_needs_repaint();
        state
    }

    /// Apply scheme and overrides to an existing theme state
    pub fn apply(&self, state: &ThemeState) {
        state.set_scheme(self.scheme);
        for (&token, value) in &self.colors {
            if let Some(color) = parse_hex_color(value) {
                state.set_color_override(token, color);
            }
        }
        tracing::debug!(
            scheme = ?self.scheme,
            overrides = self.colors.len(),
            "applied theme file"
        );
    }
}

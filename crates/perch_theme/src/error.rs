//! Theme error types

use thiserror::Error;

use crate::tokens::ColorToken;

/// Errors raised while loading a theme file
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file could not be read
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid TOML for a theme
    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color override is not a hex color
    #[error("invalid color for {token:?}: '{value}'")]
    InvalidColor { token: ColorToken, value: String },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

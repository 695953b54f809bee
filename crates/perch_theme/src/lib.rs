//! Perch Theme System
//!
//! Color tokens, light/dark bundles and a global theme state that widgets read
//! while rendering.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use perch_theme::{ThemeState, ColorToken};
//!
//! // Initialize theme at app startup
//! ThemeState::init_default();
//!
//! // Access theme in widgets
//! let surface = ThemeState::get().color(ColorToken::Surface);
//! ```
//!
//! # Overrides
//!
//! ```rust,ignore
//! let theme = ThemeState::get();
//! theme.set_color_override(ColorToken::Surface, Color::from_hex(0xFAFAFA));
//! theme.clear_overrides();
//! ```
//!
//! Theme files (see [`ThemeFile`]) carry the same information in TOML.

pub mod error;
pub mod file;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use file::ThemeFile;
pub use state::ThemeState;
pub use theme::{ColorScheme, ThemeBundle};
pub use tokens::*;

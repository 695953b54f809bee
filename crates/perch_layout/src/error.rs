//! Layout error types

use thiserror::Error;

/// Configuration rejected at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Placement has neither a left nor a right margin
    #[error("floating position needs a left or right margin")]
    MissingHorizontalAnchor,

    /// No scrollable sections were supplied
    #[error("layout config requires a list of sections")]
    MissingSections,

    /// No floating content was supplied
    #[error("layout config requires floating content")]
    MissingFloatingContent,
}

/// Layout engine failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Taffy refused to create or attach a node
    #[error("layout node creation failed: {0}")]
    NodeCreation(String),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        LayoutError::NodeCreation(err.to_string())
    }
}

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PerchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, PerchError>;

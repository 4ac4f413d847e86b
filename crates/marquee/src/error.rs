//! Error types for marquee

use marquee_core::ColorParseError;
use thiserror::Error;

/// Problems with a [`MarqueeConfig`](crate::MarqueeConfig)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No items to scroll
    #[error("Marquee needs at least one item")]
    EmptyItems,

    /// An item has no image source
    #[error("Item {0} has an empty source")]
    EmptySource(usize),

    /// Fewer copies than a seamless loop needs
    #[error("Marquee needs at least 2 copies of the items, got {0}")]
    TooFewCopies(usize),

    /// Edge color is not a CSS color
    #[error("Invalid edge color {value:?}: {source}")]
    InvalidEdgeColor {
        value: String,
        #[source]
        source: ColorParseError,
    },

    /// TOML text could not be deserialized
    #[error("Config parsing failed: {0}")]
    Parse(String),
}

/// Errors that can occur while building or laying out a marquee
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarqueeError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layout engine failure
    #[error("Layout failed: {0}")]
    Layout(String),
}

impl From<taffy::TaffyError> for MarqueeError {
    fn from(err: taffy::TaffyError) -> Self {
        MarqueeError::Layout(err.to_string())
    }
}

/// Result type for marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

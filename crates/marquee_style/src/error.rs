//! Error types for marquee_style

use thiserror::Error;

/// Errors that can occur while building style registrations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Identifier is not usable as a CSS class and keyframes name
    #[error("Invalid animation identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Result type for marquee_style operations
pub type Result<T> = std::result::Result<T, StyleError>;

//! Marquee Theming
//!
//! Presentation policy for the marquee's images and edges:
//!
//! - [`FilterChain`]: ordered CSS filter functions, with a software evaluator
//!   matching the filter-effects color matrices
//! - [`Theme`]: light or dark; picks the recolor chain applied to every image
//! - [`MarqueeTokens`]: sizing, spacing and opacity constants

pub mod filter;
pub mod theme;
pub mod tokens;

pub use filter::{FilterChain, FilterOp};
pub use theme::{Theme, ThemeParseError, BRAND_COLOR};
pub use tokens::MarqueeTokens;

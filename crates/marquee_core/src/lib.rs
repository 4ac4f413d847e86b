//! Marquee Core
//!
//! Foundational visual types shared by the marquee crates:
//!
//! - **Geometry**: points, sizes and rectangles used for layout results and hit testing
//! - **Color**: RGBA colors with CSS parsing (`#hex`, `rgb()`, `rgba()`, named) and CSS output
//! - **Paint**: linear gradients, brushes and pointer-event policy for overlays
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{Color, Gradient, GradientDirection};
//!
//! let edge = Color::parse("black").unwrap();
//! let fade = Gradient::fade(GradientDirection::ToRight, edge);
//!
//! assert_eq!(
//!     fade.to_css(),
//!     "linear-gradient(to right, #000000 0%, rgba(0, 0, 0, 0) 100%)"
//! );
//! ```

pub mod color;
pub mod geometry;
pub mod paint;

pub use color::{Color, ColorParseError};
pub use geometry::{Point, Rect, Size};
pub use paint::{Brush, Gradient, GradientDirection, GradientStop, PointerEvents};

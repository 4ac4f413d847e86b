//! Presentation tokens
//!
//! Pixel values mirror the utility classes the marquee was designed with:
//! `h-6` items, `max-w-20`, `gap-8` between items and `w-12` edge fades.

use serde::{Deserialize, Serialize};

/// Sizing, spacing and opacity used when building a marquee
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeTokens {
    /// Image height in pixels
    pub item_height: f32,
    /// Upper bound on image width in pixels
    pub item_max_width: f32,
    /// Image opacity (0.0 to 1.0)
    pub item_opacity: f32,
    /// Horizontal gap between neighbouring images in pixels
    pub gap: f32,
    /// Width of each edge fade in pixels
    pub edge_width: f32,
}

impl Default for MarqueeTokens {
    fn default() -> Self {
        Self {
            item_height: 24.0,
            item_max_width: 80.0,
            item_opacity: 0.6,
            gap: 32.0,
            edge_width: 48.0,
        }
    }
}

impl MarqueeTokens {
    /// Width an image occupies in the strip given its intrinsic aspect ratio
    /// (width / height), honoring the height and the max-width cap
    pub fn item_width(&self, aspect_ratio: f32) -> f32 {
        let natural = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            self.item_height * aspect_ratio
        } else {
            self.item_height
        };
        natural.min(self.item_max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = MarqueeTokens::default();
        assert_eq!(t.item_height, 24.0);
        assert_eq!(t.gap, 32.0);
        assert_eq!(t.edge_width, 48.0);
    }

    #[test]
    fn test_item_width_caps_at_max() {
        let t = MarqueeTokens::default();
        assert_eq!(t.item_width(2.0), 48.0);
        assert_eq!(t.item_width(10.0), 80.0);
        // Unknown ratio falls back to square
        assert_eq!(t.item_width(0.0), 24.0);
        assert_eq!(t.item_width(f32::NAN), 24.0);
    }
}

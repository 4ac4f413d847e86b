//! Ordered image filter chains
//!
//! A chain is applied left to right, like the CSS `filter` property, so the
//! same function may appear more than once (the light theme saturates twice).
//!
//! ```rust
//! use marquee_core::Color;
//! use marquee_theme::FilterChain;
//!
//! let white = FilterChain::new().brightness(0.0).invert(1.0);
//! assert_eq!(white.to_css(), "brightness(0) invert(100%)");
//! assert_eq!(white.apply(Color::from_hex(0x336699)), Color::WHITE);
//! ```

use marquee_core::Color;

/// One filter function
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterOp {
    /// Channel multiplier (1.0 = normal)
    Brightness(f32),
    /// Contrast multiplier around mid-gray (1.0 = normal)
    Contrast(f32),
    /// Grayscale amount (0.0 to 1.0)
    Grayscale(f32),
    /// Invert amount (0.0 to 1.0)
    Invert(f32),
    /// Opacity multiplier (0.0 to 1.0)
    Opacity(f32),
    /// Saturation multiplier (1.0 = normal, may exceed 1.0)
    Saturate(f32),
    /// Sepia amount (0.0 to 1.0)
    Sepia(f32),
    /// Hue rotation in degrees
    HueRotate(f32),
}

impl FilterOp {
    fn to_css(self) -> String {
        match self {
            FilterOp::Brightness(a) => format!("brightness({})", amount(a)),
            FilterOp::Contrast(a) => format!("contrast({})", amount(a)),
            FilterOp::Grayscale(a) => format!("grayscale({})", amount(a)),
            FilterOp::Invert(a) => format!("invert({})", amount(a)),
            FilterOp::Opacity(a) => format!("opacity({})", amount(a)),
            FilterOp::Saturate(a) => format!("saturate({})", amount(a)),
            FilterOp::Sepia(a) => format!("sepia({})", amount(a)),
            FilterOp::HueRotate(deg) => format!("hue-rotate({}deg)", round2(deg)),
        }
    }

    fn apply(self, c: [f32; 4]) -> [f32; 4] {
        let [r, g, b, a] = c;
        let rgb = match self {
            FilterOp::Brightness(k) => [r * k, g * k, b * k],
            FilterOp::Contrast(k) => {
                let f = |v: f32| (v - 0.5) * k + 0.5;
                [f(r), f(g), f(b)]
            }
            FilterOp::Invert(k) => {
                let k = k.clamp(0.0, 1.0);
                let f = |v: f32| k + v * (1.0 - 2.0 * k);
                [f(r), f(g), f(b)]
            }
            FilterOp::Opacity(k) => return [r, g, b, a * k.clamp(0.0, 1.0)],
            FilterOp::Saturate(s) => multiply(
                [
                    [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
                    [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
                    [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
                ],
                [r, g, b],
            ),
            FilterOp::Grayscale(k) => {
                let k = 1.0 - k.clamp(0.0, 1.0);
                multiply(
                    [
                        [0.2126 + 0.7874 * k, 0.7152 - 0.7152 * k, 0.0722 - 0.0722 * k],
                        [0.2126 - 0.2126 * k, 0.7152 + 0.2848 * k, 0.0722 - 0.0722 * k],
                        [0.2126 - 0.2126 * k, 0.7152 - 0.7152 * k, 0.0722 + 0.9278 * k],
                    ],
                    [r, g, b],
                )
            }
            FilterOp::Sepia(k) => {
                let k = 1.0 - k.clamp(0.0, 1.0);
                multiply(
                    [
                        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
                        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
                        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
                    ],
                    [r, g, b],
                )
            }
            FilterOp::HueRotate(deg) => {
                let (sin, cos) = deg.to_radians().sin_cos();
                multiply(
                    [
                        [
                            0.213 + cos * 0.787 - sin * 0.213,
                            0.715 - cos * 0.715 - sin * 0.715,
                            0.072 - cos * 0.072 + sin * 0.928,
                        ],
                        [
                            0.213 - cos * 0.213 + sin * 0.143,
                            0.715 + cos * 0.285 + sin * 0.140,
                            0.072 - cos * 0.072 - sin * 0.283,
                        ],
                        [
                            0.213 - cos * 0.213 - sin * 0.787,
                            0.715 - cos * 0.715 + sin * 0.715,
                            0.072 + cos * 0.928 + sin * 0.072,
                        ],
                    ],
                    [r, g, b],
                )
            }
        };
        // Every primitive clamps its result
        let [r, g, b] = rgb.map(|v| v.clamp(0.0, 1.0));
        [r, g, b, a]
    }
}

fn multiply(m: [[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [0, 1, 2].map(|row| m[row][0] * v[0] + m[row][1] * v[1] + m[row][2] * v[2])
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// `0` stays bare, everything else is written as a percentage
fn amount(a: f32) -> String {
    if a == 0.0 {
        "0".to_string()
    } else {
        format!("{}%", round2(a * 100.0))
    }
}

/// Ordered sequence of filter functions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterChain {
    ops: Vec<FilterOp>,
}

impl FilterChain {
    /// Identity chain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, op: FilterOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn brightness(self, amount: f32) -> Self {
        self.push(FilterOp::Brightness(amount.max(0.0)))
    }

    pub fn contrast(self, amount: f32) -> Self {
        self.push(FilterOp::Contrast(amount.max(0.0)))
    }

    pub fn grayscale(self, amount: f32) -> Self {
        self.push(FilterOp::Grayscale(amount.clamp(0.0, 1.0)))
    }

    pub fn invert(self, amount: f32) -> Self {
        self.push(FilterOp::Invert(amount.clamp(0.0, 1.0)))
    }

    pub fn opacity(self, amount: f32) -> Self {
        self.push(FilterOp::Opacity(amount.clamp(0.0, 1.0)))
    }

    pub fn saturate(self, amount: f32) -> Self {
        self.push(FilterOp::Saturate(amount.max(0.0)))
    }

    pub fn sepia(self, amount: f32) -> Self {
        self.push(FilterOp::Sepia(amount.clamp(0.0, 1.0)))
    }

    pub fn hue_rotate(self, degrees: f32) -> Self {
        self.push(FilterOp::HueRotate(degrees % 360.0))
    }

    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// CSS `filter` value; `none` for an empty chain
    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.ops
            .iter()
            .map(|op| op.to_css())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run a single color through the chain
    pub fn apply(&self, color: Color) -> Color {
        let [r, g, b, a] = self
            .ops
            .iter()
            .fold(color.to_array(), |acc, op| op.apply(acc));
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = FilterChain::new();
        assert_eq!(chain.to_css(), "none");
        let c = Color::from_hex(0x123456);
        assert_eq!(chain.apply(c), c);
    }

    #[test]
    fn test_css_amounts() {
        let chain = FilterChain::new()
            .brightness(0.0)
            .saturate(10.69)
            .invert(0.23)
            .hue_rotate(127.0)
            .contrast(1.1);
        assert_eq!(
            chain.to_css(),
            "brightness(0) saturate(1069%) invert(23%) hue-rotate(127deg) contrast(110%)"
        );
    }

    #[test]
    fn test_builder_clamps() {
        let chain = FilterChain::new().invert(3.0).brightness(-1.0).hue_rotate(450.0);
        assert_eq!(
            chain.ops(),
            &[
                FilterOp::Invert(1.0),
                FilterOp::Brightness(0.0),
                FilterOp::HueRotate(90.0)
            ]
        );
    }

    #[test]
    fn test_brightness_zero_blacks_out() {
        let chain = FilterChain::new().brightness(0.0);
        assert_eq!(chain.apply(Color::from_hex(0xFFAA00)), Color::BLACK);
    }

    #[test]
    fn test_full_grayscale_equalizes_channels() {
        let out = FilterChain::new()
            .grayscale(1.0)
            .apply(Color::rgb(1.0, 0.0, 0.0));
        assert!((out.r - out.g).abs() < 1e-5);
        assert!((out.g - out.b).abs() < 1e-5);
        assert!((out.r - 0.2126).abs() < 1e-4);
    }

    #[test]
    fn test_hue_rotate_zero_is_identity() {
        let c = Color::rgb(0.2, 0.5, 0.7);
        let out = FilterChain::new().hue_rotate(0.0).apply(c);
        assert!((out.r - c.r).abs() < 1e-5);
        assert!((out.g - c.g).abs() < 1e-5);
        assert!((out.b - c.b).abs() < 1e-5);
    }

    #[test]
    fn test_opacity_scales_alpha_only() {
        let out = FilterChain::new().opacity(0.5).apply(Color::WHITE);
        assert_eq!(out, Color::WHITE.with_alpha(0.5));
    }
}

//! Light and dark marquee themes
//!
//! Both themes first crush an image to black, then build the target color
//! back up, so the result depends only on the image's alpha and never on its
//! own colors.

use std::fmt;
use std::str::FromStr;

use marquee_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::FilterChain;

/// Dark teal the light theme recolors images to
pub const BRAND_COLOR: Color = Color::rgb(17.0 / 255.0, 65.0 / 255.0, 62.0 / 255.0);

/// Error returned for an unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ThemeParseError(pub String);

/// Color scheme of the surface the marquee sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light surface; images become the dark brand color
    Light,
    /// Dark surface; images become pure white
    #[default]
    Dark,
}

impl Theme {
    /// Recolor chain applied to every image
    pub fn filter(self) -> FilterChain {
        match self {
            Theme::Light => FilterChain::new()
                .brightness(0.0)
                .saturate(1.0)
                .invert(0.23)
                .sepia(0.18)
                .saturate(10.69)
                .hue_rotate(127.0)
                .brightness(1.0)
                .contrast(1.1),
            Theme::Dark => FilterChain::new().brightness(0.0).invert(1.0),
        }
    }

    /// Color every opaque pixel ends up as
    pub fn recolor_target(self) -> Color {
        match self {
            Theme::Light => BRAND_COLOR,
            Theme::Dark => Color::WHITE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

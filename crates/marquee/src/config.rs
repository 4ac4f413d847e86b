//! Marquee configuration
//!
//! A [`MarqueeConfig`] can be built in code with chained setters or read from
//! TOML. Everything except `items` has a default:
//!
//! ```toml
//! speed_seconds = 30        # one full cycle
//! container_class = ""
//! item_class = ""
//! edge_color = "black"      # any CSS color
//! theme = "dark"            # or "light"
//! copies = 3                # repetitions of the item list, at least 2
//!
//! [[items]]
//! source = "logos/acme.svg"
//! alt_text = "Acme"
//! ```
//!
//! [`MarqueeConfig::validate`] turns it into a [`ValidatedConfig`]: items are
//! checked, the edge color is parsed and a non-positive speed is clamped.

use marquee_core::Color;
use marquee_style::clamp_speed;
use marquee_theme::{MarqueeTokens, Theme};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default cycle length in seconds
pub const DEFAULT_SPEED_SECONDS: f32 = 30.0;

/// Default number of copies of the item list in the strip
pub const DEFAULT_COPIES: usize = 3;

/// Fewest copies that still loop without a gap
pub const MIN_COPIES: usize = 2;

/// Default edge fade color
pub const DEFAULT_EDGE_COLOR: &str = "black";

/// One image in the marquee
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Image URI
    #[serde(alias = "src")]
    pub source: String,
    /// Alternative text
    #[serde(alias = "alt", default)]
    pub alt_text: String,
}

impl CarouselItem {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Caller-facing marquee configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Items in scroll order
    pub items: Vec<CarouselItem>,
    /// Seconds per full cycle
    #[serde(default = "default_speed_seconds")]
    pub speed_seconds: f32,
    /// Extra classes for the outer container
    #[serde(default)]
    pub container_class: String,
    /// Extra classes for every image
    #[serde(default)]
    pub item_class: String,
    /// CSS color of the edge fades
    #[serde(default = "default_edge_color")]
    pub edge_color: String,
    #[serde(default)]
    pub theme: Theme,
    /// Repetitions of the item list in the strip
    #[serde(default = "default_copies")]
    pub copies: usize,
    #[serde(default)]
    pub tokens: MarqueeTokens,
}

fn default_speed_seconds() -> f32 {
    DEFAULT_SPEED_SECONDS
}

fn default_edge_color() -> String {
    DEFAULT_EDGE_COLOR.to_string()
}

fn default_copies() -> usize {
    DEFAULT_COPIES
}

impl MarqueeConfig {
    /// Config with the given items and every other field defaulted
    pub fn new(items: impl IntoIterator<Item = CarouselItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            speed_seconds: DEFAULT_SPEED_SECONDS,
            container_class: String::new(),
            item_class: String::new(),
            edge_color: default_edge_color(),
            theme: Theme::default(),
            copies: DEFAULT_COPIES,
            tokens: MarqueeTokens::default(),
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn speed(mut self, seconds: f32) -> Self {
        self.speed_seconds = seconds;
        self
    }

    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = color.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    pub fn tokens(mut self, tokens: MarqueeTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Check the config and resolve derived values
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        if let Some(index) = self.items.iter().position(|i| i.source.trim().is_empty()) {
            return Err(ConfigError::EmptySource(index));
        }
        if self.copies < MIN_COPIES {
            return Err(ConfigError::TooFewCopies(self.copies));
        }
        let edge_color =
            Color::parse(&self.edge_color).map_err(|source| ConfigError::InvalidEdgeColor {
                value: self.edge_color.clone(),
                source,
            })?;

        let mut config = self.clone();
        config.speed_seconds = clamp_speed(self.speed_seconds);

        Ok(ValidatedConfig { config, edge_color })
    }
}

/// A config that passed [`MarqueeConfig::validate`]
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    config: MarqueeConfig,
    edge_color: Color,
}

impl ValidatedConfig {
    pub fn items(&self) -> &[CarouselItem] {
        &self.config.items
    }

    pub fn speed_seconds(&self) -> f32 {
        self.config.speed_seconds
    }

    pub(crate) fn set_speed_seconds(&mut self, seconds: f32) {
        self.config.speed_seconds = clamp_speed(seconds);
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn copies(&self) -> usize {
        self.config.copies
    }

    pub fn tokens(&self) -> &MarqueeTokens {
        &self.config.tokens
    }

    pub fn container_class(&self) -> &str {
        &self.config.container_class
    }

    pub fn item_class(&self) -> &str {
        &self.config.item_class
    }

    pub fn as_config(&self) -> &MarqueeConfig {
        &self.config
    }
}

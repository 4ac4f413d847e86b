//! RGBA colors with CSS parsing and serialization
//!
//! Accepted syntax mirrors what a stylesheet author would write for a
//! gradient stop: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
//! `rgba(r, g, b, a)` and a set of named colors. Channels in `rgb()` and
//! `rgba()` are in the CSS 0-255 range; alpha is 0.0-1.0.

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map_res},
    number::complete::float,
    sequence::{delimited, preceded},
    IResult,
};
use thiserror::Error;

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Errors produced when parsing a CSS color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input was empty or whitespace
    #[error("color is empty")]
    Empty,
    /// Hex digits had an unsupported length
    #[error("hex color `#{0}` must have 3, 6 or 8 digits")]
    HexLength(String),
    /// Input matched no supported syntax
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// RGBA color, channels in 0.0-1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Create from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(quantize)
    }

    /// Parse a CSS color string
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = input.strip_prefix('#') {
            return match all_consuming(hex_color)(input) {
                Ok((_, color)) => Ok(color),
                Err(_) if digits.chars().all(|c| c.is_ascii_hexdigit()) => {
                    Err(ColorParseError::HexLength(digits.to_string()))
                }
                Err(_) => Err(ColorParseError::Unrecognized(input.to_string())),
            };
        }

        if let Ok((_, color)) = all_consuming(alt((rgba_color, rgb_color)))(input) {
            return Ok(color);
        }

        named_color(input).ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))
    }

    /// Serialize as CSS: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            let alpha = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", r, g, b, alpha)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ============================================================================
// Parsers
// ============================================================================

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA`
fn hex_color(input: &str) -> ParseResult<'_, Color> {
    map_res(
        preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit())),
        color_from_hex_digits,
    )(input)
}

fn color_from_hex_digits(hex: &str) -> Result<Color, ColorParseError> {
    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::Unrecognized(format!("#{}", hex)))
    };
    match hex.len() {
        3 => Ok(Color::from_rgba8(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
            255,
        )),
        6 => Ok(Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        )),
        8 => Ok(Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => Err(ColorParseError::HexLength(hex.to_string())),
    }
}

fn component(input: &str) -> ParseResult<'_, f32> {
    delimited(multispace0, float, multispace0)(input)
}

fn open_paren(input: &str) -> ParseResult<'_, char> {
    delimited(multispace0, char('('), multispace0)(input)
}

/// `rgba(r, g, b, a)`
fn rgba_color(input: &str) -> ParseResult<'_, Color> {
    let (input, _) = tag_no_case("rgba")(input)?;
    let (input, _) = open_paren(input)?;
    let (input, r) = component(input)?;
    let (input, _) = char(',')(input)?;
    let (input, g) = component(input)?;
    let (input, _) = char(',')(input)?;
    let (input, b) = component(input)?;
    let (input, _) = char(',')(input)?;
    let (input, a) = component(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, from_css_channels(r, g, b, a)))
}

/// `rgb(r, g, b)`
fn rgb_color(input: &str) -> ParseResult<'_, Color> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = open_paren(input)?;
    let (input, r) = component(input)?;
    let (input, _) = char(',')(input)?;
    let (input, g) = component(input)?;
    let (input, _) = char(',')(input)?;
    let (input, b) = component(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, from_css_channels(r, g, b, 1.0)))
}

fn from_css_channels(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::rgba(
        (r / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (b / 255.0).clamp(0.0, 1.0),
        a.clamp(0.0, 1.0),
    )
}

fn named_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "cyan" | "aqua" => Some(Color::CYAN),
        "magenta" | "fuchsia" => Some(Color::MAGENTA),
        "gray" | "grey" => Some(Color::GRAY),
        "silver" => Some(Color::from_hex(0xC0C0C0)),
        "navy" => Some(Color::from_hex(0x000080)),
        "teal" => Some(Color::from_hex(0x008080)),
        "orange" => Some(Color::from_hex(0xFFA500)),
        "purple" => Some(Color::from_hex(0x800080)),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}

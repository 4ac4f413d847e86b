//! Gradients, brushes and pointer policy

use crate::color::Color;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Horizontal direction of a linear gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    /// First stop on the left edge
    ToRight,
    /// First stop on the right edge
    ToLeft,
}

impl GradientDirection {
    fn as_css(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
            GradientDirection::ToLeft => "to left",
        }
    }
}

/// Horizontal linear gradient
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    direction: GradientDirection,
    /// Color stops sorted by offset
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient with explicit stops
    pub fn linear(direction: GradientDirection, mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { direction, stops }
    }

    /// Opaque `color` fading to a fully transparent version of itself
    pub fn fade(direction: GradientDirection, color: Color) -> Self {
        Self::linear(
            direction,
            vec![
                GradientStop::new(0.0, color.with_alpha(1.0)),
                GradientStop::new(1.0, color.with_alpha(0.0)),
            ],
        )
    }

    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `t` along the gradient direction (0.0 = first stop side)
    pub fn color_at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span > f32::EPSILON {
                    (t - a.offset) / span
                } else {
                    0.0
                };
                return lerp(a.color, b.color, local);
            }
        }
        last.color
    }

    /// CSS `linear-gradient(...)` text
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css(), (s.offset * 100.0).round()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}, {})", self.direction.as_css(), stops)
    }
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color::rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Brush for filling element backgrounds
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl Brush {
    /// CSS `background` value
    pub fn to_css(&self) -> String {
        match self {
            Brush::Solid(color) => color.to_css(),
            Brush::Gradient(gradient) => gradient.to_css(),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

/// Pointer event behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    /// Normal hit testing
    #[default]
    Auto,
    /// Transparent to input, events reach whatever is underneath
    None,
}

impl PointerEvents {
    pub fn is_hit_testable(self) -> bool {
        matches!(self, PointerEvents::Auto)
    }

    pub fn as_css(self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let fade = Gradient::fade(GradientDirection::ToRight, Color::BLACK);
        assert_eq!(fade.color_at(0.0), Color::BLACK);
        assert_eq!(fade.color_at(1.0).a, 0.0);
        assert!((fade.color_at(0.5).a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fade_forces_opaque_start() {
        let fade = Gradient::fade(GradientDirection::ToLeft, Color::WHITE.with_alpha(0.3));
        assert_eq!(fade.stops()[0].color.a, 1.0);
    }

    #[test]
    fn test_stops_sorted() {
        let g = Gradient::linear(
            GradientDirection::ToRight,
            vec![
                GradientStop::new(1.0, Color::WHITE),
                GradientStop::new(0.0, Color::BLACK),
            ],
        );
        assert_eq!(g.stops()[0].offset, 0.0);
    }

    #[test]
    fn test_to_css() {
        let fade = Gradient::fade(GradientDirection::ToLeft, Color::WHITE);
        assert_eq!(
            fade.to_css(),
            "linear-gradient(to left, #ffffff 0%, rgba(255, 255, 255, 0) 100%)"
        );
        assert_eq!(Brush::from(Color::BLACK).to_css(), "#000000");
    }

    #[test]
    fn test_pointer_events() {
        assert!(PointerEvents::default().is_hit_testable());
        assert!(!PointerEvents::None.is_hit_testable());
        assert_eq!(PointerEvents::None.as_css(), "none");
    }
}

//! The scrolling rule installed for each marquee instance.
//!
//! A rule is two things joined by the instance's [`AnimationId`]:
//!
//! - a `@keyframes` block translating from `0` to `-50%` of the element's own
//!   width, and
//! - a class laying the strip out as a content-sized flex row that runs that
//!   animation linearly, forever, with the play state pinned to `running`.
//!
//! The strip is sized to its content and holds repeated copies of the item
//! list, so a `-50%` translation always lands on repeated content.

use std::time::Duration;

use tracing::warn;

use crate::identity::AnimationId;

/// Horizontal travel over one cycle, as a fraction of the strip's own width
pub const TRAVEL_FRACTION: f32 = -0.5;

/// Shortest cycle a rule will be built with
pub const MIN_DURATION_SECS: f32 = 0.1;

/// One keyframe of the scroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollKeyframe {
    /// Position in the cycle (0.0 to 1.0)
    pub progress: f32,
    /// Horizontal translation as a fraction of the element's own width
    pub translate_x: f32,
}

/// Keyed scroll animation rule
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRule {
    id: AnimationId,
    speed_seconds: f32,
    keyframes: [ScrollKeyframe; 2],
}

impl ScrollRule {
    /// Build the rule for `id` with one cycle lasting `speed_seconds`.
    ///
    /// Non-finite or too-small durations are raised to [`MIN_DURATION_SECS`].
    pub fn new(id: AnimationId, speed_seconds: f32) -> Self {
        Self {
            id,
            speed_seconds: clamp_speed(speed_seconds),
            keyframes: [
                ScrollKeyframe {
                    progress: 0.0,
                    translate_x: 0.0,
                },
                ScrollKeyframe {
                    progress: 1.0,
                    translate_x: TRAVEL_FRACTION,
                },
            ],
        }
    }

    pub fn id(&self) -> &AnimationId {
        &self.id
    }

    /// Cycle length in seconds
    pub fn speed_seconds(&self) -> f32 {
        self.speed_seconds
    }

    /// Cycle length, saturating at [`Duration::MAX`] for speeds too long to
    /// represent
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.speed_seconds).unwrap_or(Duration::MAX)
    }

    pub fn keyframes(&self) -> &[ScrollKeyframe; 2] {
        &self.keyframes
    }

    /// Translation (fraction of own width) after `elapsed` time.
    ///
    /// The animation repeats forever, so this wraps back to 0 every cycle.
    pub fn translate_at(&self, elapsed: Duration) -> f32 {
        let cycle = self.speed_seconds as f64;
        let progress = (elapsed.as_secs_f64() % cycle / cycle) as f32;
        let [from, to] = self.keyframes;
        // Linear timing
        from.translate_x + (to.translate_x - from.translate_x) * progress
    }

    /// Stylesheet text for this rule
    pub fn to_css(&self) -> String {
        let [from, to] = self.keyframes;
        format!(
            "@keyframes {id} {{\n  {p0}% {{ transform: translateX({t0}); }}\n  {p1}% {{ transform: translateX({t1}); }}\n}}\n\n.{id} {{\n  display: flex;\n  width: fit-content;\n  animation: {id} {secs}s linear infinite;\n  will-change: transform;\n  animation-play-state: running !important;\n}}\n",
            id = self.id,
            p0 = percent(from.progress),
            t0 = translate(from.translate_x),
            p1 = percent(to.progress),
            t1 = translate(to.translate_x),
            secs = self.speed_seconds,
        )
    }
}

/// Raise a too-small or non-finite cycle length to [`MIN_DURATION_SECS`]
pub fn clamp_speed(seconds: f32) -> f32 {
    if seconds.is_finite() && seconds >= MIN_DURATION_SECS {
        seconds
    } else {
        warn!(
            requested = seconds,
            clamped = MIN_DURATION_SECS,
            "marquee speed must be positive, clamping"
        );
        MIN_DURATION_SECS
    }
}

fn percent(fraction: f32) -> String {
    format!("{}", (fraction * 100.0).round())
}

fn translate(fraction: f32) -> String {
    if fraction == 0.0 {
        "0".to_string()
    } else {
        format!("{}%", (fraction * 100.0).round())
    }
}

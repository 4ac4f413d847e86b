//! Per-instance animation identifiers.
//!
//! Each mounted marquee needs a name that is simultaneously a CSS class, a
//! `@keyframes` name and part of its style key. The name is picked once when
//! the instance is created and never recomputed, so the class on the strip and
//! the rule in the style surface stay in sync across re-renders.
//!
//! ```ignore
//! // Production: random, collision-free in practice
//! let id = RandomIdentity::default().next_id(); // "marquee-scroll-3f2a..."
//!
//! // Tests: deterministic
//! let ids = CounterIdentity::new();
//! assert_eq!(ids.next_id().as_str(), "marquee-scroll-0");
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::error::{Result, StyleError};

/// Prefix shared by generated identifiers
pub const DEFAULT_ID_PREFIX: &str = "marquee-scroll";

/// Prefix of the style-surface key derived from an identifier
const STYLE_KEY_PREFIX: &str = "marquee-style";

/// Identifier joining a style rule to the element that animates with it.
///
/// Always a valid CSS identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(String);

impl AnimationId {
    /// Validate and wrap a raw identifier
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if is_css_identifier(&raw) {
            Ok(Self(raw))
        } else {
            Err(StyleError::InvalidIdentifier(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the style-surface entry owned by this identifier
    pub fn style_key(&self) -> String {
        format!("{}-{}", STYLE_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AnimationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `[A-Za-z_][A-Za-z0-9_-]*`, or the same with a single leading `-`
fn is_css_identifier(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Source of identifiers for new instances
pub trait IdentitySource: Send + Sync {
    /// Produce the identifier for the next instance
    fn next_id(&self) -> AnimationId;
}

/// Random identifiers, the production default.
///
/// Uses a v4 UUID suffix, so collisions between the few dozen instances a page
/// realistically holds are not a practical concern.
#[derive(Debug, Clone)]
pub struct RandomIdentity {
    prefix: &'static str,
}

impl RandomIdentity {
    /// Fails unless `prefix` is itself a valid CSS identifier
    pub fn with_prefix(prefix: &'static str) -> Result<Self> {
        AnimationId::new(prefix)?;
        Ok(Self { prefix })
    }
}

impl Default for RandomIdentity {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ID_PREFIX,
        }
    }
}

impl IdentitySource for RandomIdentity {
    fn next_id(&self) -> AnimationId {
        AnimationId(format!("{}-{}", self.prefix, Uuid::new_v4().as_simple()))
    }
}

/// Monotonic identifiers; zero collisions for the lifetime of the source
#[derive(Debug)]
pub struct CounterIdentity {
    prefix: &'static str,
    next: AtomicU64,
}

impl CounterIdentity {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_ID_PREFIX,
            next: AtomicU64::new(0),
        }
    }

    /// Fails unless `prefix` is itself a valid CSS identifier
    pub fn with_prefix(prefix: &'static str) -> Result<Self> {
        AnimationId::new(prefix)?;
        Ok(Self {
            prefix,
            next: AtomicU64::new(0),
        })
    }
}

impl Default for CounterIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySource for CounterIdentity {
    fn next_id(&self) -> AnimationId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        AnimationId(format!("{}-{}", self.prefix, n))
    }
}

/// Caller-supplied identifier.
///
/// Every call returns the same identifier; sharing one between two mounted
/// instances makes them overwrite each other's rule.
#[derive(Debug, Clone)]
pub struct ExplicitIdentity(AnimationId);

impl ExplicitIdentity {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        AnimationId::new(id).map(Self)
    }
}

impl IdentitySource for ExplicitIdentity {
    fn next_id(&self) -> AnimationId {
        self.0.clone()
    }
}

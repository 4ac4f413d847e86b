//! Marquee Style Registration
//!
//! Everything needed to install one scrolling animation per component
//! instance on a shared style surface without instances stepping on each
//! other:
//!
//! - **Identity**: [`AnimationId`] tokens from an injectable [`IdentitySource`]
//!   (random by default, monotonic counter or explicit key for tests)
//! - **Rule**: [`ScrollRule`], the keyframes plus class that translate a strip
//!   from 0 to -50% of its own width, linear and infinite
//! - **Registry**: the [`StyleRegistry`] collaborator and its in-memory
//!   [`StyleSheet`] implementation
//! - **Registration**: [`StyleRegistration`], the start/stop lifecycle object
//!   owning exactly one keyed rule
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use marquee_style::{CounterIdentity, IdentitySource, StyleRegistration, StyleRegistry, StyleSheet};
//!
//! let sheet = Arc::new(StyleSheet::new());
//! let ids = CounterIdentity::new();
//!
//! let mut registration = StyleRegistration::new(sheet.clone(), ids.next_id(), 30.0);
//! registration.start();
//! assert_eq!(sheet.len(), 1);
//!
//! registration.stop();
//! registration.stop(); // idempotent
//! assert!(sheet.is_empty());
//! ```

pub mod error;
pub mod identity;
pub mod registration;
pub mod registry;
pub mod rule;

pub use error::{Result, StyleError};
pub use identity::{
    AnimationId, CounterIdentity, ExplicitIdentity, IdentitySource, RandomIdentity,
    DEFAULT_ID_PREFIX,
};
pub use registration::StyleRegistration;
pub use registry::{global_style_sheet, SharedStyleRegistry, StyleRegistry, StyleSheet, Upsert};
pub use rule::{clamp_speed, ScrollKeyframe, ScrollRule, MIN_DURATION_SECS, TRAVEL_FRACTION};

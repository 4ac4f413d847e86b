//! Marquee
//!
//! A horizontally auto-scrolling strip of logos that loops without a visible
//! reset.
//!
//! - **Config**: [`MarqueeConfig`] built in code or read from TOML
//! - **Loop composition**: [`compose`] repeats the items so the -50% scroll
//!   always lands on repeated content
//! - **Render tree**: [`Element`] nodes with edge fades and themed images,
//!   serializable with [`Element::to_html`]
//! - **Layout**: [`MarqueeLayout`] measures the strip with taffy and hit tests
//!   through the pointer-transparent fades
//! - **Component**: [`Marquee`] ties it together with a per-instance style
//!   registration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use marquee::prelude::*;
//!
//! let sheet = Arc::new(StyleSheet::new());
//! let config = MarqueeConfig::new([
//!     CarouselItem::new("logos/a.svg", "A"),
//!     CarouselItem::new("logos/b.svg", "B"),
//! ]);
//!
//! let mut marquee = Marquee::new(config, sheet.clone(), &RandomIdentity::default()).unwrap();
//! let tree = marquee.render();
//! assert_eq!(tree.images().len(), 6);
//!
//! marquee.start();
//! assert_eq!(sheet.len(), 1);
//!
//! marquee.stop();
//! assert!(sheet.is_empty());
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod layout;
pub mod node;
pub mod sequence;

pub use component::Marquee;
pub use config::{
    CarouselItem, MarqueeConfig, ValidatedConfig, DEFAULT_COPIES, DEFAULT_EDGE_COLOR,
    DEFAULT_SPEED_SECONDS, MIN_COPIES,
};
pub use error::{ConfigError, MarqueeError, Result};
pub use layout::{EdgeBox, HitTarget, ItemBox, MarqueeLayout};
pub use node::{Div, DivRole, EdgeSide, Element, Img, Loading, ObjectFit};
pub use sequence::{compose, RenderedItem, RenderedSequence};

pub use marquee_core::{Color, Point, PointerEvents, Rect};
pub use marquee_style::{
    clamp_speed, global_style_sheet, AnimationId, CounterIdentity, ExplicitIdentity,
    IdentitySource, RandomIdentity, SharedStyleRegistry, StyleRegistry, StyleSheet,
};
pub use marquee_theme::{MarqueeTokens, Theme};

/// Everything needed to build and drive a marquee
pub mod prelude {
    pub use crate::component::Marquee;
    pub use crate::config::{CarouselItem, MarqueeConfig};
    pub use crate::error::{MarqueeError, Result};
    pub use crate::layout::{HitTarget, MarqueeLayout};
    pub use crate::node::{DivRole, EdgeSide, Element};
    pub use marquee_core::{Color, Point};
    pub use marquee_style::{
        global_style_sheet, CounterIdentity, IdentitySource, RandomIdentity, StyleRegistry,
        StyleSheet,
    };
    pub use marquee_theme::{MarqueeTokens, Theme};
}

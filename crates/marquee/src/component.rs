//! The marquee component
//!
//! A [`Marquee`] pairs a validated config with the style registration for its
//! scroll rule. Hosts drive it like any mounted element:
//!
//! 1. build it (the animation id is chosen here, once),
//! 2. commit [`Marquee::render`] output, then call [`Marquee::start`],
//! 3. call [`Marquee::stop`] or drop it on unmount.
//!
//! `render` only attaches the animation class after `start` has installed the
//! rule, so the strip is never classed for a rule that is not there.

use std::time::Duration;

use marquee_core::{Gradient, GradientDirection, PointerEvents};
use marquee_style::{
    global_style_sheet, AnimationId, IdentitySource, RandomIdentity, ScrollRule,
    SharedStyleRegistry, StyleRegistration,
};
use tracing::debug;

use crate::config::{CarouselItem, MarqueeConfig, ValidatedConfig};
use crate::error::Result;
use crate::layout::MarqueeLayout;
use crate::node::{Div, DivRole, EdgeSide, Element, Img, Loading, ObjectFit};
use crate::sequence::{compose, RenderedSequence};

/// A seamless looping logo strip
#[derive(Debug)]
pub struct Marquee {
    config: ValidatedConfig,
    registration: StyleRegistration,
}

impl Marquee {
    /// Validate `config` and bind a fresh animation id from `ids`.
    ///
    /// Nothing is written to `registry` until [`start`](Self::start).
    pub fn new(
        config: MarqueeConfig,
        registry: SharedStyleRegistry,
        ids: &dyn IdentitySource,
    ) -> Result<Self> {
        let config = config.validate()?;
        let id = ids.next_id();
        debug!(
            %id,
            items = config.items().len(),
            copies = config.copies(),
            theme = %config.theme(),
            "marquee created"
        );
        let registration = StyleRegistration::new(registry, id, config.speed_seconds());
        Ok(Self {
            config,
            registration,
        })
    }

    /// Marquee on the process-wide style sheet with a random id
    pub fn with_global_registry(config: MarqueeConfig) -> Result<Self> {
        Self::new(config, global_style_sheet(), &RandomIdentity::default())
    }

    pub fn id(&self) -> &AnimationId {
        self.registration.id()
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// The rule this instance installs
    pub fn rule(&self) -> &ScrollRule {
        self.registration.rule()
    }

    /// Key of this instance's entry on the registry
    pub fn style_key(&self) -> &str {
        self.registration.style_key()
    }

    pub fn is_started(&self) -> bool {
        self.registration.is_active()
    }

    /// Install the scroll rule. Call after the rendered tree is committed.
    pub fn start(&mut self) -> &AnimationId {
        self.registration.start()
    }

    /// Remove the scroll rule. Returns whether an entry was removed; extra
    /// calls do nothing.
    pub fn stop(&mut self) -> bool {
        self.registration.stop()
    }

    /// Change the cycle length. A started marquee rewrites its existing rule,
    /// which restarts the scroll from offset 0.
    pub fn set_speed(&mut self, seconds: f32) -> bool {
        self.config.set_speed_seconds(seconds);
        self.registration.update_speed(self.config.speed_seconds())
    }

    /// Items in strip order, repeated for the seamless loop
    pub fn sequence(&self) -> RenderedSequence<'_> {
        compose(self.config.items(), self.config.copies())
    }

    /// Build the element tree for the current state
    pub fn render(&self) -> Element {
        let tokens = self.config.tokens();
        let filter = self.config.theme().filter();
        let item_classes: Vec<String> = self
            .config
            .item_class()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let images = self.sequence().iter().map(|r| {
            Element::Img(Img {
                key: r.key(),
                source: r.item.source.clone(),
                alt: r.item.alt_text.clone(),
                classes: item_classes.clone(),
                filter: filter.clone(),
                loading: Loading::Lazy,
                object_fit: ObjectFit::Contain,
                height: tokens.item_height,
                max_width: tokens.item_max_width,
                opacity: tokens.item_opacity,
            })
        });

        let mut strip = Div::new(DivRole::Strip)
            .css("display", "flex")
            .css("width", "fit-content")
            .css("gap", px(tokens.gap))
            .css("align-items", "center")
            .css("padding-right", px(tokens.gap));
        if let Some(class) = self.registration.class_name() {
            strip = strip.class(class);
        }

        Div::new(DivRole::Container)
            .class(self.config.container_class())
            .css("width", "100%")
            .css("overflow", "hidden")
            .css("background-color", "transparent")
            .child(
                Div::new(DivRole::Wrapper)
                    .css("position", "relative")
                    .child(strip.children(images))
                    .child(self.edge(EdgeSide::Left))
                    .child(self.edge(EdgeSide::Right)),
            )
            .into()
    }

    fn edge(&self, side: EdgeSide) -> Div {
        let (anchor, direction) = match side {
            EdgeSide::Left => ("left", GradientDirection::ToRight),
            EdgeSide::Right => ("right", GradientDirection::ToLeft),
        };
        Div::new(DivRole::EdgeFade(side))
            .css("position", "absolute")
            .css("top", "0")
            .css("bottom", "0")
            .css(anchor, "0")
            .css("width", px(self.config.tokens().edge_width))
            .background(Gradient::fade(direction, self.config.edge_color()))
            .pointer_events(PointerEvents::None)
    }

    /// Lay the strip out at `viewport_width`, given each item's intrinsic
    /// aspect ratio. Edge hit testing follows the rendered overlays.
    pub fn layout(
        &self,
        viewport_width: f32,
        aspect_ratio: impl Fn(&CarouselItem) -> f32,
    ) -> Result<MarqueeLayout> {
        let tree = self.render();
        let pointer_events = |side| {
            tree.find(DivRole::EdgeFade(side))
                .map(|edge| edge.pointer_events)
                .unwrap_or_default()
        };
        MarqueeLayout::compute(
            self.sequence(),
            self.config.tokens(),
            [pointer_events(EdgeSide::Left), pointer_events(EdgeSide::Right)],
            viewport_width,
            aspect_ratio,
        )
    }

    /// Strip offset in pixels `elapsed` after start, for a computed layout
    pub fn offset_at(&self, layout: &MarqueeLayout, elapsed: Duration) -> f32 {
        layout.offset_at(self.rule(), elapsed)
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, MarqueeError};
    use crate::layout::HitTarget;
    use marquee_core::{Brush, Color, Point};
    use marquee_style::{CounterIdentity, ExplicitIdentity, StyleRegistry, StyleSheet};
    use marquee_theme::Theme;
    use std::sync::Arc;

    fn items() -> Vec<CarouselItem> {
        vec![
            CarouselItem::new("a.png", "A"),
            CarouselItem::new("b.png", "B"),
        ]
    }

    fn marquee(config: MarqueeConfig) -> (Marquee, Arc<StyleSheet>) {
        let sheet = Arc::new(StyleSheet::new());
        let m = Marquee::new(config, sheet.clone(), &CounterIdentity::new()).unwrap();
        (m, sheet)
    }

    fn strip_classes(tree: &Element) -> Vec<String> {
        tree.find(DivRole::Strip).unwrap().classes.clone()
    }

    #[test]
    fn test_default_end_to_end() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        m.start();

        let tree = m.render();
        let alts: Vec<_> = tree.images().iter().map(|i| i.alt.as_str()).collect();
        assert_eq!(alts, ["A", "B", "A", "B", "A", "B"]);

        let css = sheet.rule(m.style_key()).unwrap();
        assert!(css.contains(&format!("animation: {} 30s linear infinite;", m.id())));

        for img in tree.images() {
            assert_eq!(img.filter.to_css(), "brightness(0) invert(100%)");
            assert_eq!(img.loading, Loading::Lazy);
            assert_eq!(img.object_fit, ObjectFit::Contain);
        }

        for side in [EdgeSide::Left, EdgeSide::Right] {
            let edge = tree.find(DivRole::EdgeFade(side)).unwrap();
            let Some(Brush::Gradient(gradient)) = &edge.background else {
                panic!("edge {side:?} has no gradient");
            };
            assert_eq!(gradient.stops()[0].color, Color::BLACK);
            assert_eq!(gradient.stops()[1].color.a, 0.0);
            assert_eq!(edge.pointer_events, PointerEvents::None);
        }
    }

    #[test]
    fn test_tree_shape() {
        let (m, _sheet) = marquee(MarqueeConfig::new(items()).container_class("py-4 my-logos"));
        let tree = m.render();
        let container = tree.as_div().unwrap();
        assert_eq!(container.role, DivRole::Container);
        assert_eq!(container.classes, ["py-4", "my-logos"]);
        assert!(container.style.contains(&("overflow", "hidden".to_string())));

        let wrapper = container.children[0].as_div().unwrap();
        assert_eq!(wrapper.role, DivRole::Wrapper);
        let roles: Vec<_> = wrapper
            .children
            .iter()
            .filter_map(Element::as_div)
            .map(|d| d.role)
            .collect();
        assert_eq!(
            roles,
            [
                DivRole::Strip,
                DivRole::EdgeFade(EdgeSide::Left),
                DivRole::EdgeFade(EdgeSide::Right)
            ]
        );
    }

    #[test]
    fn test_class_only_while_started() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        assert!(strip_classes(&m.render()).is_empty());

        m.start();
        assert!(sheet.contains(m.style_key()));
        assert_eq!(strip_classes(&m.render()), [m.id().as_str()]);

        m.stop();
        assert!(strip_classes(&m.render()).is_empty());
    }

    #[test]
    fn test_start_stop_lifecycle() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        assert_eq!(sheet.len(), 0);
        m.start();
        assert_eq!(sheet.len(), 1);
        assert!(m.stop());
        assert_eq!(sheet.len(), 0);
        assert!(!m.stop());

        m.start();
        m.start();
        assert_eq!(sheet.len(), 1);
        m.stop();
        m.stop();
        assert_eq!(sheet.len(), 0);
    }

    #[test]
    fn test_speed_round_trip() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        m.start();
        let initial = sheet.rule(m.style_key()).unwrap();

        assert!(m.set_speed(10.0));
        let faster = sheet.rule(m.style_key()).unwrap();
        assert_ne!(faster, initial);
        assert!(faster.contains("10s linear infinite"));
        assert_eq!(sheet.len(), 1);

        assert!(m.set_speed(30.0));
        assert_eq!(sheet.rule(m.style_key()).unwrap(), initial);
        assert!(!m.set_speed(30.0));
    }

    #[test]
    fn test_speed_change_before_start_stays_local() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        m.set_speed(12.0);
        assert!(sheet.is_empty());
        m.start();
        assert!(sheet
            .rule(m.style_key())
            .unwrap()
            .contains("12s linear infinite"));
    }

    #[test]
    fn test_nonpositive_speed_is_clamped() {
        let (mut m, _sheet) = marquee(MarqueeConfig::new(items()).speed(0.0));
        assert_eq!(m.rule().speed_seconds(), 0.1);
        m.set_speed(-3.0);
        assert_eq!(m.config().speed_seconds(), 0.1);
    }

    #[test]
    fn test_instances_do_not_collide() {
        let sheet = Arc::new(StyleSheet::new());
        let ids = CounterIdentity::new();
        let mut a = Marquee::new(MarqueeConfig::new(items()), sheet.clone(), &ids).unwrap();
        let mut b = Marquee::new(MarqueeConfig::new(items()), sheet.clone(), &ids).unwrap();
        assert_ne!(a.id(), b.id());

        a.start();
        b.start();
        assert_eq!(sheet.len(), 2);

        b.set_speed(5.0);
        assert!(sheet.rule(a.style_key()).unwrap().contains("30s"));

        drop(b);
        assert_eq!(sheet.len(), 1);
        assert!(sheet.contains(a.style_key()));
    }

    #[test]
    fn test_drop_removes_rule() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        m.start();
        drop(m);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_external_removal_then_stop() {
        let (mut m, sheet) = marquee(MarqueeConfig::new(items()));
        m.start();
        sheet.remove_rule(m.style_key());
        assert!(!m.stop());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_light_theme_filter_on_every_image() {
        let (m, _sheet) = marquee(
            MarqueeConfig::new(items())
                .theme(Theme::Light)
                .item_class("logo"),
        );
        let expected = Theme::Light.filter();
        let tree = m.render();
        assert_eq!(tree.images().len(), 6);
        for img in tree.images() {
            assert_eq!(img.filter, expected);
            assert_eq!(img.classes, ["logo"]);
        }
    }

    #[test]
    fn test_custom_edge_color() {
        let (m, _sheet) = marquee(MarqueeConfig::new(items()).edge_color("#ffffff"));
        let tree = m.render();
        let edge = tree.find(DivRole::EdgeFade(EdgeSide::Right)).unwrap();
        assert_eq!(
            edge.background,
            Some(Brush::Gradient(Gradient::fade(
                GradientDirection::ToLeft,
                Color::WHITE
            )))
        );
    }

    #[test]
    fn test_empty_items_rejected() {
        let sheet = Arc::new(StyleSheet::new());
        let err = Marquee::new(MarqueeConfig::new(Vec::new()), sheet, &CounterIdentity::new())
            .unwrap_err();
        assert_eq!(err, MarqueeError::Config(ConfigError::EmptyItems));
    }

    #[test]
    fn test_explicit_identity() {
        let sheet = Arc::new(StyleSheet::new());
        let ids = ExplicitIdentity::new("partners-strip").unwrap();
        let mut m = Marquee::new(MarqueeConfig::new(items()), sheet.clone(), &ids).unwrap();
        m.start();
        assert_eq!(m.style_key(), "marquee-style-partners-strip");
        assert!(sheet.contains("marquee-style-partners-strip"));
    }

    #[test]
    fn test_global_registry() {
        let mut m = Marquee::with_global_registry(MarqueeConfig::new(items())).unwrap();
        assert!(m.id().as_str().starts_with("marquee-scroll-"));
        m.start();
        assert!(global_style_sheet().contains(m.style_key()));
        let key = m.style_key().to_string();
        drop(m);
        assert!(!global_style_sheet().contains(&key));
    }

    #[test]
    fn test_html_output() {
        let (mut m, _sheet) = marquee(MarqueeConfig::new(items()));
        m.start();
        let html = m.render().to_html();
        assert!(html.starts_with("<div style=\"width: 100%; overflow: hidden;"));
        assert!(html.contains(&format!("class=\"{}\"", m.id())));
        assert_eq!(html.matches("<img ").count(), 6);
        assert_eq!(html.matches("pointer-events: none;").count(), 2);
    }

    #[test]
    fn test_layout_edges_follow_rendered_overlays() {
        let (m, _sheet) = marquee(MarqueeConfig::new(items()));
        let tree = m.render();
        let layout = m.layout(200.0, |_| 2.0).unwrap();

        for edge in layout.edges() {
            let rendered = tree.find(DivRole::EdgeFade(edge.side)).unwrap();
            assert_eq!(edge.pointer_events, rendered.pointer_events);
        }
        // Under each fade the item beneath receives the pointer
        assert_eq!(
            layout.hit_test(Point::new(10.0, 12.0), 0.0),
            Some(HitTarget::Item { copy: 0, index: 0 })
        );
        assert_eq!(
            layout.hit_test(Point::new(190.0, 12.0), 0.0),
            Some(HitTarget::Item { copy: 1, index: 0 })
        );
    }

    #[test]
    fn test_layout_and_hit_test() {
        let (m, _sheet) = marquee(MarqueeConfig::new(items()));
        let layout = m.layout(200.0, |_| 2.0).unwrap();
        assert_eq!(layout.strip_width(), 480.0);
        assert_eq!(layout.items().len(), m.sequence().len());
        assert_eq!(m.offset_at(&layout, Duration::ZERO), 0.0);
        assert_eq!(
            layout.hit_test(Point::new(5.0, 10.0), 0.0),
            Some(HitTarget::Item { copy: 0, index: 0 })
        );
    }
}

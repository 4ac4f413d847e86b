//! Strip geometry
//!
//! The marquee tree is mirrored into a taffy flex tree to measure the strip:
//! a single row sized to max-content, fixed-height items, a constant gap and a
//! trailing padding equal to the gap. With that padding every copy of the
//! item list occupies exactly one period, so `strip_width == copies * period`.
//!
//! The strip scrolls by -50% of its own width per cycle. For an even number
//! of copies that lands on a copy boundary. For odd counts it lands halfway
//! into a copy, which [`MarqueeLayout::wrap_phase`] reports.

use std::time::Duration;

use marquee_core::{Point, PointerEvents, Rect};
use marquee_style::{ScrollRule, TRAVEL_FRACTION};
use marquee_theme::MarqueeTokens;
use taffy::prelude::{NodeId, TaffyTree};
use taffy::style::{
    AlignItems, AvailableSpace, Display, FlexDirection, Overflow, Position, Style,
};
use taffy::style_helpers::{auto, length, percent, zero};
use tracing::trace;

use crate::config::CarouselItem;
use crate::error::{MarqueeError, Result};
use crate::node::EdgeSide;
use crate::sequence::RenderedSequence;

/// Laid-out image in container coordinates, before scrolling
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBox {
    pub copy: usize,
    pub index: usize,
    pub rect: Rect,
}

impl ItemBox {
    pub fn key(&self) -> String {
        format!("{}-{}", self.copy, self.index)
    }
}

/// Laid-out edge overlay
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeBox {
    pub side: EdgeSide,
    pub rect: Rect,
    pub pointer_events: PointerEvents,
}

/// What a pointer lands on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Item { copy: usize, index: usize },
    /// An edge overlay that accepts pointer events
    Edge(EdgeSide),
    /// Inside the marquee but between items
    Container,
}

/// Result of laying out one marquee at a viewport width
#[derive(Clone, Debug)]
pub struct MarqueeLayout {
    container: Rect,
    strip: Rect,
    copies: usize,
    items: Vec<ItemBox>,
    edges: [EdgeBox; 2],
}

struct Nodes {
    container: NodeId,
    wrapper: NodeId,
    strip: NodeId,
    items: Vec<NodeId>,
    edges: [NodeId; 2],
}

fn item_style(width: f32, height: f32) -> Style {
    Style {
        size: taffy::Size {
            width: length(width),
            height: length(height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn edge_style(side: EdgeSide, width: f32) -> Style {
    let (left, right) = match side {
        EdgeSide::Left => (length(0.0), auto()),
        EdgeSide::Right => (auto(), length(0.0)),
    };
    Style {
        position: Position::Absolute,
        inset: taffy::Rect {
            left,
            right,
            top: length(0.0),
            bottom: length(0.0),
        },
        size: taffy::Size {
            width: length(width),
            height: auto(),
        },
        ..Default::default()
    }
}

fn build_tree(
    tree: &mut TaffyTree<()>,
    sequence: RenderedSequence<'_>,
    tokens: &MarqueeTokens,
    viewport_width: f32,
    aspect_ratio: &dyn Fn(&CarouselItem) -> f32,
) -> Result<Nodes> {
    let items = sequence
        .iter()
        .map(|r| {
            let width = tokens.item_width(aspect_ratio(r.item));
            tree.new_leaf(item_style(width, tokens.item_height))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let strip = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            align_items: Some(AlignItems::Center),
            gap: taffy::Size {
                width: length(tokens.gap),
                height: zero(),
            },
            padding: taffy::Rect {
                left: zero(),
                right: length(tokens.gap),
                top: zero(),
                bottom: zero(),
            },
            ..Default::default()
        },
        &items,
    )?;

    let edges = [
        tree.new_leaf(edge_style(EdgeSide::Left, tokens.edge_width))?,
        tree.new_leaf(edge_style(EdgeSide::Right, tokens.edge_width))?,
    ];

    let wrapper = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            position: Position::Relative,
            size: taffy::Size {
                width: percent(1.0),
                height: auto(),
            },
            ..Default::default()
        },
        &[strip, edges[0], edges[1]],
    )?;

    let container = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            overflow: taffy::Point {
                x: Overflow::Hidden,
                y: Overflow::Visible,
            },
            size: taffy::Size {
                width: length(viewport_width),
                height: auto(),
            },
            ..Default::default()
        },
        &[wrapper],
    )?;

    Ok(Nodes {
        container,
        wrapper,
        strip,
        items,
        edges,
    })
}

fn rect_at(tree: &TaffyTree<()>, node: NodeId, origin: Point) -> Result<Rect> {
    let layout = tree.layout(node)?;
    Ok(Rect::new(
        origin.x + layout.location.x,
        origin.y + layout.location.y,
        layout.size.width,
        layout.size.height,
    ))
}

impl MarqueeLayout {
    /// Lay out `sequence` inside a container `viewport_width` pixels wide.
    ///
    /// `aspect_ratio` gives each item's intrinsic width / height; images are
    /// scaled to the token height and capped at the token max width.
    /// `edge_pointer_events` is the pointer policy of the left and right
    /// overlays as rendered.
    pub fn compute(
        sequence: RenderedSequence<'_>,
        tokens: &MarqueeTokens,
        edge_pointer_events: [PointerEvents; 2],
        viewport_width: f32,
        aspect_ratio: impl Fn(&CarouselItem) -> f32,
    ) -> Result<Self> {
        if !viewport_width.is_finite() || viewport_width < 0.0 {
            return Err(MarqueeError::Layout(format!(
                "viewport width must be a non-negative number, got {viewport_width}"
            )));
        }

        let mut tree = TaffyTree::<()>::new();
        tree.disable_rounding();
        let nodes = build_tree(&mut tree, sequence, tokens, viewport_width, &aspect_ratio)?;

        tree.compute_layout(
            nodes.container,
            taffy::Size {
                width: AvailableSpace::Definite(viewport_width),
                height: AvailableSpace::MaxContent,
            },
        )?;

        let container = rect_at(&tree, nodes.container, Point::ZERO)?;
        let wrapper = rect_at(&tree, nodes.wrapper, container.origin)?;
        let strip = rect_at(&tree, nodes.strip, wrapper.origin)?;

        let items = sequence
            .iter()
            .zip(&nodes.items)
            .map(|(r, &node)| {
                Ok(ItemBox {
                    copy: r.copy,
                    index: r.index,
                    rect: rect_at(&tree, node, strip.origin)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let [left_events, right_events] = edge_pointer_events;
        let edge = |side, node, pointer_events| -> Result<EdgeBox> {
            Ok(EdgeBox {
                side,
                rect: rect_at(&tree, node, wrapper.origin)?,
                pointer_events,
            })
        };
        let edges = [
            edge(EdgeSide::Left, nodes.edges[0], left_events)?,
            edge(EdgeSide::Right, nodes.edges[1], right_events)?,
        ];

        trace!(
            viewport = viewport_width,
            strip_width = strip.width(),
            items = items.len(),
            "marquee layout computed"
        );

        Ok(Self {
            container,
            strip,
            copies: sequence.copies(),
            items,
            edges,
        })
    }

    /// Clipping container
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Strip at its unscrolled position
    pub fn strip(&self) -> Rect {
        self.strip
    }

    pub fn strip_width(&self) -> f32 {
        self.strip.width()
    }

    pub fn items(&self) -> &[ItemBox] {
        &self.items
    }

    pub fn edges(&self) -> &[EdgeBox; 2] {
        &self.edges
    }

    /// Width of one copy of the item list, trailing gap included
    pub fn period(&self) -> f32 {
        if self.copies == 0 {
            return 0.0;
        }
        self.strip.width() / self.copies as f32
    }

    /// Distance scrolled over one cycle
    pub fn travel(&self) -> f32 {
        -TRAVEL_FRACTION * self.strip.width()
    }

    /// Whether the strip still reaches the container's right edge at the end
    /// of the cycle, so no empty space ever scrolls into view
    pub fn covers_viewport(&self) -> bool {
        self.strip.width() - self.travel() >= self.container.width()
    }

    /// Where inside a copy the cycle wraps, as a fraction of the period.
    ///
    /// `0.0` means the end of the cycle shows exactly what the start showed.
    pub fn wrap_phase(&self) -> f32 {
        let period = self.period();
        if period <= 0.0 {
            return 0.0;
        }
        let phase = (self.travel() % period) / period;
        // Snap float noise at the boundaries
        if phase < 1e-4 || phase > 1.0 - 1e-4 {
            0.0
        } else {
            phase
        }
    }

    /// Horizontal strip offset in pixels after `elapsed`
    pub fn offset_at(&self, rule: &ScrollRule, elapsed: Duration) -> f32 {
        rule.translate_at(elapsed) * self.strip.width()
    }

    /// Hit test a point in container coordinates with the strip scrolled by
    /// `offset` pixels.
    ///
    /// Children are tested in reverse paint order. Pointer-transparent
    /// overlays are skipped so the item beneath them receives the event.
    pub fn hit_test(&self, point: Point, offset: f32) -> Option<HitTarget> {
        if !self.container.contains(point) {
            return None;
        }

        for edge in self.edges.iter().rev() {
            if edge.pointer_events.is_hit_testable() && edge.rect.contains(point) {
                return Some(HitTarget::Edge(edge.side));
            }
        }

        let hit = self
            .items
            .iter()
            .rev()
            .find(|item| item.rect.translate_x(offset).contains(point))
            .map(|item| HitTarget::Item {
                copy: item.copy,
                index: item.index,
            })
            .unwrap_or(HitTarget::Container);

        trace!(x = point.x, y = point.y, offset, ?hit, "marquee hit test");
        Some(hit)
    }

    /// Item under viewport position `x` (vertically centred on the strip)
    /// after `elapsed`
    pub fn item_at(&self, rule: &ScrollRule, x: f32, elapsed: Duration) -> Option<&ItemBox> {
        let point = Point::new(x, self.strip.y() + self.strip.height() / 2.0);
        if !self.container.contains(point) {
            return None;
        }
        let offset = self.offset_at(rule, elapsed);
        self.items
            .iter()
            .find(|item| item.rect.translate_x(offset).contains(point))
    }
}

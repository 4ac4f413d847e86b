//! Render tree produced by a marquee
//!
//! ```text
//! Container   overflow hidden, full width, caller's container class
//! └─ Wrapper  position relative
//!    ├─ Strip       flex row sized to content, animation class once started
//!    │  └─ Image × (items × copies)
//!    ├─ EdgeFade    left, pointer-events none
//!    └─ EdgeFade    right, pointer-events none
//! ```
//!
//! Hosts either walk the typed tree or take [`Element::to_html`].

use marquee_core::{Brush, PointerEvents};
use marquee_theme::FilterChain;

/// Image loading strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loading {
    /// Load immediately
    Eager,
    /// Defer until near the viewport; never blocks the initial render
    #[default]
    Lazy,
}

impl Loading {
    fn as_attr(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

/// How an image fits its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectFit {
    Cover,
    /// Fit entirely within the box, keeping aspect ratio
    #[default]
    Contain,
}

impl ObjectFit {
    fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
        }
    }
}

/// Which side an edge fade sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Left,
    Right,
}

/// Role of a `div` in the marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivRole {
    Container,
    Wrapper,
    Strip,
    EdgeFade(EdgeSide),
}

/// Block element
#[derive(Debug, Clone, PartialEq)]
pub struct Div {
    pub role: DivRole,
    pub classes: Vec<String>,
    /// Inline style declarations in order
    pub style: Vec<(&'static str, String)>,
    pub background: Option<Brush>,
    pub pointer_events: PointerEvents,
    pub children: Vec<Element>,
}

impl Div {
    pub(crate) fn new(role: DivRole) -> Self {
        Self {
            role,
            classes: Vec::new(),
            style: Vec::new(),
            background: None,
            pointer_events: PointerEvents::Auto,
            children: Vec::new(),
        }
    }

    pub(crate) fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes.extend(
            class
                .as_ref()
                .split_whitespace()
                .map(str::to_string),
        );
        self
    }

    pub(crate) fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub(crate) fn background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    pub(crate) fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = pointer_events;
        self
    }

    pub(crate) fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub(crate) fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Image element
#[derive(Debug, Clone, PartialEq)]
pub struct Img {
    /// Sibling-unique key (`"<copy>-<index>"`)
    pub key: String,
    pub source: String,
    pub alt: String,
    pub classes: Vec<String>,
    pub filter: FilterChain,
    pub loading: Loading,
    pub object_fit: ObjectFit,
    pub height: f32,
    pub max_width: f32,
    pub opacity: f32,
}

/// Node in the marquee tree
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Div(Div),
    Img(Img),
}

impl From<Div> for Element {
    fn from(div: Div) -> Self {
        Element::Div(div)
    }
}

impl From<Img> for Element {
    fn from(img: Img) -> Self {
        Element::Img(img)
    }
}

impl Element {
    pub fn as_div(&self) -> Option<&Div> {
        match self {
            Element::Div(div) => Some(div),
            Element::Img(_) => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Div(div) => &div.children,
            Element::Img(_) => &[],
        }
    }

    /// Depth-first, document-order walk
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }

    /// All images in document order
    pub fn images(&self) -> Vec<&Img> {
        self.walk()
            .into_iter()
            .filter_map(|e| match e {
                Element::Img(img) => Some(img),
                Element::Div(_) => None,
            })
            .collect()
    }

    /// First div with the given role
    pub fn find(&self, role: DivRole) -> Option<&Div> {
        self.walk()
            .into_iter()
            .filter_map(Element::as_div)
            .find(|d| d.role == role)
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Element::Div(div) => {
                let mut style = div.style.clone();
                if let Some(brush) = &div.background {
                    style.push(("background", brush.to_css()));
                }
                if div.pointer_events != PointerEvents::Auto {
                    style.push(("pointer-events", div.pointer_events.as_css().to_string()));
                }
                out.push_str("<div");
                write_attr(out, "class", &div.classes.join(" "));
                write_attr(out, "style", &style_text(&style));
                out.push('>');
                for child in &div.children {
                    child.write_html(out);
                }
                out.push_str("</div>");
            }
            Element::Img(img) => {
                let style = [
                    ("height", format!("{}px", img.height)),
                    ("width", "auto".to_string()),
                    ("max-width", format!("{}px", img.max_width)),
                    ("object-fit", img.object_fit.as_css().to_string()),
                    ("opacity", format!("{}", img.opacity)),
                    ("flex-shrink", "0".to_string()),
                    ("filter", img.filter.to_css()),
                ];
                out.push_str("<img");
                write_attr(out, "data-key", &img.key);
                write_attr(out, "src", &img.source);
                write_attr(out, "alt", &img.alt);
                write_attr(out, "class", &img.classes.join(" "));
                write_attr(out, "style", &style_text(&style));
                write_attr(out, "loading", img.loading.as_attr());
                out.push('>');
            }
        }
    }
}

fn style_text(declarations: &[(&'static str, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    if value.is_empty() && name != "alt" {
        return;
    }
    out.push_str(&format!(
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::Color;

    fn img(key: &str) -> Img {
        Img {
            key: key.to_string(),
            source: "a\".png".to_string(),
            alt: "A & B".to_string(),
            classes: vec!["logo".to_string()],
            filter: FilterChain::new().brightness(0.0).invert(1.0),
            loading: Loading::Lazy,
            object_fit: ObjectFit::Contain,
            height: 24.0,
            max_width: 80.0,
            opacity: 0.6,
        }
    }

    #[test]
    fn test_class_splits_whitespace() {
        let div = Div::new(DivRole::Container).class("  a  b ").class("");
        assert_eq!(div.classes, ["a", "b"]);
    }

    #[test]
    fn test_walk_and_find() {
        let tree: Element = Div::new(DivRole::Container)
            .child(
                Div::new(DivRole::Strip)
                    .children([img("0-0").into(), img("0-1").into()]),
            )
            .into();
        assert_eq!(tree.walk().len(), 4);
        assert_eq!(tree.images().len(), 2);
        assert!(tree.find(DivRole::Strip).is_some());
        assert!(tree.find(DivRole::Wrapper).is_none());
    }

    #[test]
    fn test_img_html_escapes_attributes() {
        let html = Element::from(img("1-0")).to_html();
        assert!(html.starts_with("<img data-key=\"1-0\""));
        assert!(html.contains("src=\"a&quot;.png\""));
        assert!(html.contains("alt=\"A &amp; B\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("filter: brightness(0) invert(100%);"));
        assert!(html.contains("opacity: 0.6;"));
    }

    #[test]
    fn test_div_html_includes_background_and_pointer_policy() {
        let html = Element::from(
            Div::new(DivRole::EdgeFade(EdgeSide::Left))
                .css("position", "absolute")
                .background(Color::BLACK)
                .pointer_events(PointerEvents::None),
        )
        .to_html();
        assert_eq!(
            html,
            "<div style=\"position: absolute; background: #000000; pointer-events: none;\"></div>"
        );
    }

    #[test]
    fn test_empty_alt_is_kept() {
        let mut image = img("0-0");
        image.alt.clear();
        image.classes.clear();
        let html = Element::from(image).to_html();
        assert!(html.contains("alt=\"\""));
        assert!(!html.contains("class="));
    }
}

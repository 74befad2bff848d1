#![forbid(unsafe_code)]

//! Declarative input accepted by the normalizer.
//!
//! Application code builds an [`Element`] tree each frame from its current
//! state. Two container shapes are accepted:
//!
//! - **compact**: `[tag, props?, ...children]`, built with [`Element::compact`]
//!   or the [`hiccup!`](crate::hiccup) macro;
//! - **map**: `{type, props, children}`, built with [`element`].
//!
//! Bare text, numbers and keywords stand for labels. `Null` children are
//! dropped, which makes conditional children (`cond.then(..)`) cheap.

use crate::value::{Props, Value};

/// A loosely structured element description.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Element {
    #[default]
    Null,
    Text(String),
    Number(f64),
    Keyword(String),
    Bool(bool),
    /// A props map; only meaningful as the second item of a compact form.
    Props(Props),
    /// `[tag, props?, ...children]`.
    Compact(Vec<Element>),
    /// `{type, props, children}`.
    Map(ElementMap),
}

impl Element {
    /// Compact form from its items.
    pub fn compact(items: impl IntoIterator<Item = Element>) -> Self {
        Element::Compact(items.into_iter().collect())
    }

    /// Keyword element, typically used as the head of a compact form.
    pub fn keyword(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Element::Keyword(name.strip_prefix(':').unwrap_or(name).to_string())
    }

    /// Short description of the element's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Null => "null",
            Element::Text(_) => "text",
            Element::Number(_) => "number",
            Element::Keyword(_) => "keyword",
            Element::Bool(_) => "bool",
            Element::Props(_) => "props",
            Element::Compact(_) => "compact",
            Element::Map(_) => "map",
        }
    }
}

/// Map-shaped element under construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementMap {
    /// Tag name. `None` is rejected by the normalizer.
    pub ty: Option<String>,
    pub props: Props,
    pub children: Vec<Element>,
}

impl ElementMap {
    /// Set a prop.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Replace all props.
    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// Start a map-shaped element with the given tag.
pub fn element(ty: impl Into<String>) -> ElementMap {
    ElementMap {
        ty: Some(ty.into()),
        ..ElementMap::default()
    }
}

/// Build a compact element: `hiccup!(vstack, props, child, ...)`.
///
/// The first token is the tag name; it is turned into a keyword. Remaining
/// items are any expressions convertible into [`Element`].
#[macro_export]
macro_rules! hiccup {
    ($tag:ident $(, $item:expr)* $(,)?) => {
        $crate::element::Element::compact(vec![
            $crate::element::Element::keyword(stringify!($tag)),
            $($crate::element::Element::from($item)),*
        ])
    };
}

impl From<ElementMap> for Element {
    fn from(map: ElementMap) -> Self {
        Element::Map(map)
    }
}

impl From<Props> for Element {
    fn from(props: Props) -> Self {
        Element::Props(props)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Number(n)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Number(f64::from(n))
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Element::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_props_and_children() {
        let el: Element = element("vstack")
            .prop("gap", 8.0)
            .child("hello")
            .child(None::<Element>)
            .into();
        let Element::Map(map) = el else {
            panic!("expected map form");
        };
        assert_eq!(map.ty.as_deref(), Some("vstack"));
        assert_eq!(map.props.number("gap"), Some(8.0));
        assert_eq!(map.children, vec![Element::Text("hello".into()), Element::Null]);
    }

    #[test]
    fn hiccup_macro_builds_compact_form() {
        let el = crate::hiccup!(label, Props::new().with("font-size", 12.0), "Zoom");
        assert_eq!(
            el,
            Element::Compact(vec![
                Element::Keyword("label".into()),
                Element::Props(Props::new().with("font-size", 12.0)),
                Element::Text("Zoom".into()),
            ])
        );
    }
}

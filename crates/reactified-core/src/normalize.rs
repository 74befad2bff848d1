#![forbid(unsafe_code)]

//! Normalizer: declarative [`Element`] input to canonical [`Node`] trees.
//!
//! # Rules
//!
//! - Text, numbers and keywords become `label` nodes whose `text` is the
//!   stringified value.
//! - A `label` without a `text` prop takes the concatenation of its textual
//!   children, in order. Textual children are never kept as label children.
//! - `Null` children are dropped; a `Null` root is an error.
//! - Dropdown `options` and tabbed-window `tabs` are resolved into
//!   `{value, label}` maps. An entry without a resolvable value is rejected
//!   here rather than at interaction time.
//!
//! The normalizer accepts unknown tag names (they become
//! [`Tag::Other`]); rejecting them is the layout engine's job.

use crate::element::{Element, ElementMap};
use crate::node::{Node, Tag};
use crate::value::{Props, Value};
use std::fmt;

/// Declarative input that cannot be turned into a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// The root element is `Null`.
    NullRoot,
    /// A compact form does not start with a usable tag.
    MissingTag {
        /// Shape of the item found in tag position.
        found: &'static str,
    },
    /// A map form has no `type`.
    MissingType,
    /// An element shape with no node representation.
    UnsupportedElement { kind: &'static str },
    /// An `options`/`tabs` entry lacks a value.
    OptionWithoutValue { prop: &'static str, index: usize },
}

impl fmt::Display for MalformedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullRoot => f.write_str("malformed tree: root element is null"),
            Self::MissingTag { found } => {
                write!(f, "malformed tree: compact form starts with {found}, expected a tag")
            }
            Self::MissingType => f.write_str("malformed tree: map element has no type"),
            Self::UnsupportedElement { kind } => {
                write!(f, "malformed tree: {kind} cannot be used as an element")
            }
            Self::OptionWithoutValue { prop, index } => {
                write!(f, "malformed tree: {prop}[{index}] has no value")
            }
        }
    }
}

impl std::error::Error for MalformedTreeError {}

/// Normalize a declarative element into a canonical node.
pub fn normalize(element: &Element) -> Result<Node, MalformedTreeError> {
    match normalize_child(element) {
        Ok(Some(node)) => Ok(node),
        Ok(None) => {
            crate::debug!("normalize: null root");
            Err(MalformedTreeError::NullRoot)
        }
        Err(err) => {
            crate::debug!(%err, "normalize: rejected element");
            Err(err)
        }
    }
}

/// Normalize one element; `Ok(None)` means the element is dropped.
fn normalize_child(element: &Element) -> Result<Option<Node>, MalformedTreeError> {
    match element {
        Element::Null => Ok(None),
        Element::Text(_) | Element::Number(_) | Element::Keyword(_) => {
            let text = textual(element).unwrap_or_default();
            Ok(Some(Node::new(Tag::Label, Props::new().with("text", text))))
        }
        Element::Compact(items) => normalize_compact(items).map(Some),
        Element::Map(map) => normalize_map(map).map(Some),
        Element::Bool(_) | Element::Props(_) => Err(MalformedTreeError::UnsupportedElement {
            kind: element.kind(),
        }),
    }
}

fn normalize_compact(items: &[Element]) -> Result<Node, MalformedTreeError> {
    let Some((head, rest)) = items.split_first() else {
        return Err(MalformedTreeError::MissingTag { found: "nothing" });
    };
    let tag = match head {
        Element::Keyword(name) | Element::Text(name) => Tag::parse(name),
        _ => None,
    }
    .ok_or(MalformedTreeError::MissingTag { found: head.kind() })?;

    let (props, children) = match rest.split_first() {
        Some((Element::Props(props), children)) => (props.clone(), children),
        _ => (Props::new(), rest),
    };
    build(tag, props, children)
}

fn normalize_map(map: &ElementMap) -> Result<Node, MalformedTreeError> {
    let tag = map
        .ty
        .as_deref()
        .and_then(Tag::parse)
        .ok_or(MalformedTreeError::MissingType)?;
    build(tag, map.props.clone(), &map.children)
}

fn build(tag: Tag, mut props: Props, children: &[Element]) -> Result<Node, MalformedTreeError> {
    let children = if tag == Tag::Label {
        if !props.contains("text") {
            let text: String = children.iter().filter_map(textual).collect();
            props.insert("text", text);
        }
        let rest: Vec<Element> = children
            .iter()
            .filter(|c| textual(c).is_none())
            .cloned()
            .collect();
        normalize_children(&rest)?
    } else {
        normalize_children(children)?
    };

    match tag {
        Tag::Dropdown => resolve_entries(&mut props, "options")?,
        Tag::TabbedWindow => resolve_entries(&mut props, "tabs")?,
        _ => {}
    }

    Ok(Node::new(tag, props).with_children(children))
}

fn normalize_children(children: &[Element]) -> Result<Vec<Node>, MalformedTreeError> {
    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        if let Some(node) = normalize_child(child)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// String form of a text-like element.
fn textual(element: &Element) -> Option<String> {
    match element {
        Element::Text(s) | Element::Keyword(s) => Some(s.clone()),
        Element::Number(n) => Some(Value::Number(*n).display_text()),
        _ => None,
    }
}

/// Rewrite `props[key]` into a list of `{value, label}` maps.
fn resolve_entries(props: &mut Props, key: &'static str) -> Result<(), MalformedTreeError> {
    let Some(entries) = props.list(key) else {
        return Ok(());
    };
    let mut resolved = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        resolved.push(resolve_entry(entry).ok_or(MalformedTreeError::OptionWithoutValue {
            prop: key,
            index,
        })?);
    }
    props.insert(key, Value::List(resolved));
    Ok(())
}

fn resolve_entry(entry: &Value) -> Option<Value> {
    let (value, label) = match entry {
        Value::Str(_) | Value::Keyword(_) | Value::Number(_) | Value::Bool(_) => {
            (entry.clone(), entry.display_text())
        }
        Value::Map(map) => {
            let value = map.get("value").filter(|v| !v.is_nil())?.clone();
            let label = map
                .get("label")
                .map_or_else(|| value.display_text(), Value::display_text);
            (value, label)
        }
        Value::Nil | Value::List(_) => return None,
    };
    Some(Value::map([("value", value), ("label", Value::Str(label))]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::element;
    use crate::hiccup;

    #[test]
    fn null_root_is_rejected() {
        assert_eq!(normalize(&Element::Null), Err(MalformedTreeError::NullRoot));
    }

    #[test]
    fn bare_text_and_numbers_become_labels() {
        let node = normalize(&Element::from("Zoom")).unwrap();
        assert_eq!(node.tag, Tag::Label);
        assert_eq!(node.props.str("text"), Some("Zoom"));

        let node = normalize(&Element::from(1.5)).unwrap();
        assert_eq!(node.props.str("text"), Some("1.5"));
        let node = normalize(&Element::from(42)).unwrap();
        assert_eq!(node.props.str("text"), Some("42"));
    }

    #[test]
    fn compact_form_with_and_without_props() {
        let node = normalize(&hiccup!(vstack, Props::new().with("gap", 8.0), "a", "b")).unwrap();
        assert_eq!(node.tag, Tag::VStack);
        assert_eq!(node.props.number("gap"), Some(8.0));
        assert_eq!(node.children.len(), 2);

        let node = normalize(&hiccup!(hstack, "a")).unwrap();
        assert!(node.props.is_empty());
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn compact_form_needs_a_tag() {
        let err = normalize(&Element::compact([Element::from(3.0), Element::from("x")])).unwrap_err();
        assert_eq!(err, MalformedTreeError::MissingTag { found: "number" });
        let err = normalize(&Element::compact([])).unwrap_err();
        assert_eq!(err, MalformedTreeError::MissingTag { found: "nothing" });
    }

    #[test]
    fn map_form_needs_a_type() {
        let map = ElementMap::default().child("x");
        assert_eq!(normalize(&Element::Map(map)), Err(MalformedTreeError::MissingType));
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        assert_eq!(
            normalize(&Element::Bool(true)),
            Err(MalformedTreeError::UnsupportedElement { kind: "bool" })
        );
        let nested = element("vstack").child(Element::Props(Props::new()));
        assert_eq!(
            normalize(&nested.into()),
            Err(MalformedTreeError::UnsupportedElement { kind: "props" })
        );
    }

    #[test]
    fn null_children_are_dropped() {
        let show_extra = false;
        let el = element("vstack")
            .child("always")
            .child(show_extra.then_some("extra"));
        let node = normalize(&el.into()).unwrap();
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn label_merges_textual_children_when_text_absent() {
        let node = normalize(&hiccup!(label, "Zoom: ", 2, "x")).unwrap();
        assert_eq!(node.props.str("text"), Some("Zoom: 2x"));
        assert!(node.children.is_empty());

        let node = normalize(&hiccup!(label, Props::new().with("text", "fixed"), "ignored")).unwrap();
        assert_eq!(node.props.str("text"), Some("fixed"));
    }

    #[test]
    fn unknown_tags_pass_through() {
        let node = normalize(&element("bogus").child("x").into()).unwrap();
        assert_eq!(node.tag, Tag::Other("bogus".into()));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn dropdown_options_are_resolved() {
        let options = Value::List(vec![
            Value::from("low"),
            Value::map([("value", Value::from(2.0)), ("label", Value::from("Medium"))]),
            Value::map([("value", Value::keyword("high"))]),
        ]);
        let node = normalize(&element("dropdown").prop("options", options).into()).unwrap();
        let resolved = node.props.list("options").unwrap();
        assert_eq!(resolved[0].get("label"), Some(&Value::from("low")));
        assert_eq!(resolved[1].get("value"), Some(&Value::from(2.0)));
        assert_eq!(resolved[1].get("label"), Some(&Value::from("Medium")));
        assert_eq!(resolved[2].get("label"), Some(&Value::from("high")));
    }

    #[test]
    fn option_without_value_is_a_construction_error() {
        let options = Value::List(vec![
            Value::from("ok"),
            Value::map([("label", Value::from("no value"))]),
        ]);
        let err = normalize(&element("dropdown").prop("options", options).into()).unwrap_err();
        assert_eq!(
            err,
            MalformedTreeError::OptionWithoutValue {
                prop: "options",
                index: 1
            }
        );
    }
}

#![forbid(unsafe_code)]

//! Canonical node tree.
//!
//! A [`Node`] is what the normalizer produces: a closed [`Tag`], its props
//! and normalized children. Trees are rebuilt from application state every
//! frame, so the only cross-frame identity is structural: a [`NodePath`]
//! of child indices from the root.

use crate::value::Props;
use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;

bitflags! {
    /// Static capabilities of a primitive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagFlags: u8 {
        /// Lays out child nodes.
        const CONTAINER   = 0b0000_0001;
        /// Valid hit-test target.
        const INTERACTIVE = 0b0000_0010;
        /// Clips children to a content rectangle when painting.
        const CLIPS       = 0b0000_0100;
        /// Has a title bar with minimize/resize controls.
        const WINDOWED    = 0b0000_1000;
    }
}

/// Primitive kind of a node.
///
/// The set is closed; [`Tag::Other`] carries any unrecognized name so that
/// downstream stages can decide how strict to be (layout rejects it,
/// planning treats it as a transparent container).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    VStack,
    HStack,
    Label,
    Button,
    Slider,
    Dropdown,
    Window,
    TabbedWindow,
    Minimap,
    BarChart,
    Other(String),
}

impl Tag {
    /// Every known primitive, in declaration order.
    pub const KNOWN: [Tag; 10] = [
        Tag::VStack,
        Tag::HStack,
        Tag::Label,
        Tag::Button,
        Tag::Slider,
        Tag::Dropdown,
        Tag::Window,
        Tag::TabbedWindow,
        Tag::Minimap,
        Tag::BarChart,
    ];

    /// Parse a tag name. A leading `:` is accepted (`:vstack`).
    ///
    /// Unknown names become [`Tag::Other`]; only empty names are rejected.
    pub fn parse(name: &str) -> Option<Tag> {
        let name = name.strip_prefix(':').unwrap_or(name);
        if name.is_empty() {
            return None;
        }
        Some(
            Tag::KNOWN
                .into_iter()
                .find(|tag| tag.name() == name)
                .unwrap_or_else(|| Tag::Other(name.to_string())),
        )
    }

    /// Canonical kebab-case name.
    pub fn name(&self) -> &str {
        match self {
            Tag::VStack => "vstack",
            Tag::HStack => "hstack",
            Tag::Label => "label",
            Tag::Button => "button",
            Tag::Slider => "slider",
            Tag::Dropdown => "dropdown",
            Tag::Window => "window",
            Tag::TabbedWindow => "tabbed-window",
            Tag::Minimap => "minimap",
            Tag::BarChart => "bar-chart",
            Tag::Other(name) => name,
        }
    }

    pub fn flags(&self) -> TagFlags {
        match self {
            Tag::VStack | Tag::HStack => TagFlags::CONTAINER,
            Tag::Label | Tag::BarChart => TagFlags::empty(),
            Tag::Button | Tag::Slider | Tag::Dropdown => TagFlags::INTERACTIVE,
            Tag::Minimap => TagFlags::INTERACTIVE | TagFlags::CLIPS,
            Tag::Window | Tag::TabbedWindow => TagFlags::all(),
            Tag::Other(_) => TagFlags::CONTAINER,
        }
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.flags().contains(TagFlags::INTERACTIVE)
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Tag::Other(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized UI element for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub props: Props,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node.
    pub fn new(tag: Tag, props: Props) -> Self {
        Self {
            tag,
            props,
            children: Vec::new(),
        }
    }

    /// Attach children (builder-style).
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// Child-index path from the root to a node.
///
/// The root has the empty path. Paths are how interaction state refers to
/// a node across frames, since trees carry no other identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(SmallVec<[u16; 8]>);

impl NodePath {
    /// Path of the root node.
    #[inline]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Path of the `index`-th child of `self`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(u16::try_from(index).unwrap_or(u16::MAX));
        Self(path)
    }

    /// Indices from the root, outermost first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&i| usize::from(i))
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for (i, idx) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(indices: [usize; N]) -> Self {
        indices
            .into_iter()
            .fold(NodePath::root(), |path, i| path.child(i))
    }
}

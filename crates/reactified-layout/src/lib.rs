#![forbid(unsafe_code)]

//! Layout engine: normalized [`Node`] trees to [`LaidOutNode`] trees with
//! resolved pixel bounds.
//!
//! [`layout`] dispatches on the node's [`Tag`]; each primitive has its own
//! sizing rule:
//!
//! - [`stack`] - `vstack`/`hstack` sequential flow with padding and gap
//! - [`controls`] - `label`, `button`, `slider`, `dropdown`
//! - [`window`] - `window`/`tabbed-window` chrome and content area
//! - [`charts`] - `minimap`, `bar-chart` leaves
//!
//! # Invariants
//!
//! 1. Layout is pure: the same `(node, context)` always yields the same tree.
//! 2. For every container, each child's bounds lie within the container's
//!    content rectangle (bounds minus resolved padding). Overflowing
//!    children are clamped geometrically rather than reported.
//! 3. Unknown primitives fail fast with [`UnknownPrimitiveError`].

pub mod charts;
pub mod controls;
pub mod defaults;
pub mod error;
pub mod padding;
pub mod stack;
pub mod tree;
pub mod window;

pub use error::UnknownPrimitiveError;
pub use reactified_core::geometry::{Point, Rect, Sides};
pub use tree::{
    DropdownGeometry, Geometry, LaidOutNode, Layout, MinimapGeometry, OptionRow, SliderGeometry,
    TabGeometry, WindowGeometry,
};

use reactified_core::node::{Node, Tag};

/// Inputs every layout function resolves against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// The full drawing surface.
    pub viewport: Rect,
    /// Rectangle the node should resolve itself against; explicit props
    /// override its fields.
    pub bounds: Rect,
}

impl LayoutContext {
    /// Context for the root node: bounds equal the viewport.
    #[must_use]
    pub const fn root(viewport: Rect) -> Self {
        Self {
            viewport,
            bounds: viewport,
        }
    }

    /// Same viewport, new bounds.
    #[must_use]
    pub const fn with_bounds(&self, bounds: Rect) -> Self {
        Self {
            viewport: self.viewport,
            bounds,
        }
    }
}

/// Result alias for layout functions.
pub type LayoutResult = Result<LaidOutNode, UnknownPrimitiveError>;

/// Lay out `node` and its subtree.
pub fn layout(node: &Node, ctx: &LayoutContext) -> LayoutResult {
    match &node.tag {
        Tag::VStack => stack::layout_vstack(node, ctx),
        Tag::HStack => stack::layout_hstack(node, ctx),
        Tag::Label => Ok(controls::layout_label(node, ctx)),
        Tag::Button => Ok(controls::layout_button(node, ctx)),
        Tag::Slider => Ok(controls::layout_slider(node, ctx)),
        Tag::Dropdown => Ok(controls::layout_dropdown(node, ctx)),
        Tag::Window | Tag::TabbedWindow => window::layout_window(node, ctx),
        Tag::Minimap => Ok(charts::layout_minimap(node, ctx)),
        Tag::BarChart => Ok(charts::layout_bar_chart(node, ctx)),
        Tag::Other(name) => {
            reactified_core::error!(tag = %name, "no layout handler registered");
            Err(UnknownPrimitiveError::new(name.clone()))
        }
    }
}

/// Lay out a whole tree against `viewport`.
pub fn layout_root(node: &Node, viewport: Rect) -> LayoutResult {
    let _span = reactified_core::debug_span!("layout", nodes = node.count()).entered();
    layout(node, &LayoutContext::root(viewport))
}


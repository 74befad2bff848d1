#![forbid(unsafe_code)]

//! `window` / `tabbed-window` layout.
//!
//! ```text
//! +--------------------------------------+
//! | Title  [tab][tab][tab]          [_]  |  header (header-height)
//! +--------------------------------------+
//! |  content (inset by content-padding)  |
//! |                                      |
//! |                                   [/]|  resize handle
//! +--------------------------------------+
//! ```
//!
//! # Invariants
//!
//! - A minimized window is exactly header-height tall and lays out no
//!   children. Its [`WindowGeometry::expanded_height`] still reports the
//!   height it returns to, which comes from props, so minimizing is
//!   reversible without any layout state.
//! - The resize handle exists only for resizable, non-minimized windows.
//! - The active tab is read from the `active` prop, never stored.

use crate::controls::{entries, positive_or};
use crate::defaults::{
    FONT_SIZE, MINIMIZE_BUTTON_INSET, RESIZE_HANDLE_SIZE, TAB_FONT_SIZE, TAB_GAP, TAB_PADDING,
    TITLE_INSET, WINDOW_CONTENT_PADDING, WINDOW_HEADER_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::padding::{explicit_height, explicit_width, resolve_gap, resolve_origin};
use crate::stack::{contain_children, flow_vertical};
use crate::tree::{Geometry, LaidOutNode, Layout, TabGeometry, WindowGeometry};
use crate::{LayoutContext, LayoutResult};
use reactified_core::geometry::{Rect, Sides};
use reactified_core::node::{Node, Tag};
use reactified_core::text::estimate_width;
use reactified_core::value::Props;

/// Lay out a window and, unless minimized, its children.
pub fn layout_window(node: &Node, ctx: &LayoutContext) -> LayoutResult {
    let props = &node.props;
    let (x, y) = resolve_origin(props, ctx);
    let width = explicit_width(props).unwrap_or(WINDOW_WIDTH);
    let header_height = positive_or(props, "header-height", WINDOW_HEADER_HEIGHT);
    let expanded_height = explicit_height(props)
        .unwrap_or(WINDOW_HEIGHT)
        .max(header_height);
    let minimized = props.flag("minimized?", false);
    let height = if minimized { header_height } else { expanded_height };

    let bounds = Rect::new(x, y, width, height);
    let header = Rect::new(x, y, width, header_height);
    let button = (header_height - 2.0 * MINIMIZE_BUTTON_INSET).max(0.0);
    let minimize_button = Rect::new(
        header.right() - MINIMIZE_BUTTON_INSET - button,
        y + MINIMIZE_BUTTON_INSET,
        button,
        button,
    );
    let resize_handle = (props.flag("resizable?", true) && !minimized).then(|| {
        Rect::new(
            bounds.right() - RESIZE_HANDLE_SIZE,
            bounds.bottom() - RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
        )
    });
    let content = if minimized {
        Rect::new(x, header.bottom(), width, 0.0)
    } else {
        let padding = props
            .number_or("content-padding", WINDOW_CONTENT_PADDING)
            .max(0.0);
        Rect::new(x, header.bottom(), width, height - header_height).inner(Sides::all(padding))
    };

    let (tabs, active_tab) = if node.tag == Tag::TabbedWindow {
        layout_tabs(props, &header, minimize_button.x)
    } else {
        (Vec::new(), None)
    };

    let children = if minimized {
        Vec::new()
    } else {
        let (mut children, _) = flow_vertical(node, ctx, content, resolve_gap(props))?;
        contain_children(&mut children, &content);
        children
    };

    Ok(LaidOutNode {
        tag: node.tag.clone(),
        props: props.clone(),
        layout: Layout {
            bounds,
            geometry: Geometry::Window(WindowGeometry {
                header,
                minimize_button,
                resize_handle,
                content,
                minimized,
                expanded_height,
                tabs,
                active_tab,
            }),
        },
        children,
    })
}

/// Tabs run left to right after the title, stopping short of `limit`.
fn layout_tabs(props: &Props, header: &Rect, limit: f64) -> (Vec<TabGeometry>, Option<usize>) {
    let title = props.str("title").unwrap_or_default();
    let mut cursor = header.x + TITLE_INSET;
    if !title.is_empty() {
        cursor += estimate_width(title, FONT_SIZE) + TITLE_INSET;
    }
    let top = header.y + 6.0_f64.min(header.height);
    let height = (header.bottom() - top).max(0.0);

    let mut tabs = Vec::new();
    for (value, label) in entries(props, "tabs") {
        let width = estimate_width(&label, TAB_FONT_SIZE) + TAB_PADDING;
        let bounds = Rect::new(cursor, top, width.min((limit - cursor).max(0.0)), height);
        cursor += width + TAB_GAP;
        tabs.push(TabGeometry {
            value,
            label,
            bounds,
        });
    }

    let active = props.get("active").filter(|v| !v.is_nil());
    let active_tab = active
        .and_then(|active| tabs.iter().position(|tab| &tab.value == active))
        .or(if tabs.is_empty() { None } else { Some(0) });
    (tabs, active_tab)
}

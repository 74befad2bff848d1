#![forbid(unsafe_code)]

//! Window and tabbed-window painter.
//!
//! Paint order: body, header, title, tabs, minimize button, resize
//! handle, then children. Children are wrapped in `save` / `clip-rect` /
//! `restore` so they cannot paint outside the content area, unless the
//! window is minimized or its content area is empty.

use crate::planner::{BASELINE_FACTOR, Planner};
use crate::theme::{ControlState, prop_color};
use reactified_core::event::GestureTag;
use reactified_core::geometry::Point;
use reactified_core::node::NodePath;
use reactified_layout::defaults::{FONT_SIZE, TAB_FONT_SIZE, TITLE_INSET};
use reactified_layout::{Geometry, LaidOutNode};
use reactified_render::{Draw, DrawCommand};

/// Inset of the minimize glyph inside its button.
const GLYPH_INSET: f64 = 5.0;

pub(crate) fn paint_window(p: &mut Planner<'_>, node: &LaidOutNode, path: &NodePath) {
    let Geometry::Window(chrome) = &node.layout.geometry else {
        p.children(node, path);
        return;
    };
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let bounds = node.bounds();

    let body = prop_color(&node.props, "background").unwrap_or(theme.surface);
    p.out.panel(bounds, body, theme.border);

    let header_state = ControlState::resolve(
        ctx.active_on(path, GestureTag::WindowMove).is_some()
            || ctx.active_on(path, GestureTag::WindowResize).is_some(),
        ctx.hovered(&chrome.header),
    );
    p.out.fill_rect(chrome.header, theme.header.pick(header_state));

    if let Some(title) = node.props.str("title").filter(|t| !t.is_empty()) {
        let baseline = chrome.header.center().y + FONT_SIZE * BASELINE_FACTOR;
        p.out.text(
            title,
            Point::new(chrome.header.x + TITLE_INSET, baseline),
            FONT_SIZE,
            theme.text,
        );
    }

    for (i, tab) in chrome.tabs.iter().enumerate() {
        let state = ctx.indexed_state(path, GestureTag::TabClick, i, &tab.bounds);
        let fill = if chrome.active_tab == Some(i) && state == ControlState::Normal {
            body
        } else {
            theme.control.pick(state)
        };
        let text = if chrome.active_tab == Some(i) {
            theme.text
        } else {
            theme.text_muted
        };
        p.out.fill_rect(tab.bounds, fill);
        p.centered_text(&tab.label, &tab.bounds, TAB_FONT_SIZE, text);
    }

    let button = chrome.minimize_button;
    if !button.is_empty() {
        let state = ctx.state(path, GestureTag::WindowMinimize, &button);
        p.out.panel(button, theme.control.pick(state), theme.border);
        let mid = button.center();
        let half = (button.width / 2.0 - GLYPH_INSET).max(1.0);
        p.out.line(
            Point::new(mid.x - half, mid.y),
            Point::new(mid.x + half, mid.y),
            theme.text,
            1.5,
        );
        if chrome.minimized {
            p.out.line(
                Point::new(mid.x, mid.y - half),
                Point::new(mid.x, mid.y + half),
                theme.text,
                1.5,
            );
        }
    }

    if let Some(handle) = chrome.resize_handle {
        let state = ctx.state(path, GestureTag::WindowResize, &handle);
        let color = match state {
            ControlState::Normal => theme.border,
            other => theme.handle.pick(other),
        };
        p.out.fill_polygon(
            [
                Point::new(handle.x, handle.bottom()),
                Point::new(handle.right(), handle.y),
                Point::new(handle.right(), handle.bottom()),
            ],
            color,
        );
    }

    if chrome.minimized || chrome.content.is_empty() {
        p.children(node, path);
    } else {
        p.out.save();
        p.out.push(DrawCommand::ClipRect {
            bounds: chrome.content,
        });
        p.children(node, path);
        p.out.restore();
    }
}

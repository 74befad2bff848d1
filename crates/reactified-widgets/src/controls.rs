#![forbid(unsafe_code)]

//! Painters for `label`, `button`, `slider` and the dropdown header.

use crate::overlay::{DropdownOverlay, Overlay, OverlayRow};
use crate::planner::Planner;
use crate::theme::{ControlState, prop_color};
use reactified_core::event::GestureTag;
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::NodePath;
use reactified_core::value::Value;
use reactified_layout::defaults::FONT_SIZE;
use reactified_layout::{DropdownGeometry, Geometry, LaidOutNode};
use reactified_render::{Draw, ShapeStyle};

/// Half-width of the dropdown caret.
const CARET: f64 = 5.0;
const CARET_INSET: f64 = 16.0;
const HEADER_TEXT_INSET: f64 = 10.0;

fn font_size(node: &LaidOutNode) -> f64 {
    node.props
        .number("font-size")
        .filter(|s| *s > 0.0)
        .unwrap_or(FONT_SIZE)
}

fn text_of(node: &LaidOutNode) -> String {
    node.props
        .get("text")
        .map(Value::display_text)
        .unwrap_or_default()
}

/// One `text` command at the label's baseline.
pub(crate) fn paint_label(p: &mut Planner<'_>, node: &LaidOutNode) {
    let text = text_of(node);
    if text.is_empty() {
        return;
    }
    let (size, baseline) = match node.layout.geometry {
        Geometry::Label {
            font_size,
            baseline,
        } => (font_size, baseline),
        _ => {
            let b = node.bounds();
            (font_size(node), Point::new(b.x, b.y + font_size(node)))
        }
    };
    let color = prop_color(&node.props, "color").unwrap_or(p.ctx.theme.text);
    p.out.text(text, baseline, size, color);
}

pub(crate) fn paint_button(p: &mut Planner<'_>, node: &LaidOutNode, path: &NodePath) {
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let bounds = node.bounds();
    let disabled = node.props.flag("disabled?", false);
    let state = if disabled {
        ControlState::Normal
    } else {
        ctx.state(path, GestureTag::ButtonPress, &bounds)
    };
    let fill = theme.control.or_background(&node.props).pick(state);
    let text_color = if disabled {
        theme.text_muted
    } else {
        prop_color(&node.props, "color").unwrap_or(theme.text)
    };
    let border = theme.border;
    p.out.panel(bounds, fill, border);
    p.centered_text(&text_of(node), &bounds, font_size(node), text_color);
}

pub(crate) fn paint_slider(p: &mut Planner<'_>, node: &LaidOutNode, path: &NodePath) {
    let Geometry::Slider(slider) = &node.layout.geometry else {
        return;
    };
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let radius = slider.handle_radius;
    let grip = Rect::new(
        slider.handle.x - radius,
        slider.handle.y - radius,
        2.0 * radius,
        2.0 * radius,
    );
    let state = ControlState::resolve(
        ctx.active_on(path, GestureTag::Slider).is_some(),
        ctx.hovered(&grip),
    );
    let (track, accent, handle, border) = (
        theme.track,
        prop_color(&node.props, "color").unwrap_or(theme.accent),
        theme.handle.pick(state),
        theme.border,
    );

    p.out.fill_rect(slider.track, track);
    let filled = slider.track.with_size(slider.handle.x - slider.track.x, slider.track.height);
    if filled.width > 0.0 {
        p.out.fill_rect(filled, accent);
    }
    p.out.circle(
        slider.handle,
        radius,
        ShapeStyle::fill(handle).with_stroke(border, 1.0),
    );
}

/// Header inline, option rows as an overlay.
pub(crate) fn paint_dropdown(p: &mut Planner<'_>, node: &LaidOutNode, path: &NodePath) {
    let Geometry::Dropdown(dropdown) = &node.layout.geometry else {
        return;
    };
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let header = dropdown.header;
    let state = ctx.state(path, GestureTag::Dropdown, &header);
    let fill = theme.control.or_background(&node.props).pick(state);
    let border = theme.border;
    let (text, text_color) = match selected_label(node, dropdown) {
        Some(label) => (label, theme.text),
        None => (
            node.props.str("placeholder").unwrap_or_default().to_string(),
            theme.text_muted,
        ),
    };
    let caret_color = theme.text_muted;

    p.out.panel(header, fill, border);
    let size = font_size(node);
    if !text.is_empty() {
        let baseline = header.center().y + size * crate::planner::BASELINE_FACTOR;
        p.out
            .text(text, Point::new(header.x + HEADER_TEXT_INSET, baseline), size, text_color);
    }
    let tip = Point::new(header.right() - CARET_INSET, header.center().y);
    let caret = if dropdown.expanded {
        [
            Point::new(tip.x - CARET, tip.y + CARET / 2.0),
            Point::new(tip.x + CARET, tip.y + CARET / 2.0),
            Point::new(tip.x, tip.y - CARET / 2.0),
        ]
    } else {
        [
            Point::new(tip.x - CARET, tip.y - CARET / 2.0),
            Point::new(tip.x + CARET, tip.y - CARET / 2.0),
            Point::new(tip.x, tip.y + CARET / 2.0),
        ]
    };
    p.out.fill_polygon(caret, caret_color);

    if dropdown.expanded && !dropdown.options.is_empty() {
        let overlay = options_overlay(p, node, path, dropdown, size);
        p.overlays.push(Overlay::DropdownOptions(overlay));
    }
}

/// Label of the option matching the dropdown's value.
fn selected_label(node: &LaidOutNode, dropdown: &DropdownGeometry) -> Option<String> {
    let entry = node.props.list("options")?.get(dropdown.selected?)?;
    Some(
        entry
            .get("label")
            .map_or_else(|| entry.display_text(), Value::display_text),
    )
}

fn options_overlay(
    p: &Planner<'_>,
    node: &LaidOutNode,
    path: &NodePath,
    dropdown: &DropdownGeometry,
    font_size: f64,
) -> DropdownOverlay {
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let rows = dropdown
        .options
        .iter()
        .enumerate()
        .map(|(i, row)| OverlayRow {
            value: row.value.clone(),
            label: row.label.clone(),
            bounds: row.bounds,
            state: ctx.row_state(path, i, &row.bounds),
        })
        .collect();
    DropdownOverlay {
        path: path.clone(),
        rows,
        selected: dropdown.selected,
        colors: theme.option,
        selected_color: theme.selected,
        text: prop_color(&node.props, "color").unwrap_or(theme.text),
        border: theme.border,
        font_size,
    }
}

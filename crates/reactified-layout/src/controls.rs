#![forbid(unsafe_code)]

//! Leaf controls: `label`, `button`, `slider`, `dropdown`.

use crate::LayoutContext;
use crate::defaults::{
    BUTTON_HEIGHT, DROPDOWN_HEADER_HEIGHT, DROPDOWN_OPTION_GAP, DROPDOWN_OPTION_HEIGHT, FONT_SIZE,
    LABEL_LINE_PADDING, SLIDER_HEIGHT, SLIDER_STEP, SLIDER_TRACK_PADDING,
};
use crate::padding::{explicit_height, explicit_width, resolve_fixed_height, resolve_origin};
use crate::tree::{DropdownGeometry, Geometry, LaidOutNode, OptionRow, SliderGeometry, snap_value};
use reactified_core::geometry::{EPSILON, Point, Rect};
use reactified_core::node::Node;
use reactified_core::text::estimate_width;
use reactified_core::value::{Props, Value};

/// Positive number under `key`, or `default`.
pub(crate) fn positive_or(props: &Props, key: &str, default: f64) -> f64 {
    props.number(key).filter(|v| *v > 0.0).unwrap_or(default)
}

/// `(value, label)` pairs from a resolved `options`/`tabs` list.
///
/// Bare values are accepted too and label themselves.
pub(crate) fn entries(props: &Props, key: &str) -> Vec<(Value, String)> {
    props
        .list(key)
        .unwrap_or_default()
        .iter()
        .map(|entry| {
            let value = entry.get("value").cloned().unwrap_or_else(|| entry.clone());
            let label = entry
                .get("label")
                .map_or_else(|| value.display_text(), Value::display_text);
            (value, label)
        })
        .collect()
}

/// Lay out a `label`.
///
/// Height is `font-size + line-padding`; width is the larger of the
/// explicit width and the estimated text width.
pub fn layout_label(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let props = &node.props;
    let font_size = positive_or(props, "font-size", FONT_SIZE);
    let text = props.get("text").map(Value::display_text).unwrap_or_default();
    let (x, y) = resolve_origin(props, ctx);
    let line_padding = props.number_or("line-padding", LABEL_LINE_PADDING).max(0.0);
    let height = explicit_height(props).unwrap_or(font_size + line_padding);
    let width = explicit_width(props)
        .unwrap_or(0.0)
        .max(estimate_width(&text, font_size));
    LaidOutNode::leaf(
        node.tag.clone(),
        props.clone(),
        Rect::new(x, y, width, height),
        Geometry::Label {
            font_size,
            baseline: Point::new(x, y + font_size),
        },
    )
}

/// Lay out a `button`: context width, 36 high unless told otherwise.
pub fn layout_button(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let bounds = resolve_fixed_height(&node.props, ctx, BUTTON_HEIGHT);
    LaidOutNode::leaf(node.tag.clone(), node.props.clone(), bounds, Geometry::None)
}

/// Lay out a `slider`.
pub fn layout_slider(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let props = &node.props;
    let bounds = resolve_fixed_height(props, ctx, SLIDER_HEIGHT);

    let (mut min, mut max) = (props.number_or("min", 0.0), props.number_or("max", 1.0));
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let step = positive_or(props, "step", SLIDER_STEP);
    let value = snap_value(props.number_or("value", min), min, max, step);
    let ratio = ((value - min) / (max - min).max(EPSILON)).clamp(0.0, 1.0);

    let mut slider = SliderGeometry {
        min,
        max,
        step,
        value,
        ratio,
        track: Rect::default(),
        handle: bounds.center(),
        handle_radius: 0.0,
    };
    slider.fit(&bounds, props.number_or("track-padding", SLIDER_TRACK_PADDING));

    LaidOutNode::leaf(node.tag.clone(), props.clone(), bounds, Geometry::Slider(slider))
}

/// Lay out a `dropdown`.
///
/// Collapsed, the dropdown is just its header. Expanded, option rows stack
/// below the header and the bounds grow to cover them.
pub fn layout_dropdown(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let props = &node.props;
    let (x, y) = resolve_origin(props, ctx);
    let width = explicit_width(props).unwrap_or(ctx.bounds.width.max(0.0));
    let header = Rect::new(x, y, width, positive_or(props, "header-height", DROPDOWN_HEADER_HEIGHT));
    let expanded = props.flag("expanded?", false);
    let option_height = positive_or(props, "option-height", DROPDOWN_OPTION_HEIGHT);
    let option_gap = props.number_or("option-gap", DROPDOWN_OPTION_GAP).max(0.0);

    let all = entries(props, "options");
    let selected = props
        .get("value")
        .filter(|v| !v.is_nil())
        .and_then(|current| all.iter().position(|(value, _)| value == current));

    let options: Vec<OptionRow> = if expanded {
        all.into_iter()
            .enumerate()
            .map(|(i, (value, label))| OptionRow {
                value,
                label,
                bounds: Rect::new(
                    x,
                    header.bottom() + option_gap + i as f64 * (option_height + option_gap),
                    width,
                    option_height,
                ),
            })
            .collect()
    } else {
        Vec::new()
    };
    let height = header.height + options.len() as f64 * (option_height + option_gap);

    LaidOutNode::leaf(
        node.tag.clone(),
        props.clone(),
        Rect::new(x, y, width, height),
        Geometry::Dropdown(DropdownGeometry {
            header,
            expanded,
            options,
            selected,
        }),
    )
}

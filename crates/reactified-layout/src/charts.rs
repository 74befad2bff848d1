#![forbid(unsafe_code)]

//! Leaf visualizations: `minimap` and `bar-chart`.
//!
//! Both take explicit `width`/`height` or fall back to fixed defaults; the
//! context size is not used, so they never stretch.

use crate::LayoutContext;
use crate::defaults::{
    BAR_CHART_HEIGHT, BAR_CHART_PADDING, BAR_CHART_WIDTH, BAR_GAP, BAR_LABEL_HEIGHT,
    MINIMAP_HEIGHT, MINIMAP_WIDTH,
};
use crate::padding::{explicit_height, explicit_width, resolve_origin};
use crate::tree::{Geometry, LaidOutNode, MinimapGeometry};
use reactified_core::geometry::{Rect, Sides};
use reactified_core::node::Node;
use reactified_core::value::{Props, Value};

fn leaf_bounds(props: &Props, ctx: &LayoutContext, width: f64, height: f64) -> Rect {
    let (x, y) = resolve_origin(props, ctx);
    Rect::new(
        x,
        y,
        explicit_width(props).unwrap_or(width),
        explicit_height(props).unwrap_or(height),
    )
}

/// Lay out a `minimap`.
///
/// `world-width`/`world-height` default to the minimap's own size.
pub fn layout_minimap(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let props = &node.props;
    let bounds = leaf_bounds(props, ctx, MINIMAP_WIDTH, MINIMAP_HEIGHT);
    let world = |key: &str, fallback: f64| props.number(key).filter(|v| *v > 0.0).unwrap_or(fallback);
    let geometry = MinimapGeometry {
        world_width: world("world-width", bounds.width),
        world_height: world("world-height", bounds.height),
    };
    LaidOutNode::leaf(node.tag.clone(), props.clone(), bounds, Geometry::Minimap(geometry))
}

/// Lay out a `bar-chart`, computing one bar per entry of `values`.
///
/// Bars share the plot width evenly with a fixed gap and scale against
/// `max` (or the largest value). Non-numeric values draw as empty bars.
pub fn layout_bar_chart(node: &Node, ctx: &LayoutContext) -> LaidOutNode {
    let props = &node.props;
    let bounds = leaf_bounds(props, ctx, BAR_CHART_WIDTH, BAR_CHART_HEIGHT);
    let values: Vec<f64> = props
        .list("values")
        .unwrap_or_default()
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0).max(0.0))
        .collect();

    let label_room = if props.list("labels").is_some_and(|l| !l.is_empty()) {
        BAR_LABEL_HEIGHT
    } else {
        0.0
    };
    let plot = bounds.inner(Sides::new(
        BAR_CHART_PADDING,
        BAR_CHART_PADDING,
        BAR_CHART_PADDING + label_room,
        BAR_CHART_PADDING,
    ));

    let peak = props
        .number("max")
        .filter(|m| *m > 0.0)
        .unwrap_or_else(|| values.iter().copied().fold(0.0, f64::max));
    let count = values.len() as f64;
    let bar_width = if values.is_empty() {
        0.0
    } else {
        ((plot.width - BAR_GAP * (count - 1.0)) / count).max(0.0)
    };

    let bars = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ratio = if peak > 0.0 { (value / peak).min(1.0) } else { 0.0 };
            let height = plot.height * ratio;
            Rect::new(
                plot.x + i as f64 * (bar_width + BAR_GAP),
                plot.bottom() - height,
                bar_width,
                height,
            )
            .clamp_within(&plot)
        })
        .collect();

    LaidOutNode::leaf(node.tag.clone(), props.clone(), bounds, Geometry::Chart { bars })
}

/// Labels for a bar chart, one per bar where given.
pub fn bar_labels(props: &Props) -> Vec<String> {
    props
        .list("labels")
        .unwrap_or_default()
        .iter()
        .map(Value::display_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactified_core::geometry::Point;
    use reactified_core::node::Tag;

    fn ctx() -> LayoutContext {
        LayoutContext::root(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn minimap_uses_defaults_not_context() {
        let laid = layout_minimap(&Node::new(Tag::Minimap, Props::new()), &ctx());
        assert_eq!(laid.bounds(), Rect::new(0.0, 0.0, 160.0, 160.0));
        assert!(laid.children.is_empty());
    }

    #[test]
    fn minimap_projection_round_trips() {
        let props = Props::new()
            .with("x", 10.0)
            .with("y", 20.0)
            .with("world-width", 1600.0)
            .with("world-height", 800.0);
        let laid = layout_minimap(&Node::new(Tag::Minimap, props), &ctx());
        let Geometry::Minimap(map) = laid.layout.geometry else {
            panic!("minimap geometry expected");
        };
        let bounds = laid.bounds();
        let world = map.to_world(&bounds, Point::new(90.0, 60.0));
        assert_eq!(world, Point::new(800.0, 200.0));
        assert_eq!(map.to_screen(&bounds, world), Point::new(90.0, 60.0));
        let view = map.rect_to_screen(&bounds, &Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(view, Rect::new(10.0, 20.0, 40.0, 80.0));
    }

    #[test]
    fn bars_share_width_and_scale_to_peak() {
        let props = Props::new()
            .with("width", 108.0)
            .with("height", 116.0)
            .with("values", Value::List(vec![1.0.into(), 2.0.into(), 4.0.into()]));
        let laid = layout_bar_chart(&Node::new(Tag::BarChart, props), &ctx());
        let Geometry::Chart { bars } = &laid.layout.geometry else {
            panic!("chart geometry expected");
        };
        // plot is 92 x 100; (92 - 2 * 4) / 3 = 28 per bar.
        assert_eq!(bars[0], Rect::new(8.0, 83.0, 28.0, 25.0));
        assert_eq!(bars[1].x, 40.0);
        assert_eq!(bars[2].height, 100.0);
        assert_eq!(bars[2].y, 8.0);
    }

    #[test]
    fn labels_reserve_room_and_max_caps() {
        let props = Props::new()
            .with("values", Value::List(vec![5.0.into(), 20.0.into()]))
            .with("labels", Value::List(vec!["a".into(), "b".into()]))
            .with("max", 10.0);
        let laid = layout_bar_chart(&Node::new(Tag::BarChart, props.clone()), &ctx());
        let Geometry::Chart { bars } = &laid.layout.geometry else {
            panic!("chart geometry expected");
        };
        let plot_bottom = laid.bounds().bottom() - BAR_CHART_PADDING - BAR_LABEL_HEIGHT;
        assert_eq!(bars[1].bottom(), plot_bottom);
        assert_eq!(bars[1].height, 120.0 - 2.0 * BAR_CHART_PADDING - BAR_LABEL_HEIGHT);
        assert_eq!(bars[0].height * 2.0, bars[1].height);
        assert_eq!(bar_labels(&props), ["a", "b"]);
    }
}

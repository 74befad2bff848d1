#![forbid(unsafe_code)]

//! Minimap and bar chart painters.

use crate::planner::Planner;
use crate::theme::prop_color;
use reactified_core::event::GestureTag;
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::NodePath;
use reactified_core::value::Value;
use reactified_layout::charts::bar_labels;
use reactified_layout::defaults::{BAR_CHART_PADDING, BAR_LABEL_HEIGHT};
use reactified_layout::{Geometry, LaidOutNode};
use reactified_render::{Draw, ShapeStyle};

const MARKER_RADIUS: f64 = 2.5;
const BAR_LABEL_FONT_SIZE: f64 = 10.0;

/// Background, markers and view rectangle, clipped to the minimap bounds.
pub(crate) fn paint_minimap(p: &mut Planner<'_>, node: &LaidOutNode, path: &NodePath) {
    let Geometry::Minimap(map) = &node.layout.geometry else {
        return;
    };
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let bounds = node.bounds();
    let background = prop_color(&node.props, "background").unwrap_or(theme.minimap);

    p.out.clipped(bounds, |out| {
        out.fill_rect(bounds, background);
        for marker in node.props.list("markers").unwrap_or_default() {
            let (Some(x), Some(y)) = (
                marker.get("x").and_then(Value::as_f64),
                marker.get("y").and_then(Value::as_f64),
            ) else {
                continue;
            };
            let color = marker
                .get("color")
                .and_then(reactified_render::Color::from_value)
                .unwrap_or(theme.marker);
            let radius = marker
                .get("radius")
                .and_then(Value::as_f64)
                .filter(|r| *r > 0.0)
                .unwrap_or(MARKER_RADIUS);
            let center = map.to_screen(&bounds, Point::new(x, y));
            out.circle(center, radius, ShapeStyle::fill(color));
        }
        if let Some(view) = node.props.get("view").and_then(Value::as_rect) {
            out.stroke_rect(map.rect_to_screen(&bounds, &view), theme.view, 1.0);
        }
    });

    let border = if ctx.active_on(path, GestureTag::MinimapPan).is_some() {
        theme.accent
    } else {
        theme.border
    };
    p.out.stroke_rect(bounds, border, 1.0);
}

/// Panel, bars, then labels under the bars.
pub(crate) fn paint_bar_chart(p: &mut Planner<'_>, node: &LaidOutNode) {
    let Geometry::Chart { bars } = &node.layout.geometry else {
        return;
    };
    let ctx = p.ctx;
    let theme = &ctx.theme;
    let bounds = node.bounds();
    let bar_color = prop_color(&node.props, "color").unwrap_or(theme.accent);
    let background = prop_color(&node.props, "background").unwrap_or(theme.surface);

    p.out.panel(bounds, background, theme.border);
    for bar in bars.iter().filter(|bar| !bar.is_empty()) {
        p.out.fill_rect(*bar, bar_color);
    }

    let baseline = bounds.bottom() - BAR_CHART_PADDING - (BAR_LABEL_HEIGHT - BAR_LABEL_FONT_SIZE);
    for (bar, label) in bars.iter().zip(bar_labels(&node.props)) {
        let slot = Rect::new(bar.x, baseline - BAR_LABEL_FONT_SIZE, bar.width, BAR_LABEL_FONT_SIZE);
        p.centered_text(&label, &slot, BAR_LABEL_FONT_SIZE, theme.text_muted);
    }
}

#[cfg(test)]
mod tests {
    use crate::context::RenderContext;
    use crate::plan;
    use reactified_core::geometry::{Point, Rect};
    use reactified_core::node::{Node, Tag};
    use reactified_core::value::{Props, Value};
    use reactified_layout::layout_root;
    use reactified_render::DrawCommand;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn minimap_markers_and_view_are_projected_and_clipped() {
        let props = Props::new()
            .with("world-width", 1600.0)
            .with("world-height", 1600.0)
            .with(
                "markers",
                Value::List(vec![Value::map([
                    ("x", Value::from(800.0)),
                    ("y", Value::from(400.0)),
                ])]),
            )
            .with(
                "view",
                Value::map([
                    ("x", Value::from(0.0)),
                    ("y", Value::from(0.0)),
                    ("width", Value::from(400.0)),
                    ("height", Value::from(200.0)),
                ]),
            );
        let laid = layout_root(&Node::new(Tag::Minimap, props), viewport()).unwrap();
        let commands = plan(&laid, &RenderContext::new()).commands;
        let ops: Vec<&str> = commands.iter().map(DrawCommand::op).collect();
        assert_eq!(ops, ["save", "clip-rect", "rect", "circle", "rect", "restore", "rect"]);
        let DrawCommand::Circle { center, .. } = &commands[3] else {
            panic!("marker expected");
        };
        assert_eq!(*center, Point::new(80.0, 40.0));
        let DrawCommand::Rect { bounds, .. } = &commands[4] else {
            panic!("view expected");
        };
        assert_eq!(*bounds, Rect::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn bar_chart_draws_bars_and_labels() {
        let props = Props::new()
            .with("values", Value::List(vec![1.0.into(), 0.0.into(), 3.0.into()]))
            .with("labels", Value::List(vec!["a".into(), "b".into(), "c".into()]));
        let laid = layout_root(&Node::new(Tag::BarChart, props), viewport()).unwrap();
        let commands = plan(&laid, &RenderContext::new()).commands;
        let rects = commands.iter().filter(|c| c.op() == "rect").count();
        let texts = commands.iter().filter(|c| c.op() == "text").count();
        // Panel plus two non-empty bars.
        assert_eq!(rects, 3);
        assert_eq!(texts, 3);
    }
}

#![forbid(unsafe_code)]

//! Padding and explicit-bounds resolution.
//!
//! Padding props are resolved per edge with specificity
//! edge > axis > all > 0:
//!
//! | Edge   | Keys tried, in order                                   |
//! |--------|--------------------------------------------------------|
//! | top    | `padding-top`, `padding-vertical`, `padding`           |
//! | right  | `padding-right`, `padding-horizontal`, `padding`       |
//! | bottom | `padding-bottom`, `padding-vertical`, `padding`        |
//! | left   | `padding-left`, `padding-horizontal`, `padding`        |
//!
//! Negative values resolve to zero.

use crate::LayoutContext;
use reactified_core::geometry::{Rect, Sides};
use reactified_core::value::Props;

/// Resolve the node's padding from its props.
pub fn resolve_padding(props: &Props) -> Sides {
    let edge = |edge_key: &str, axis_key: &str| {
        props
            .number(edge_key)
            .or_else(|| props.number(axis_key))
            .or_else(|| props.number("padding"))
            .unwrap_or(0.0)
            .max(0.0)
    };
    Sides::new(
        edge("padding-top", "padding-vertical"),
        edge("padding-right", "padding-horizontal"),
        edge("padding-bottom", "padding-vertical"),
        edge("padding-left", "padding-horizontal"),
    )
}

/// Non-negative gap between stacked children.
pub fn resolve_gap(props: &Props) -> f64 {
    props.number_or("gap", 0.0).max(0.0)
}

/// Origin from `x`/`y` props, falling back to the context bounds.
pub fn resolve_origin(props: &Props, ctx: &LayoutContext) -> (f64, f64) {
    (
        props.number_or("x", ctx.bounds.x),
        props.number_or("y", ctx.bounds.y),
    )
}

/// Explicit non-negative `width`, if any.
pub fn explicit_width(props: &Props) -> Option<f64> {
    props.number("width").map(|w| w.max(0.0))
}

/// Explicit non-negative `height`, if any.
pub fn explicit_height(props: &Props) -> Option<f64> {
    props.number("height").map(|h| h.max(0.0))
}

/// Bounds from explicit props over the context bounds, with `height`
/// defaulting to `default_height` instead of the context height.
pub fn resolve_fixed_height(props: &Props, ctx: &LayoutContext, default_height: f64) -> Rect {
    let (x, y) = resolve_origin(props, ctx);
    Rect::new(
        x,
        y,
        explicit_width(props).unwrap_or(ctx.bounds.width.max(0.0)),
        explicit_height(props).unwrap_or(default_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specificity_edge_over_axis_over_all() {
        let props = Props::new()
            .with("padding", 2.0)
            .with("padding-horizontal", 6.0)
            .with("padding-left", 9.0);
        let sides = resolve_padding(&props);
        assert_eq!(sides.left, 9.0);
        assert_eq!(sides.right, 6.0);
        assert_eq!(sides.top, 2.0);
        assert_eq!(sides.bottom, 2.0);
    }

    #[test]
    fn missing_padding_is_zero() {
        assert_eq!(resolve_padding(&Props::new()), Sides::ZERO);
    }

    #[test]
    fn negative_padding_and_gap_clamp_to_zero() {
        let props = Props::new().with("padding-vertical", -3.0).with("gap", -1.0);
        assert_eq!(resolve_padding(&props).top, 0.0);
        assert_eq!(resolve_gap(&props), 0.0);
    }

    #[test]
    fn explicit_props_override_context() {
        let ctx = LayoutContext::root(Rect::new(0.0, 0.0, 800.0, 600.0));
        let props = Props::new().with("x", 10.0).with("width", 50.0);
        let rect = resolve_fixed_height(&props, &ctx, 36.0);
        assert_eq!(rect, Rect::new(10.0, 0.0, 50.0, 36.0));
    }
}

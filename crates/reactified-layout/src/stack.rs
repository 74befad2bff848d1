#![forbid(unsafe_code)]

//! `vstack` / `hstack` layout.
//!
//! Stacks place their children one after another along the main axis,
//! starting at the padded content origin and advancing by each child's size
//! plus `gap` (no gap after the last child).
//!
//! A child with an explicit `x` or `y` prop floats: it is placed at that
//! position and takes no room in the flow; an auto-sized stack still grows
//! to cover it. Windows inside a root stack are positioned this way.
//!
//! # Sizing
//!
//! - `vstack` passes its content width down, so width-filling children
//!   (buttons, sliders, dropdowns, nested stacks) stretch horizontally.
//! - `hstack` splits its content width the way a flex row does: children
//!   with an intrinsic or explicit width are sized first, then the remaining
//!   width (minus gaps) is shared equally among the others.
//! - Without an explicit size, a stack's main-axis size is the sum of child
//!   sizes plus gaps, and its cross-axis size the largest child, both plus
//!   padding.
//!
//! Children that still overflow the content rectangle (explicit sizes too
//! small for the content) are clamped into it.

use crate::padding::{explicit_height, explicit_width, resolve_gap, resolve_origin, resolve_padding};
use crate::tree::{Geometry, LaidOutNode, Layout};
use crate::{LayoutContext, LayoutResult, UnknownPrimitiveError, layout};
use reactified_core::geometry::{Point, Rect, Sides};
use reactified_core::node::{Node, Tag};

/// Cross-axis alignment of `hstack` children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Children take the full row height.
    Stretch,
}

impl Align {
    /// Read the `align` prop; unknown or missing values mean [`Align::Start`].
    pub fn from_props(props: &reactified_core::value::Props) -> Self {
        match props.str("align") {
            Some("center") => Self::Center,
            Some("end") => Self::End,
            Some("stretch") => Self::Stretch,
            _ => Self::Start,
        }
    }

    /// Offset of a child of `size` inside a row of `extent`.
    fn offset(self, extent: f64, size: f64) -> f64 {
        match self {
            Self::Start | Self::Stretch => 0.0,
            Self::Center => ((extent - size) / 2.0).max(0.0),
            Self::End => (extent - size).max(0.0),
        }
    }
}

/// How an `hstack` child claims width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAxis {
    /// Positioned by its own `x`/`y` props, outside the flow.
    Floating,
    /// Explicit `width` prop or an intrinsically sized primitive.
    Fixed,
    /// Shares whatever width the fixed children leave.
    Fill,
}

impl MainAxis {
    fn of(child: &Node) -> Self {
        if is_floating(child) {
            return Self::Floating;
        }
        if child.props.contains("width") {
            return Self::Fixed;
        }
        match child.tag {
            Tag::Label | Tag::Window | Tag::TabbedWindow | Tag::Minimap | Tag::BarChart => {
                Self::Fixed
            }
            _ => Self::Fill,
        }
    }
}

/// Lay out a `vstack`.
pub fn layout_vstack(node: &Node, ctx: &LayoutContext) -> LayoutResult {
    let padding = resolve_padding(&node.props);
    let (x, y) = resolve_origin(&node.props, ctx);
    let width = explicit_width(&node.props);
    let height = explicit_height(&node.props);
    let available = Rect::new(
        x,
        y,
        width.unwrap_or(ctx.bounds.width.max(0.0)),
        height.unwrap_or(ctx.bounds.height.max(0.0)),
    )
    .inner(padding);

    let (children, used) = flow_vertical(node, ctx, available, resolve_gap(&node.props))?;
    let widest = children
        .iter()
        .zip(&node.children)
        .filter(|(_, child)| !is_floating(child))
        .map(|(laid, _)| laid.bounds().width)
        .fold(0.0, f64::max);
    let (float_width, float_height) = floating_extent(&children, node, available);
    let bounds = Rect::new(
        x,
        y,
        width.unwrap_or(widest.max(float_width) + padding.horizontal_sum()),
        height.unwrap_or(used.max(float_height) + padding.vertical_sum()),
    );
    Ok(finish_stack(node, bounds, padding, children))
}

/// Lay out a `hstack`.
pub fn layout_hstack(node: &Node, ctx: &LayoutContext) -> LayoutResult {
    let padding = resolve_padding(&node.props);
    let gap = resolve_gap(&node.props);
    let (x, y) = resolve_origin(&node.props, ctx);
    let width = explicit_width(&node.props);
    let height = explicit_height(&node.props);
    let available = Rect::new(
        x,
        y,
        width.unwrap_or(ctx.bounds.width.max(0.0)),
        height.unwrap_or(ctx.bounds.height.max(0.0)),
    )
    .inner(padding);
    let align = Align::from_props(&node.props);

    // Pass 1: floating and fixed-width children.
    let axes: Vec<MainAxis> = node.children.iter().map(MainAxis::of).collect();
    let mut fixed_total = 0.0;
    let mut slots: Vec<Option<LaidOutNode>> = Vec::with_capacity(node.children.len());
    for (child, axis) in node.children.iter().zip(&axes) {
        if *axis == MainAxis::Fill {
            slots.push(None);
            continue;
        }
        let laid = layout(child, &ctx.with_bounds(available))?;
        if *axis == MainAxis::Fixed {
            fixed_total += laid.bounds().width;
        }
        slots.push(Some(laid));
    }

    // Pass 2: share the rest among fill children.
    let fill_count = axes.iter().filter(|a| **a == MainAxis::Fill).count();
    let flowed = axes.iter().filter(|a| **a != MainAxis::Floating).count();
    let gaps = gap * flowed.saturating_sub(1) as f64;
    let share = if fill_count > 0 {
        ((available.width - fixed_total - gaps) / fill_count as f64).max(0.0)
    } else {
        0.0
    };
    let fill_bounds = available.with_size(share, available.height);
    let mut children = slots
        .into_iter()
        .zip(&node.children)
        .map(|(slot, child)| match slot {
            Some(laid) => Ok(laid),
            None => layout(child, &ctx.with_bounds(fill_bounds)),
        })
        .collect::<Result<Vec<_>, UnknownPrimitiveError>>()?;

    let row_height = if height.is_some() {
        available.height
    } else {
        children
            .iter()
            .zip(&axes)
            .filter(|(_, axis)| **axis != MainAxis::Floating)
            .map(|(child, _)| child.bounds().height)
            .fold(0.0, f64::max)
    };

    if align == Align::Stretch {
        for ((laid, child), axis) in children.iter_mut().zip(&node.children).zip(&axes) {
            if *axis != MainAxis::Floating && laid.bounds().height != row_height {
                let rect = Rect::new(available.x, available.y, laid.bounds().width, row_height);
                *laid = stretch(child, ctx, rect)?;
            }
        }
    }

    let mut cursor = available.x;
    let mut placed = 0usize;
    for (laid, axis) in children.iter_mut().zip(&axes) {
        if *axis == MainAxis::Floating {
            continue;
        }
        if placed > 0 {
            cursor += gap;
        }
        placed += 1;
        let bounds = laid.bounds();
        let top = available.y + align.offset(row_height, bounds.height);
        laid.move_to(Point::new(cursor, top));
        cursor += bounds.width;
    }

    let (float_width, float_height) = floating_extent(&children, node, available);
    let bounds = Rect::new(
        x,
        y,
        width.unwrap_or((cursor - available.x).max(float_width) + padding.horizontal_sum()),
        height.unwrap_or(row_height.max(float_height) + padding.vertical_sum()),
    );
    Ok(finish_stack(node, bounds, padding, children))
}

/// Lay out `node`'s children top to bottom inside `area`.
///
/// Returns the children and the height they use, gaps included.
pub(crate) fn flow_vertical(
    node: &Node,
    ctx: &LayoutContext,
    area: Rect,
    gap: f64,
) -> Result<(Vec<LaidOutNode>, f64), UnknownPrimitiveError> {
    let mut cursor = area.y;
    let mut placed = 0usize;
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if is_floating(child) {
            children.push(layout(child, &ctx.with_bounds(area))?);
            continue;
        }
        if placed > 0 {
            cursor += gap;
        }
        placed += 1;
        let slot = Rect::new(area.x, cursor, area.width, (area.bottom() - cursor).max(0.0));
        let mut laid = layout(child, &ctx.with_bounds(slot))?;
        laid.move_to(Point::new(slot.x, slot.y));
        cursor += laid.bounds().height;
        children.push(laid);
    }
    Ok((children, cursor - area.y))
}

/// True when the child positions itself with `x`/`y` props.
pub(crate) fn is_floating(child: &Node) -> bool {
    child.props.contains("x") || child.props.contains("y")
}

/// Width and height from `area`'s origin needed to cover floating children.
fn floating_extent(children: &[LaidOutNode], node: &Node, area: Rect) -> (f64, f64) {
    children
        .iter()
        .zip(&node.children)
        .filter(|(_, child)| is_floating(child))
        .fold((0.0_f64, 0.0_f64), |(w, h), (laid, _)| {
            let bounds = laid.bounds();
            (w.max(bounds.right() - area.x), h.max(bounds.bottom() - area.y))
        })
}

/// Clamp overflowing children into `content`.
pub(crate) fn contain_children(children: &mut [LaidOutNode], content: &Rect) {
    for child in children {
        child.clamp_into(content);
    }
}

/// Re-lay out `child` at a forced height.
fn stretch(child: &Node, ctx: &LayoutContext, rect: Rect) -> LayoutResult {
    let mut forced = child.clone();
    forced.props.insert("height", rect.height);
    let mut laid = layout(&forced, &ctx.with_bounds(rect))?;
    laid.props = child.props.clone();
    Ok(laid)
}

fn finish_stack(
    node: &Node,
    bounds: Rect,
    padding: Sides,
    mut children: Vec<LaidOutNode>,
) -> LaidOutNode {
    let content = bounds.inner(padding);
    contain_children(&mut children, &content);
    LaidOutNode {
        tag: node.tag.clone(),
        props: node.props.clone(),
        layout: Layout {
            bounds,
            geometry: Geometry::Stack { padding, content },
        },
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactified_core::value::Props;

    fn ctx() -> LayoutContext {
        LayoutContext::root(Rect::new(0.0, 0.0, 400.0, 300.0))
    }

    fn sized(tag: Tag, width: Option<f64>, height: f64) -> Node {
        let mut props = Props::new().with("height", height);
        if let Some(width) = width {
            props.insert("width", width);
        }
        Node::new(tag, props)
    }

    #[test]
    fn vstack_advances_by_height_plus_gap() {
        let node = Node::new(Tag::VStack, Props::new().with("gap", 8.0)).with_children(vec![
            sized(Tag::Button, None, 10.0),
            sized(Tag::Button, None, 20.0),
            sized(Tag::Button, None, 30.0),
        ]);
        let laid = layout_vstack(&node, &ctx()).unwrap();
        let ys: Vec<f64> = laid.children.iter().map(|c| c.bounds().y).collect();
        assert_eq!(ys, [0.0, 18.0, 46.0]);
        assert_eq!(laid.bounds().height, 76.0);
    }

    #[test]
    fn vstack_padding_offsets_and_grows() {
        let node = Node::new(Tag::VStack, Props::new().with("padding", 5.0))
            .with_children(vec![sized(Tag::Button, None, 10.0)]);
        let laid = layout_vstack(&node, &ctx()).unwrap();
        let child = laid.children[0].bounds();
        assert_eq!(child, Rect::new(5.0, 5.0, 390.0, 10.0));
        assert_eq!(laid.bounds(), Rect::new(0.0, 0.0, 400.0, 20.0));
    }

    #[test]
    fn positioned_children_float_outside_the_flow() {
        let floating = Node::new(
            Tag::Button,
            Props::new().with("x", 50.0).with("y", 99.0).with("width", 40.0),
        );
        let node = Node::new(Tag::VStack, Props::new().with("gap", 8.0)).with_children(vec![
            sized(Tag::Button, None, 10.0),
            floating,
            sized(Tag::Button, None, 10.0),
        ]);
        let laid = layout_vstack(&node, &ctx()).unwrap();
        assert_eq!(laid.children[1].bounds(), Rect::new(50.0, 99.0, 40.0, 36.0));
        assert_eq!(laid.children[2].bounds().y, 18.0);
        // Grows to cover the floating child.
        assert_eq!(laid.bounds().height, 135.0);
    }

    #[test]
    fn hstack_shares_remaining_width() {
        let node = Node::new(Tag::HStack, Props::new().with("gap", 10.0)).with_children(vec![
            sized(Tag::Button, Some(100.0), 20.0),
            sized(Tag::Button, None, 20.0),
            sized(Tag::Button, None, 20.0),
        ]);
        let laid = layout_hstack(&node, &ctx()).unwrap();
        let xs: Vec<(f64, f64)> = laid
            .children
            .iter()
            .map(|c| (c.bounds().x, c.bounds().width))
            .collect();
        // 400 - 100 - 2 * 10 = 280, split in two.
        assert_eq!(xs, [(0.0, 100.0), (110.0, 140.0), (260.0, 140.0)]);
        assert_eq!(laid.bounds().width, 400.0);
        assert_eq!(laid.bounds().height, 20.0);
    }

    #[test]
    fn hstack_alignment() {
        let row = |align: &str| {
            Node::new(Tag::HStack, Props::new().with("align", align)).with_children(vec![
                sized(Tag::Button, Some(50.0), 40.0),
                sized(Tag::Button, Some(50.0), 10.0),
            ])
        };
        let short = |align: &str| layout_hstack(&row(align), &ctx()).unwrap().children[1].bounds();
        assert_eq!(short("start").y, 0.0);
        assert_eq!(short("center").y, 15.0);
        assert_eq!(short("end").y, 30.0);
        assert_eq!(short("stretch").height, 40.0);
        assert_eq!(short("bogus").y, 0.0);
    }

    #[test]
    fn stretch_keeps_original_props() {
        let node = Node::new(Tag::HStack, Props::new().with("align", "stretch")).with_children(vec![
            sized(Tag::Button, Some(50.0), 40.0),
            Node::new(Tag::Button, Props::new().with("width", 50.0)),
        ]);
        let laid = layout_hstack(&node, &ctx()).unwrap();
        assert_eq!(laid.children[1].bounds().height, 40.0);
        assert!(!laid.children[1].props.contains("height"));
    }

    #[test]
    fn overflowing_children_are_clamped() {
        let node = Node::new(
            Tag::VStack,
            Props::new().with("height", 50.0).with("padding", 4.0),
        )
        .with_children(vec![
            sized(Tag::Button, None, 30.0),
            sized(Tag::Button, None, 30.0),
        ]);
        let laid = layout_vstack(&node, &ctx()).unwrap();
        let content = laid.content_rect();
        for child in &laid.children {
            assert!(content.contains_rect(&child.bounds()), "{:?}", child.bounds());
        }
    }

    #[test]
    fn unknown_child_fails_the_stack() {
        let node = Node::new(Tag::VStack, Props::new())
            .with_children(vec![Node::new(Tag::Other("bogus".into()), Props::new())]);
        let err = layout_vstack(&node, &ctx()).unwrap_err();
        assert_eq!(err.tag, "bogus");
    }
}

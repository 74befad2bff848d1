#![forbid(unsafe_code)]

//! Render planner for Reactified UI trees.
//!
//! Turns a [`LaidOutNode`](reactified_layout::LaidOutNode) tree into an
//! ordered list of [`DrawCommand`](reactified_render::DrawCommand)s plus
//! deferred [`Overlay`]s:
//!
//! ```text
//! LaidOutNode --plan()--> Plan { commands, overlays } --flush()--> Vec<DrawCommand>
//! ```
//!
//! Styling reads [`RenderContext`] (pointer, active gesture, [`Theme`]) and
//! never mutates it.

mod charts;
pub mod context;
mod controls;
pub mod overlay;
pub mod planner;
pub mod theme;
mod window;

pub use context::{ActiveRef, RenderContext};
pub use overlay::{DropdownOverlay, Overlay, OverlayRow, plan_overlay};
pub use planner::{Plan, plan};
pub use theme::{ControlState, StateColors, Theme, ThemeBuilder};

/// Plan `tree` and flush its overlays in one step.
pub fn plan_frame(
    tree: &reactified_layout::LaidOutNode,
    ctx: &RenderContext,
) -> Vec<reactified_render::DrawCommand> {
    plan(tree, ctx).flush()
}

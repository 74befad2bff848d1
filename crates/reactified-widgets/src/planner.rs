#![forbid(unsafe_code)]

//! Render planning: laid-out trees to ordered draw commands.
//!
//! [`plan`] walks the tree in document order (parents before children,
//! children first to last) so later siblings paint over earlier ones. Each
//! known primitive has a painter; containers and unrecognized tags paint
//! their children and nothing else.
//!
//! # Invariants
//!
//! - Every `save` the planner emits is matched by a `restore`.
//! - Overlay commands are never part of [`Plan::commands`]; they are
//!   appended after the main tree by [`Plan::flush`].

use crate::context::RenderContext;
use crate::overlay::{Overlay, plan_overlay};
use crate::theme::prop_color;
use crate::{charts, controls, window};
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::{NodePath, Tag};
use reactified_core::text::estimate_width;
use reactified_layout::{Geometry, LaidOutNode};
use reactified_render::{Color, CommandList, Draw, DrawCommand};

/// Vertical offset of a centered text baseline, relative to font size.
pub(crate) const BASELINE_FACTOR: f64 = 0.35;

/// Output of one planning pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// Main-tree commands, balanced.
    pub commands: Vec<DrawCommand>,
    /// Overlays queued while planning, in document order.
    pub overlays: Vec<Overlay>,
}

impl Plan {
    /// Main-tree commands followed by every overlay's commands.
    pub fn flush(self) -> Vec<DrawCommand> {
        let mut commands = self.commands;
        for overlay in &self.overlays {
            let mut out = CommandList::new();
            plan_overlay(overlay, &mut out);
            commands.extend(out.finish());
        }
        commands
    }
}

/// Plan `tree` under `ctx`.
pub fn plan(tree: &LaidOutNode, ctx: &RenderContext) -> Plan {
    let _span = reactified_core::debug_span!("plan").entered();
    let scoped;
    let ctx = match ctx.pointer.and_then(|p| overlay_under(tree, p)) {
        Some(owner) => {
            scoped = ctx.clone().with_overlay_owner(owner);
            &scoped
        }
        None => ctx,
    };
    let mut planner = Planner {
        ctx,
        out: CommandList::new(),
        overlays: Vec::new(),
    };
    planner.node(tree, &NodePath::root());
    let plan = Plan {
        commands: planner.out.finish(),
        overlays: planner.overlays,
    };
    reactified_core::debug!(
        commands = plan.commands.len(),
        overlays = plan.overlays.len(),
        "planned frame"
    );
    plan
}

/// Dropdown whose expanded option row is topmost at `point`. Later
/// overlays paint over earlier ones, so the last match wins.
fn overlay_under(tree: &LaidOutNode, point: Point) -> Option<NodePath> {
    let mut owner = None;
    tree.walk(|path, node| {
        if let Geometry::Dropdown(dropdown) = &node.layout.geometry
            && dropdown.option_at(point).is_some()
        {
            owner = Some(path.clone());
        }
    });
    owner
}

/// Planning state threaded through the painters.
pub(crate) struct Planner<'a> {
    pub(crate) ctx: &'a RenderContext,
    pub(crate) out: CommandList,
    pub(crate) overlays: Vec<Overlay>,
}

impl Planner<'_> {
    pub(crate) fn node(&mut self, node: &LaidOutNode, path: &NodePath) {
        match &node.tag {
            Tag::Label => controls::paint_label(self, node),
            Tag::Button => controls::paint_button(self, node, path),
            Tag::Slider => controls::paint_slider(self, node, path),
            Tag::Dropdown => controls::paint_dropdown(self, node, path),
            Tag::Window | Tag::TabbedWindow => window::paint_window(self, node, path),
            Tag::Minimap => charts::paint_minimap(self, node, path),
            Tag::BarChart => charts::paint_bar_chart(self, node),
            Tag::VStack | Tag::HStack => {
                if let Some(fill) = prop_color(&node.props, "background") {
                    self.out.fill_rect(node.bounds(), fill);
                }
                self.children(node, path);
            }
            Tag::Other(_) => self.children(node, path),
        }
    }

    pub(crate) fn children(&mut self, node: &LaidOutNode, path: &NodePath) {
        for (i, child) in node.children.iter().enumerate() {
            self.node(child, &path.child(i));
        }
    }

    /// `text` centered in `rect`, never starting left of it.
    pub(crate) fn centered_text(&mut self, text: &str, rect: &Rect, size: f64, color: Color) {
        if text.is_empty() {
            return;
        }
        let width = estimate_width(text, size);
        let x = rect.x + ((rect.width - width) / 2.0).max(0.0);
        let baseline = rect.center().y + size * BASELINE_FACTOR;
        self.out.text(text, Point::new(x, baseline), size, color);
    }
}

#![forbid(unsafe_code)]

//! Pointer capture and gesture state.
//!
//! [`InteractionState`] is the only mutable state the engine keeps between
//! frames. A pointer-down that starts a gesture captures the pointer for
//! the pressed node; until the matching pointer-up every drag is routed to
//! that node, wherever the pointer goes.
//!
//! # Invariants
//!
//! 1. At most one node is captured. `captured` and `active` are either both
//!    set or both clear.
//! 2. A pointer-down while captured never replaces the capture.
//! 3. Pointer-up always releases the capture, whether or not the release
//!    completed the gesture.
//! 4. Drags never hit-test; they read the captured node only.
//!
//! # Failure Modes
//!
//! | Condition                               | Behavior                              |
//! |-----------------------------------------|---------------------------------------|
//! | Down while captured (lost pointer-up)   | Logged, ignored, capture kept         |
//! | Drag or up without capture              | Returns `false`, nothing emitted      |
//! | Captured path gone from the new tree    | Press-time snapshot of the node used  |
//! | Host lost the pointer entirely          | [`InteractionState::release_capture`] |

use crate::config::InteractionConfig;
use crate::gesture::{self, GestureValue, Press};
use crate::hit::hit_test;
use reactified_core::action::ActionSink;
use reactified_core::event::{GestureTag, PointerEvent, PointerEventKind};
use reactified_core::geometry::Point;
use reactified_core::node::NodePath;
use reactified_layout::LaidOutNode;
use reactified_widgets::{ActiveRef, RenderContext, Theme};

/// The gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveInteraction {
    pub gesture: GestureTag,
    /// Path of the captured node.
    pub path: NodePath,
    /// The captured node as laid out when the gesture started.
    pub node: LaidOutNode,
    pub value: GestureValue,
}

impl ActiveInteraction {
    fn current<'a>(&'a self, tree: &'a LaidOutNode) -> &'a LaidOutNode {
        captured_node(tree, &self.path, &self.node)
    }
}

/// The node at `path` in `tree`, falling back to the press-time `snapshot`
/// when the path no longer names a node of the same primitive.
fn captured_node<'a>(
    tree: &'a LaidOutNode,
    path: &NodePath,
    snapshot: &'a LaidOutNode,
) -> &'a LaidOutNode {
    tree.at_path(path)
        .filter(|node| node.tag == snapshot.tag)
        .unwrap_or(snapshot)
}

/// Capture, active gesture and last known pointer position.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    captured: Option<NodePath>,
    active: Option<ActiveInteraction>,
    hover: Option<Point>,
    config: InteractionConfig,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InteractionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Path of the node owning the pointer.
    pub fn captured(&self) -> Option<&NodePath> {
        self.captured.as_ref()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    pub fn active(&self) -> Option<&ActiveInteraction> {
        self.active.as_ref()
    }

    /// Last pointer position seen by any entry point.
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Handle a pointer press. Returns `true` when the event was consumed.
    pub fn pointer_down(
        &mut self,
        tree: &LaidOutNode,
        point: Point,
        sink: &mut dyn ActionSink,
    ) -> bool {
        self.hover = Some(point);
        if self.is_captured() {
            reactified_core::warn!(captured = ?self.captured, "pointer down while captured, ignoring");
            return false;
        }
        let Some(hit) = hit_test(tree, point) else {
            return false;
        };
        let Some(node) = tree.at_path(&hit.path) else {
            return false;
        };
        match gesture::press(node, hit.option, point, sink) {
            Press::Capture(gesture, value) => {
                reactified_core::debug!(path = %hit.path, gesture = %gesture, "capture acquired");
                self.captured = Some(hit.path.clone());
                self.active = Some(ActiveInteraction {
                    gesture,
                    path: hit.path,
                    node: node.clone(),
                    value,
                });
                true
            }
            Press::Consumed => true,
            Press::Ignored => false,
        }
    }

    /// Handle pointer motion with a button held. Returns `true` while a
    /// gesture is captured.
    pub fn pointer_drag(
        &mut self,
        tree: &LaidOutNode,
        point: Point,
        sink: &mut dyn ActionSink,
    ) -> bool {
        self.hover = Some(point);
        let Some(ActiveInteraction {
            gesture,
            path,
            node,
            value,
        }) = self.active.as_mut()
        else {
            return false;
        };
        let node = captured_node(tree, path, node);
        gesture::drag(*gesture, value, node, point, &self.config, sink);
        true
    }

    /// Handle a pointer release. Returns `true` when a gesture was captured.
    pub fn pointer_up(
        &mut self,
        tree: &LaidOutNode,
        point: Point,
        sink: &mut dyn ActionSink,
    ) -> bool {
        self.hover = Some(point);
        self.captured = None;
        let Some(active) = self.active.take() else {
            return false;
        };
        gesture::release(&active.value, active.current(tree), point, sink);
        reactified_core::debug!(path = %active.path, gesture = %active.gesture, "capture released");
        true
    }

    /// Record pointer motion without a button held. Never consumes.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.hover = Some(point);
        false
    }

    /// Route a [`PointerEvent`] to the matching entry point.
    pub fn handle(
        &mut self,
        tree: &LaidOutNode,
        event: PointerEvent,
        sink: &mut dyn ActionSink,
    ) -> bool {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(tree, event.position, sink),
            PointerEventKind::Drag => self.pointer_drag(tree, event.position, sink),
            PointerEventKind::Up => self.pointer_up(tree, event.position, sink),
            PointerEventKind::Moved => self.pointer_move(event.position),
        }
    }

    /// Drop any capture without completing the gesture. Returns `true`
    /// when something was captured.
    pub fn release_capture(&mut self) -> bool {
        self.captured = None;
        match self.active.take() {
            Some(active) => {
                reactified_core::debug!(path = %active.path, "capture dropped");
                true
            }
            None => false,
        }
    }

    /// Styling context for the next planning pass.
    pub fn render_context(&self, theme: &Theme) -> RenderContext {
        let mut ctx = RenderContext::new().with_theme(theme.clone());
        if let Some(pointer) = self.hover {
            ctx = ctx.with_pointer(pointer);
        }
        if let Some(active) = &self.active {
            let mut reference = ActiveRef::new(active.gesture, active.path.clone());
            if let Some(index) = active.value.index() {
                reference = reference.with_index(index);
            }
            ctx = ctx.with_active(reference);
        }
        ctx
    }
}

#![forbid(unsafe_code)]

//! Per-frame pipeline driver.

use crate::Result;
use reactified_core::{ActionSink, Element, Point, PointerEvent, Rect, normalize};
use reactified_layout::{LaidOutNode, layout_root};
use reactified_render::DrawCommand;
use reactified_runtime::{InteractionConfig, InteractionState};
use reactified_widgets::{Theme, plan};

/// Output of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Main-tree commands followed by overlay commands.
    pub commands: Vec<DrawCommand>,
    /// Number of overlays flushed after the main tree.
    pub overlay_count: usize,
}

/// Owns the interaction state and the most recent laid-out tree.
///
/// Pointer events are resolved against the tree of the last successful
/// [`Ui::frame`]; before the first frame they are ignored.
#[derive(Debug, Clone, Default)]
pub struct Ui {
    theme: Theme,
    interaction: InteractionState,
    tree: Option<LaidOutNode>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: InteractionConfig) -> Self {
        self.interaction = InteractionState::with_config(config);
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Tree laid out by the last successful frame.
    pub fn tree(&self) -> Option<&LaidOutNode> {
        self.tree.as_ref()
    }

    /// Normalize, lay out and plan `element` for `viewport`.
    ///
    /// On error the previous tree is kept for pointer routing.
    pub fn frame(&mut self, element: &Element, viewport: Rect) -> Result<FramePlan> {
        let node = normalize(element)?;
        let tree = layout_root(&node, viewport)?;
        let ctx = self.interaction.render_context(&self.theme);
        let plan = plan(&tree, &ctx);
        let overlay_count = plan.overlays.len();
        self.tree = Some(tree);
        Ok(FramePlan {
            commands: plan.flush(),
            overlay_count,
        })
    }

    pub fn pointer_down(&mut self, point: Point, sink: &mut dyn ActionSink) -> bool {
        match &self.tree {
            Some(tree) => self.interaction.pointer_down(tree, point, sink),
            None => false,
        }
    }

    pub fn pointer_drag(&mut self, point: Point, sink: &mut dyn ActionSink) -> bool {
        match &self.tree {
            Some(tree) => self.interaction.pointer_drag(tree, point, sink),
            None => false,
        }
    }

    pub fn pointer_up(&mut self, point: Point, sink: &mut dyn ActionSink) -> bool {
        match &self.tree {
            Some(tree) => self.interaction.pointer_up(tree, point, sink),
            None => self.interaction.release_capture(),
        }
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.interaction.pointer_move(point)
    }

    pub fn handle(&mut self, event: PointerEvent, sink: &mut dyn ActionSink) -> bool {
        match &self.tree {
            Some(tree) => self.interaction.handle(tree, event, sink),
            None => false,
        }
    }

    /// Drop any capture without completing its gesture.
    pub fn release_capture(&mut self) -> bool {
        self.interaction.release_capture()
    }
}

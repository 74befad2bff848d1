#![forbid(unsafe_code)]

//! Read-only ambient state for styling decisions.

use crate::theme::{ControlState, Theme};
use reactified_core::event::GestureTag;
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::NodePath;

/// The gesture currently in progress, as the planner sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRef {
    pub gesture: GestureTag,
    /// Path of the captured node in the laid-out tree.
    pub path: NodePath,
    /// Pressed row or tab, for gestures that target one.
    pub index: Option<usize>,
}

impl ActiveRef {
    pub fn new(gesture: GestureTag, path: NodePath) -> Self {
        Self {
            gesture,
            path,
            index: None,
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Pointer position, active gesture and theme for one planning pass.
///
/// The planner only reads this; hover and press styling never feed back
/// into interaction state.
///
/// While the pointer is over an expanded dropdown's option row, that
/// overlay owns hover: main-tree surfaces underneath report not hovered,
/// matching the overlay-first hit test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub pointer: Option<Point>,
    pub active: Option<ActiveRef>,
    pub theme: Theme,
    /// Dropdown whose option row is topmost under the pointer.
    overlay_owner: Option<NodePath>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = Some(pointer);
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: ActiveRef) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Hand hover to the option rows of the dropdown at `path`.
    #[must_use]
    pub(crate) fn with_overlay_owner(mut self, path: NodePath) -> Self {
        self.overlay_owner = Some(path);
        self
    }

    /// True when the pointer is inside the main-tree surface `rect`.
    #[inline]
    pub fn hovered(&self, rect: &Rect) -> bool {
        self.overlay_owner.is_none() && self.pointer.is_some_and(|p| rect.contains(p))
    }

    /// State of option row `index` of the dropdown at `path`.
    pub fn row_state(&self, path: &NodePath, index: usize, rect: &Rect) -> ControlState {
        let pressed = self
            .active_on(path, GestureTag::DropdownOption)
            .is_some_and(|active| active.index == Some(index));
        let hovered = self.overlay_owner.as_ref() == Some(path)
            && self.pointer.is_some_and(|p| rect.contains(p));
        ControlState::resolve(pressed, hovered)
    }

    /// The active gesture, if it is `gesture` on the node at `path`.
    pub fn active_on(&self, path: &NodePath, gesture: GestureTag) -> Option<&ActiveRef> {
        self.active
            .as_ref()
            .filter(|active| active.gesture == gesture && &active.path == path)
    }

    /// State of a surface at `rect` that `gesture` on `path` presses.
    pub fn state(&self, path: &NodePath, gesture: GestureTag, rect: &Rect) -> ControlState {
        ControlState::resolve(self.active_on(path, gesture).is_some(), self.hovered(rect))
    }

    /// State of the `index`-th row or tab of the node at `path`.
    pub fn indexed_state(
        &self,
        path: &NodePath,
        gesture: GestureTag,
        index: usize,
        rect: &Rect,
    ) -> ControlState {
        let pressed = self
            .active_on(path, gesture)
            .is_some_and(|active| active.index == Some(index));
        ControlState::resolve(pressed, self.hovered(rect))
    }
}

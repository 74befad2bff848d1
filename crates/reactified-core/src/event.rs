#![forbid(unsafe_code)]

//! Pointer and gesture vocabulary shared by the interaction engine and the
//! render planner.

use crate::geometry::Point;
use std::fmt;

/// Kind of a logical pointer event.
///
/// Raw OS events are mapped to these by the host before they reach the
/// engine. Only a single pointer is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved while the primary button is held.
    Drag,
    /// Primary button released.
    Up,
    /// Pointer moved with no button held.
    Moved,
}

/// A logical pointer event in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    #[must_use]
    pub const fn drag(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Drag, x, y)
    }

    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }
}

/// Kind of gesture currently owning the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureTag {
    /// Dragging a window by its header.
    WindowMove,
    /// Dragging a window's bottom-right resize handle.
    WindowResize,
    /// Pressing a window's minimize toggle.
    WindowMinimize,
    /// Pressing a tab in a tabbed window's header.
    TabClick,
    /// Dragging a slider handle.
    Slider,
    /// Pressing a dropdown header (open/close).
    Dropdown,
    /// Pressing a row of an expanded dropdown.
    DropdownOption,
    /// Pressing a button.
    ButtonPress,
    /// Pressing or dragging inside a minimap.
    MinimapPan,
}

impl GestureTag {
    pub const fn name(self) -> &'static str {
        match self {
            GestureTag::WindowMove => "window-move",
            GestureTag::WindowResize => "window-resize",
            GestureTag::WindowMinimize => "window-minimize",
            GestureTag::TabClick => "tab-click",
            GestureTag::Slider => "slider",
            GestureTag::Dropdown => "dropdown",
            GestureTag::DropdownOption => "dropdown-option",
            GestureTag::ButtonPress => "button-press",
            GestureTag::MinimapPan => "minimap-pan",
        }
    }
}

impl fmt::Display for GestureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_position() {
        let ev = PointerEvent::drag(3.0, 4.5);
        assert_eq!(ev.kind, PointerEventKind::Drag);
        assert_eq!(ev.position, Point::new(3.0, 4.5));
    }

    #[test]
    fn gesture_names_are_kebab_case() {
        assert_eq!(GestureTag::DropdownOption.to_string(), "dropdown-option");
        assert_eq!(GestureTag::WindowResize.name(), "window-resize");
    }
}

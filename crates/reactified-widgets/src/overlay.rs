#![forbid(unsafe_code)]

//! Deferred overlays.
//!
//! Content that must paint above the whole main tree (an open dropdown's
//! option list) is not emitted inline. The planner queues an [`Overlay`]
//! carrying everything needed to paint it, and [`Plan::flush`] plans every
//! queued overlay after the main tree so overlay commands come last.
//!
//! [`Plan::flush`]: crate::Plan::flush

use crate::theme::{ControlState, StateColors};
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::{NodePath, Tag};
use reactified_core::value::Value;
use reactified_render::{Color, CommandList, Draw};

/// Left inset of option labels.
const ROW_TEXT_INSET: f64 = 10.0;

/// A deferred draw request.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Option rows of an expanded dropdown.
    DropdownOptions(DropdownOverlay),
}

impl Overlay {
    /// Tag of the node that queued the overlay.
    pub fn tag(&self) -> Tag {
        match self {
            Self::DropdownOptions(_) => Tag::Dropdown,
        }
    }

    /// Path of the node that queued the overlay.
    pub fn path(&self) -> &NodePath {
        match self {
            Self::DropdownOptions(overlay) => &overlay.path,
        }
    }
}

/// Option list payload.
///
/// Row states are resolved when the overlay is queued, so planning it needs
/// no render context.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOverlay {
    pub path: NodePath,
    pub rows: Vec<OverlayRow>,
    /// Index of the row holding the dropdown's current value.
    pub selected: Option<usize>,
    pub colors: StateColors,
    pub selected_color: Color,
    pub text: Color,
    pub border: Color,
    pub font_size: f64,
}

/// One option row.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRow {
    pub value: Value,
    pub label: String,
    pub bounds: Rect,
    pub state: ControlState,
}

/// Plan one overlay into `out`.
pub fn plan_overlay(overlay: &Overlay, out: &mut CommandList) {
    match overlay {
        Overlay::DropdownOptions(dropdown) => plan_dropdown_options(dropdown, out),
    }
}

fn plan_dropdown_options(overlay: &DropdownOverlay, out: &mut CommandList) {
    let Some(first) = overlay.rows.first() else {
        return;
    };
    let extent = overlay
        .rows
        .iter()
        .fold(first.bounds, |acc, row| acc.union(&row.bounds));

    for (i, row) in overlay.rows.iter().enumerate() {
        let fill = match row.state {
            ControlState::Normal if overlay.selected == Some(i) => overlay.selected_color,
            state => overlay.colors.pick(state),
        };
        out.fill_rect(row.bounds, fill);
        let baseline = row.bounds.center().y + overlay.font_size * 0.35;
        out.text(
            row.label.clone(),
            Point::new(row.bounds.x + ROW_TEXT_INSET, baseline),
            overlay.font_size,
            overlay.text,
        );
    }
    out.stroke_rect(extent, overlay.border, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactified_render::DrawCommand;

    fn row(y: f64, state: ControlState) -> OverlayRow {
        OverlayRow {
            value: Value::from("v"),
            label: "Option".into(),
            bounds: Rect::new(0.0, y, 100.0, 30.0),
            state,
        }
    }

    fn overlay(rows: Vec<OverlayRow>, selected: Option<usize>) -> Overlay {
        Overlay::DropdownOptions(DropdownOverlay {
            path: NodePath::from([1]),
            rows,
            selected,
            colors: StateColors::new(Color::rgb(1, 1, 1), Color::rgb(2, 2, 2), Color::rgb(3, 3, 3)),
            selected_color: Color::rgb(9, 9, 9),
            text: Color::WHITE,
            border: Color::BLACK,
            font_size: 14.0,
        })
    }

    fn fills(commands: &[DrawCommand]) -> Vec<Color> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { fill: Some(fill), .. } => Some(*fill),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn row_colors_follow_state_then_selection() {
        let rows = vec![
            row(40.0, ControlState::Normal),
            row(74.0, ControlState::Normal),
            row(108.0, ControlState::Hovered),
            row(142.0, ControlState::Active),
        ];
        let mut out = CommandList::new();
        plan_overlay(&overlay(rows, Some(1)), &mut out);
        assert_eq!(
            fills(out.commands()),
            [Color::rgb(1, 1, 1), Color::rgb(9, 9, 9), Color::rgb(2, 2, 2), Color::rgb(3, 3, 3)]
        );
        let texts = out
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        assert_eq!(texts, 4);
        assert!(matches!(out.commands().last(), Some(DrawCommand::Rect { fill: None, .. })));
    }

    #[test]
    fn empty_overlay_draws_nothing() {
        let mut out = CommandList::new();
        let empty = overlay(Vec::new(), None);
        plan_overlay(&empty, &mut out);
        assert!(out.is_empty());
        assert_eq!(empty.tag(), Tag::Dropdown);
        assert_eq!(empty.path(), &NodePath::from([1]));
    }
}

#![forbid(unsafe_code)]

//! Reactified UI engine public facade.
//!
//! This crate re-exports the common types from the pipeline crates, offers
//! a lightweight prelude, and wires the stages together in [`Ui`]:
//!
//! ```text
//! Element --normalize--> Node --layout--> LaidOutNode --plan--> DrawCommands
//!                                              |
//!                     pointer events ----------+--> Actions
//! ```
//!
//! # Example
//!
//! ```
//! use reactified::prelude::*;
//!
//! let mut ui = Ui::new();
//! let root = element("vstack")
//!     .prop("padding", 8.0)
//!     .child(element("label").prop("text", "Fleet"))
//!     .child(
//!         element("button")
//!             .prop("text", "Launch")
//!             .prop("on-click", Value::List(vec![Value::keyword("launch")])),
//!     );
//! let frame = ui.frame(&root.into(), Rect::new(0.0, 0.0, 320.0, 200.0))?;
//! assert!(!frame.commands.is_empty());
//!
//! let mut actions: Vec<Action> = Vec::new();
//! ui.pointer_down(Point::new(20.0, 40.0), &mut actions);
//! ui.pointer_up(Point::new(20.0, 40.0), &mut actions);
//! assert_eq!(actions, vec![Action::new("launch", vec![])]);
//! # Ok::<(), reactified::Error>(())
//! ```

use std::fmt;

mod ui;

pub use ui::{FramePlan, Ui};

// --- Core re-exports -------------------------------------------------------

pub use reactified_core::{
    Action, ActionSink, Element, ElementMap, FnSink, GestureTag, MalformedTreeError, Node,
    NodePath, Point, PointerEvent, PointerEventKind, Props, Rect, Sides, Tag, Value, element,
    hiccup, normalize,
};

// --- Layout re-exports -----------------------------------------------------

pub use reactified_layout::{Geometry, LaidOutNode, UnknownPrimitiveError, layout_root};

// --- Render re-exports -----------------------------------------------------

pub use reactified_render::{Color, CommandList, DrawCommand};

// --- Planner re-exports ----------------------------------------------------

pub use reactified_widgets::{Plan, RenderContext, Theme, ThemeBuilder, plan, plan_frame};

// --- Interaction re-exports ------------------------------------------------

pub use reactified_runtime::{InteractionConfig, InteractionState};

// --- Errors ---------------------------------------------------------------

/// Top-level error for one frame of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The declarative tree could not be normalized.
    MalformedTree(MalformedTreeError),
    /// A node has no layout handler.
    UnknownPrimitive(UnknownPrimitiveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTree(err) => write!(f, "{err}"),
            Self::UnknownPrimitive(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedTree(err) => Some(err),
            Self::UnknownPrimitive(err) => Some(err),
        }
    }
}

impl From<MalformedTreeError> for Error {
    fn from(err: MalformedTreeError) -> Self {
        Self::MalformedTree(err)
    }
}

impl From<UnknownPrimitiveError> for Error {
    fn from(err: UnknownPrimitiveError) -> Self {
        Self::UnknownPrimitive(err)
    }
}

/// Standard result type for Reactified APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, ActionSink, DrawCommand, Element, Error, FramePlan, Point, PointerEvent, Props,
        Rect, Result, Theme, Ui, Value, element, hiccup,
    };

    pub use crate::{core, layout, render, runtime, widgets};
}

pub use reactified_core as core;
pub use reactified_layout as layout;
pub use reactified_render as render;
pub use reactified_runtime as runtime;
pub use reactified_widgets as widgets;

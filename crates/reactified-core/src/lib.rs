#![forbid(unsafe_code)]

//! Core: geometry, declarative input, normalization and the action and
//! gesture vocabulary shared by every stage of the Reactified UI engine.
//!
//! Per frame the host builds an [`Element`](element::Element) tree from its
//! state, [`normalize`](normalize::normalize)s it into a [`Node`](node::Node)
//! tree, and hands that to the layout engine.

pub mod action;
pub mod element;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod node;
pub mod normalize;
pub mod text;
pub mod value;

pub use action::{Action, ActionSink, FnSink};
pub use element::{Element, ElementMap, element};
pub use event::{GestureTag, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect, Sides};
pub use node::{Node, NodePath, Tag, TagFlags};
pub use normalize::{MalformedTreeError, normalize};
pub use value::{Props, Value};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};

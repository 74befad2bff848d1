#![forbid(unsafe_code)]

//! Interaction engine for the Reactified UI engine.
//!
//! Translates pointer events against a laid-out tree into completed
//! [`Action`](reactified_core::Action)s. The engine never touches
//! application state: it hit-tests, tracks pointer capture across events,
//! and hands actions to an [`ActionSink`](reactified_core::ActionSink).
//!
//! # Example
//!
//! ```
//! use reactified_core::{Action, Node, Point, Props, Rect, Tag, Value};
//! use reactified_layout::layout_root;
//! use reactified_runtime::InteractionState;
//!
//! let button = Node::new(
//!     Tag::Button,
//!     Props::new()
//!         .with("text", "Launch")
//!         .with("on-click", Value::List(vec![Value::keyword("launch")])),
//! );
//! let tree = layout_root(&button, Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();
//!
//! let mut state = InteractionState::new();
//! let mut actions: Vec<Action> = Vec::new();
//! assert!(state.pointer_down(&tree, Point::new(10.0, 10.0), &mut actions));
//! assert!(state.pointer_up(&tree, Point::new(12.0, 10.0), &mut actions));
//! assert_eq!(actions, vec![Action::new("launch", vec![])]);
//! ```

pub mod config;
pub mod gesture;
pub mod hit;
pub mod state;

pub use config::InteractionConfig;
pub use gesture::GestureValue;
pub use hit::{Hit, hit_test};
pub use state::{ActiveInteraction, InteractionState};

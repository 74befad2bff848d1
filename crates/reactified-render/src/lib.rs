#![forbid(unsafe_code)]

//! Render kernel: the backend-agnostic draw command model.
//!
//! - [`DrawCommand`] - the paint vocabulary a backend executes in order
//! - [`CommandList`] - balanced command recording with clip helpers
//! - [`Color`] - packed RGBA

pub mod color;
pub mod command;
pub mod drawing;

pub use color::Color;
pub use command::{DrawCommand, Font, ImageId, Points, ShapeStyle, Transform};
pub use drawing::{CommandList, Draw, is_balanced};

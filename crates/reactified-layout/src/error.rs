#![forbid(unsafe_code)]

//! Layout errors.

use std::fmt;

/// A node type with no layout handler.
///
/// Layout is exhaustive over the known primitives, so this always points
/// at a tree construction bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrimitiveError {
    /// The unrecognized tag name.
    pub tag: String,
}

impl UnknownPrimitiveError {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl fmt::Display for UnknownPrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no layout handler for primitive `{}`", self.tag)
    }
}

impl std::error::Error for UnknownPrimitiveError {}

#![forbid(unsafe_code)]

//! Interaction engine configuration.

/// Limits applied while computing gesture results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Smallest width a window resize reports (default: 120).
    pub min_window_width: f64,
    /// Smallest height a window resize reports (default: 80). A window is
    /// never resized below its header either way.
    pub min_window_height: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_window_width: 120.0,
            min_window_height: 80.0,
        }
    }
}

impl InteractionConfig {
    /// Set both resize minimums.
    #[must_use]
    pub fn with_min_window_size(mut self, width: f64, height: f64) -> Self {
        self.min_window_width = width.max(0.0);
        self.min_window_height = height.max(0.0);
        self
    }
}

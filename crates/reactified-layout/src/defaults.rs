#![forbid(unsafe_code)]

//! Default sizes applied when a prop is missing.
//!
//! Missing numeric props never fail layout; they fall back to these values.

/// Font size for labels, buttons and chrome text.
pub const FONT_SIZE: f64 = 14.0;
/// Extra height added below a label's font size.
pub const LABEL_LINE_PADDING: f64 = 4.0;
/// Text width factor, re-exported from core for convenience.
pub const TEXT_WIDTH_FACTOR: f64 = reactified_core::text::CHAR_WIDTH_FACTOR;

pub const BUTTON_HEIGHT: f64 = 36.0;

pub const SLIDER_HEIGHT: f64 = 32.0;
/// Horizontal inset of the slider track from the slider bounds.
pub const SLIDER_TRACK_PADDING: f64 = 12.0;
pub const SLIDER_TRACK_THICKNESS: f64 = 4.0;
pub const SLIDER_HANDLE_RADIUS: f64 = 8.0;
/// Default step when the `step` prop is missing or non-positive.
pub const SLIDER_STEP: f64 = 0.01;

pub const DROPDOWN_HEADER_HEIGHT: f64 = 36.0;
pub const DROPDOWN_OPTION_HEIGHT: f64 = 30.0;
pub const DROPDOWN_OPTION_GAP: f64 = 4.0;

pub const WINDOW_WIDTH: f64 = 320.0;
pub const WINDOW_HEIGHT: f64 = 240.0;
pub const WINDOW_HEADER_HEIGHT: f64 = 28.0;
pub const WINDOW_CONTENT_PADDING: f64 = 8.0;
/// Side of the square resize handle in a window's bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f64 = 12.0;
/// Inset of the minimize button from the header edges.
pub const MINIMIZE_BUTTON_INSET: f64 = 4.0;
/// Left inset of the window title inside the header.
pub const TITLE_INSET: f64 = 8.0;

/// Horizontal padding added to a tab's text width.
pub const TAB_PADDING: f64 = 16.0;
pub const TAB_GAP: f64 = 2.0;
pub const TAB_FONT_SIZE: f64 = 13.0;

pub const MINIMAP_WIDTH: f64 = 160.0;
pub const MINIMAP_HEIGHT: f64 = 160.0;

pub const BAR_CHART_WIDTH: f64 = 240.0;
pub const BAR_CHART_HEIGHT: f64 = 120.0;
pub const BAR_CHART_PADDING: f64 = 8.0;
pub const BAR_GAP: f64 = 4.0;
/// Room reserved under the bars when `labels` are present.
pub const BAR_LABEL_HEIGHT: f64 = 14.0;

#![forbid(unsafe_code)]

//! Text width approximation.
//!
//! There is no shaping at this layer. Width is estimated as
//! `columns × font_size × 0.55`, where a grapheme counts as one column, or
//! two when it renders wide (CJK, most emoji).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Average advance of one column relative to the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Number of layout columns in `text`.
pub fn columns(text: &str) -> usize {
    text.graphemes(true)
        .map(|g| if UnicodeWidthStr::width(g) >= 2 { 2 } else { 1 })
        .sum()
}

/// Estimated rendered width of `text` at `font_size`.
#[inline]
pub fn estimate_width(text: &str, font_size: f64) -> f64 {
    columns(text) as f64 * font_size * CHAR_WIDTH_FACTOR
}

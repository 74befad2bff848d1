#![forbid(unsafe_code)]

//! Theme with semantic color slots.
//!
//! Interactive surfaces use [`StateColors`], one color per
//! [`ControlState`]. A node's own `background` prop overrides the theme slot
//! for that node; its hovered and active shades are derived from it.
//!
//! # Example
//! ```
//! use reactified_render::Color;
//! use reactified_widgets::theme::Theme;
//!
//! let theme = Theme::builder()
//!     .accent(Color::rgb(255, 160, 40))
//!     .text(Color::rgb(230, 230, 230))
//!     .build();
//! assert_eq!(theme.accent, Color::rgb(255, 160, 40));
//! ```

use reactified_core::value::Props;
use reactified_render::Color;

/// Visual state of an interactive surface.
///
/// Priority when several apply: active > hovered > normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Normal,
    Hovered,
    /// Pressed or being dragged.
    Active,
}

impl ControlState {
    /// Resolve the three-way priority.
    #[inline]
    pub fn resolve(active: bool, hovered: bool) -> Self {
        if active {
            Self::Active
        } else if hovered {
            Self::Hovered
        } else {
            Self::Normal
        }
    }
}

/// One color per [`ControlState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub normal: Color,
    pub hovered: Color,
    pub active: Color,
}

impl StateColors {
    pub const fn new(normal: Color, hovered: Color, active: Color) -> Self {
        Self {
            normal,
            hovered,
            active,
        }
    }

    /// Derive hovered (lighter) and active (darker) shades from `base`.
    pub fn derived(base: Color) -> Self {
        Self::new(base, base.mix(Color::WHITE, 0.15), base.mix(Color::BLACK, 0.25))
    }

    #[inline]
    pub const fn pick(&self, state: ControlState) -> Color {
        match state {
            ControlState::Normal => self.normal,
            ControlState::Hovered => self.hovered,
            ControlState::Active => self.active,
        }
    }

    /// `self`, or shades derived from the node's `background` prop.
    pub fn or_background(self, props: &Props) -> Self {
        prop_color(props, "background").map_or(self, Self::derived)
    }
}

/// Color prop under `key`, if present and readable.
pub fn prop_color(props: &Props, key: &str) -> Option<Color> {
    props.get(key).and_then(Color::from_value)
}

/// Palette used by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Frame clear color.
    pub background: Color,
    /// Window bodies and chart backgrounds.
    pub surface: Color,
    pub border: Color,
    /// Window header; `active` while the window is being moved.
    pub header: StateColors,
    pub text: Color,
    pub text_muted: Color,
    /// Slider fill, bars and other highlights.
    pub accent: Color,
    /// Buttons, dropdown headers, tabs and window chrome buttons.
    pub control: StateColors,
    pub track: Color,
    pub handle: StateColors,
    /// Dropdown option rows.
    pub option: StateColors,
    /// The option row matching the dropdown's value.
    pub selected: Color,
    pub minimap: Color,
    pub marker: Color,
    /// Minimap view rectangle outline.
    pub view: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(8, 10, 18),
            surface: Color::rgba(22, 26, 40, 235),
            border: Color::rgb(70, 82, 110),
            header: StateColors::new(
                Color::rgb(34, 40, 62),
                Color::rgb(42, 50, 76),
                Color::rgb(52, 62, 96),
            ),
            text: Color::rgb(220, 226, 240),
            text_muted: Color::rgb(130, 138, 160),
            accent: Color::rgb(90, 170, 255),
            control: StateColors::new(
                Color::rgb(44, 52, 78),
                Color::rgb(58, 70, 104),
                Color::rgb(30, 36, 56),
            ),
            track: Color::rgb(50, 56, 76),
            handle: StateColors::new(
                Color::rgb(200, 210, 230),
                Color::rgb(235, 240, 250),
                Color::rgb(90, 170, 255),
            ),
            option: StateColors::new(
                Color::rgb(30, 36, 56),
                Color::rgb(52, 62, 96),
                Color::rgb(24, 28, 44),
            ),
            selected: Color::rgb(40, 80, 130),
            minimap: Color::rgba(12, 16, 28, 230),
            marker: Color::rgb(255, 200, 90),
            view: Color::rgb(220, 226, 240),
        }
    }
}

impl Theme {
    /// Start from the default palette.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

/// Builder for [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.theme.background = color;
        self
    }

    #[must_use]
    pub fn surface(mut self, color: Color) -> Self {
        self.theme.surface = color;
        self
    }

    #[must_use]
    pub fn border(mut self, color: Color) -> Self {
        self.theme.border = color;
        self
    }

    #[must_use]
    pub fn text(mut self, color: Color) -> Self {
        self.theme.text = color;
        self
    }

    #[must_use]
    pub fn accent(mut self, color: Color) -> Self {
        self.theme.accent = color;
        self
    }

    #[must_use]
    pub fn control(mut self, colors: StateColors) -> Self {
        self.theme.control = colors;
        self
    }

    #[must_use]
    pub fn option(mut self, colors: StateColors) -> Self {
        self.theme.option = colors;
        self
    }

    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_priority() {
        assert_eq!(ControlState::resolve(true, true), ControlState::Active);
        assert_eq!(ControlState::resolve(false, true), ControlState::Hovered);
        assert_eq!(ControlState::resolve(false, false), ControlState::Normal);
    }

    #[test]
    fn background_prop_overrides_slot() {
        let theme = Theme::default();
        let props = Props::new().with("background", "#ff0000");
        let colors = theme.control.or_background(&props);
        assert_eq!(colors.normal, Color::rgb(255, 0, 0));
        assert_ne!(colors.hovered, colors.normal);
        assert_ne!(colors.active, colors.normal);
        assert_eq!(theme.control.or_background(&Props::new()), theme.control);
    }

    #[test]
    fn builder_overrides_only_named_slots() {
        let theme = Theme::builder().text(Color::WHITE).build();
        assert_eq!(theme.text, Color::WHITE);
        assert_eq!(theme.accent, Theme::default().accent);
    }
}

#![forbid(unsafe_code)]

//! Laid-out tree types.
//!
//! A [`LaidOutNode`] mirrors the [`Node`](reactified_core::node::Node) it was
//! built from and adds a [`Layout`]: resolved bounds plus whatever derived
//! geometry the primitive needs downstream (slider track, window chrome,
//! dropdown rows). The planner and the interaction engine read geometry from
//! here instead of recomputing it, so both always agree with what was laid
//! out.

use crate::defaults::{SLIDER_HANDLE_RADIUS, SLIDER_TRACK_THICKNESS};
use reactified_core::geometry::{EPSILON, Point, Rect, Sides};
use reactified_core::node::{NodePath, Tag};
use reactified_core::value::{Props, Value};

/// A node with resolved layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutNode {
    pub tag: Tag,
    pub props: Props,
    pub layout: Layout,
    pub children: Vec<LaidOutNode>,
}

/// Resolved bounds and primitive-specific geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub bounds: Rect,
    pub geometry: Geometry,
}

/// Derived geometry, one variant per primitive family.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    /// Nothing beyond the bounds (buttons).
    #[default]
    None,
    /// Stacks: resolved padding and the content rectangle inside it.
    Stack { padding: Sides, content: Rect },
    /// Labels: font size and text baseline origin.
    Label { font_size: f64, baseline: Point },
    Slider(SliderGeometry),
    Dropdown(DropdownGeometry),
    Window(WindowGeometry),
    Minimap(MinimapGeometry),
    /// Bar charts: one rectangle per value.
    Chart { bars: Vec<Rect> },
}

/// Slider range, snapped value and track/handle placement.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderGeometry {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Snapped and clamped value.
    pub value: f64,
    /// `(value - min) / (max - min)`, in `[0, 1]`.
    pub ratio: f64,
    pub track: Rect,
    pub handle: Point,
    pub handle_radius: f64,
}

impl SliderGeometry {
    /// Place the track `inset` in from both sides of `bounds` and the
    /// handle at `ratio` along it.
    pub(crate) fn fit(&mut self, bounds: &Rect, inset: f64) {
        let inset = inset.clamp(0.0, bounds.width / 2.0);
        self.track = Rect::new(
            bounds.x + inset,
            bounds.y + (bounds.height - SLIDER_TRACK_THICKNESS) / 2.0,
            bounds.width - 2.0 * inset,
            SLIDER_TRACK_THICKNESS,
        );
        self.handle = Point::new(self.track.x + self.ratio * self.track.width, bounds.center().y);
        self.handle_radius = SLIDER_HANDLE_RADIUS.min(bounds.height / 2.0);
    }

    /// Snap `raw` to the nearest step from `min`, then clamp to the range.
    pub fn snap(&self, raw: f64) -> f64 {
        snap_value(raw, self.min, self.max, self.step)
    }

    /// Value under the horizontal pointer position `x`.
    ///
    /// Positions outside the track clamp to the range ends.
    pub fn value_at(&self, x: f64) -> f64 {
        let ratio = ((x - self.track.x) / self.track.width.max(EPSILON)).clamp(0.0, 1.0);
        self.snap(self.min + ratio * (self.max - self.min))
    }
}

/// Snap to `step` from `min` and clamp into `[min, max]`.
pub(crate) fn snap_value(raw: f64, min: f64, max: f64, step: f64) -> f64 {
    let snapped = if step > 0.0 {
        min + ((raw - min) / step).round() * step
    } else {
        raw
    };
    snapped.clamp(min, max)
}

/// World extent shown by a minimap.
///
/// The minimap bounds show the rectangle `(0, 0, world_width,
/// world_height)`, scaled independently on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapGeometry {
    pub world_width: f64,
    pub world_height: f64,
}

impl MinimapGeometry {
    /// World point under the screen point `p` of a minimap at `bounds`.
    pub fn to_world(&self, bounds: &Rect, p: Point) -> Point {
        Point::new(
            (p.x - bounds.x) / bounds.width.max(EPSILON) * self.world_width,
            (p.y - bounds.y) / bounds.height.max(EPSILON) * self.world_height,
        )
    }

    /// Screen point for the world point `p`.
    pub fn to_screen(&self, bounds: &Rect, p: Point) -> Point {
        Point::new(
            bounds.x + p.x / self.world_width.max(EPSILON) * bounds.width,
            bounds.y + p.y / self.world_height.max(EPSILON) * bounds.height,
        )
    }

    /// Screen rectangle for the world rectangle `r`.
    pub fn rect_to_screen(&self, bounds: &Rect, r: &Rect) -> Rect {
        let origin = self.to_screen(bounds, Point::new(r.x, r.y));
        let far = self.to_screen(bounds, Point::new(r.right(), r.bottom()));
        Rect::new(origin.x, origin.y, far.x - origin.x, far.y - origin.y)
    }
}

/// Dropdown header and option rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownGeometry {
    pub header: Rect,
    pub expanded: bool,
    /// Option rows; empty while collapsed.
    pub options: Vec<OptionRow>,
    /// Index of the option whose value matches the `value` prop.
    pub selected: Option<usize>,
}

impl DropdownGeometry {
    /// Index of the option row containing `point`.
    pub fn option_at(&self, point: Point) -> Option<usize> {
        self.options.iter().position(|row| row.bounds.contains(point))
    }
}

/// One option row (also used for tabs, which have the same shape).
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub value: Value,
    pub label: String,
    pub bounds: Rect,
}

/// A tab in a tabbed window's header.
pub type TabGeometry = OptionRow;

/// Window chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    pub header: Rect,
    pub minimize_button: Rect,
    /// Bottom-right resize handle; `None` when not resizable or minimized.
    pub resize_handle: Option<Rect>,
    /// Area children are laid out in.
    pub content: Rect,
    pub minimized: bool,
    /// Height the window has when not minimized.
    pub expanded_height: f64,
    pub tabs: Vec<TabGeometry>,
    pub active_tab: Option<usize>,
}

impl WindowGeometry {
    /// Index of the tab containing `point`.
    pub fn tab_at(&self, point: Point) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.bounds.contains(point))
    }
}

impl Geometry {
    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Geometry::None | Geometry::Minimap(_) => {}
            Geometry::Stack { content, .. } => *content = content.translate(dx, dy),
            Geometry::Label { baseline, .. } => {
                *baseline = Point::new(baseline.x + dx, baseline.y + dy);
            }
            Geometry::Slider(slider) => {
                slider.track = slider.track.translate(dx, dy);
                slider.handle = Point::new(slider.handle.x + dx, slider.handle.y + dy);
            }
            Geometry::Dropdown(dropdown) => {
                dropdown.header = dropdown.header.translate(dx, dy);
                for row in &mut dropdown.options {
                    row.bounds = row.bounds.translate(dx, dy);
                }
            }
            Geometry::Window(window) => {
                window.header = window.header.translate(dx, dy);
                window.minimize_button = window.minimize_button.translate(dx, dy);
                window.resize_handle = window.resize_handle.map(|r| r.translate(dx, dy));
                window.content = window.content.translate(dx, dy);
                for tab in &mut window.tabs {
                    tab.bounds = tab.bounds.translate(dx, dy);
                }
            }
            Geometry::Chart { bars } => {
                for bar in bars {
                    *bar = bar.translate(dx, dy);
                }
            }
        }
    }

    /// Cut every derived rectangle down to `bounds`.
    ///
    /// Dropdown option rows keep their place since they paint as an
    /// overlay.
    fn clamp(&mut self, bounds: &Rect) {
        match self {
            Geometry::None | Geometry::Label { .. } | Geometry::Minimap(_) => {}
            // Translation already moved the track, so its offset is the inset.
            Geometry::Slider(slider) => {
                let inset = slider.track.x - bounds.x;
                slider.fit(bounds, inset);
            }
            Geometry::Stack { padding, content } => *content = bounds.inner(*padding),
            Geometry::Dropdown(dropdown) => dropdown.header = dropdown.header.clamp_within(bounds),
            Geometry::Window(window) => {
                window.header = window.header.clamp_within(bounds);
                window.minimize_button = window.minimize_button.clamp_within(bounds);
                window.resize_handle = window.resize_handle.map(|r| r.clamp_within(bounds));
                window.content = window.content.clamp_within(bounds);
                for tab in &mut window.tabs {
                    tab.bounds = tab.bounds.clamp_within(&window.header);
                }
            }
            Geometry::Chart { bars } => {
                for bar in bars {
                    *bar = bar.clamp_within(bounds);
                }
            }
        }
    }
}

impl LaidOutNode {
    /// A childless laid-out leaf.
    pub fn leaf(tag: Tag, props: Props, bounds: Rect, geometry: Geometry) -> Self {
        Self {
            tag,
            props,
            layout: Layout { bounds, geometry },
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    /// Rectangle children are laid out in.
    ///
    /// Stacks and windows report their padded content area; every other
    /// primitive reports its bounds.
    pub fn content_rect(&self) -> Rect {
        match &self.layout.geometry {
            Geometry::Stack { content, .. } => *content,
            Geometry::Window(window) => window.content,
            _ => self.layout.bounds,
        }
    }

    /// Move this subtree by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.layout.bounds = self.layout.bounds.translate(dx, dy);
        self.layout.geometry.translate(dx, dy);
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// Move this subtree so its bounds start at `origin`.
    pub fn move_to(&mut self, origin: Point) {
        let (dx, dy) = origin.delta_from(Point::new(self.layout.bounds.x, self.layout.bounds.y));
        if dx != 0.0 || dy != 0.0 {
            self.translate(dx, dy);
        }
    }

    /// Force this subtree inside `container`.
    ///
    /// The subtree is shifted so its origin lands inside the container,
    /// its extents are cut at the container's far edges, and any child that
    /// no longer fits the new content rectangle is clamped in turn.
    pub fn clamp_into(&mut self, container: &Rect) {
        if container.contains_rect(&self.layout.bounds) {
            return;
        }
        let clamped = self.layout.bounds.clamp_within(container);
        self.move_to(Point::new(clamped.x, clamped.y));
        self.layout.bounds = clamped;
        self.layout.geometry.clamp(&clamped);
        let content = self.content_rect();
        for child in &mut self.children {
            child.clamp_into(&content);
        }
    }

    /// Visit every node pre-order with its path from `self`.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&NodePath, &LaidOutNode),
    {
        self.walk_from(&NodePath::root(), &mut visit);
    }

    fn walk_from<F>(&self, path: &NodePath, visit: &mut F)
    where
        F: FnMut(&NodePath, &LaidOutNode),
    {
        visit(path, self);
        for (i, child) in self.children.iter().enumerate() {
            child.walk_from(&path.child(i), visit);
        }
    }

    /// Node at `path`, relative to `self`.
    pub fn at_path(&self, path: &NodePath) -> Option<&LaidOutNode> {
        path.indices()
            .try_fold(self, |node, index| node.children.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(bounds: Rect, padding: f64, children: Vec<LaidOutNode>) -> LaidOutNode {
        let padding = Sides::all(padding);
        LaidOutNode {
            tag: Tag::VStack,
            props: Props::new(),
            layout: Layout {
                bounds,
                geometry: Geometry::Stack {
                    padding,
                    content: bounds.inner(padding),
                },
            },
            children,
        }
    }

    fn leaf(bounds: Rect) -> LaidOutNode {
        LaidOutNode::leaf(Tag::Button, Props::new(), bounds, Geometry::None)
    }

    #[test]
    fn translate_moves_geometry_and_children() {
        let mut node = stack(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            10.0,
            vec![leaf(Rect::new(10.0, 10.0, 20.0, 20.0))],
        );
        node.translate(5.0, 7.0);
        assert_eq!(node.bounds(), Rect::new(5.0, 7.0, 100.0, 100.0));
        assert_eq!(node.content_rect(), Rect::new(15.0, 17.0, 80.0, 80.0));
        assert_eq!(node.children[0].bounds(), Rect::new(15.0, 17.0, 20.0, 20.0));
    }

    #[test]
    fn clamp_into_keeps_descendants_inside() {
        let mut node = stack(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            4.0,
            vec![leaf(Rect::new(4.0, 150.0, 50.0, 46.0))],
        );
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        node.clamp_into(&container);
        assert!(container.contains_rect(&node.bounds()));
        let content = node.content_rect();
        assert!(content.contains_rect(&node.children[0].bounds()));
    }

    #[test]
    fn walk_and_at_path_agree() {
        let tree = stack(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            0.0,
            vec![
                leaf(Rect::new(0.0, 0.0, 10.0, 10.0)),
                stack(
                    Rect::new(0.0, 10.0, 50.0, 50.0),
                    0.0,
                    vec![leaf(Rect::new(0.0, 10.0, 5.0, 5.0))],
                ),
            ],
        );
        let mut paths = Vec::new();
        tree.walk(|path, node| {
            assert_eq!(tree.at_path(path).map(LaidOutNode::bounds), Some(node.bounds()));
            paths.push(path.to_string());
        });
        assert_eq!(paths, ["/", "/0", "/1", "/1/0"]);
        assert!(tree.at_path(&NodePath::from([3])).is_none());
    }

    #[test]
    fn slider_value_at_clamps_outside_track() {
        let slider = SliderGeometry {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            value: 0.0,
            ratio: 0.0,
            track: Rect::new(10.0, 0.0, 100.0, 4.0),
            handle: Point::new(10.0, 2.0),
            handle_radius: 8.0,
        };
        assert_eq!(slider.value_at(-50.0), 0.0);
        assert_eq!(slider.value_at(500.0), 10.0);
        assert_eq!(slider.value_at(64.0), 5.0);
    }
}

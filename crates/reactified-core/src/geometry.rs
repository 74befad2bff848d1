#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical units (before any device scale is applied) with
//! the origin at the top-left corner and `y` growing downwards.

/// Tolerance used when comparing laid-out edges.
pub const EPSILON: f64 = 1e-9;

/// A point in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `self` relative to `origin`.
    #[inline]
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle used for bounds, clipping and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area in square units. Negative extents count as zero.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// True when either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (right/bottom edges excluded).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check if `other` lies entirely inside `self`, within [`EPSILON`].
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x + EPSILON >= self.x
            && other.y + EPSILON >= self.y
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Move the rectangle by the given offset.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Same origin, new size.
    #[inline]
    pub fn with_size(&self, width: f64, height: f64) -> Rect {
        Rect::new(self.x, self.y, width, height)
    }

    /// Create a new rectangle inside the current one with the given margin.
    ///
    /// Extents never go negative.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: (self.width - margin.horizontal_sum()).max(0.0),
            height: (self.height - margin.vertical_sum()).max(0.0),
        }
    }

    /// Grow the rectangle outwards by `margin`.
    pub fn outer(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x - margin.left,
            y: self.y - margin.top,
            width: self.width + margin.horizontal_sum(),
            height: self.height + margin.vertical_sum(),
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Overlapping area, or `None` if the rectangles don't overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Clamp this rectangle so it lies inside `container`.
    ///
    /// The origin is pulled into the container first, then the extents are
    /// cut at the container's far edges. The result may be zero-sized but is
    /// always contained.
    pub fn clamp_within(&self, container: &Rect) -> Rect {
        let x = self.x.clamp(container.x, container.right().max(container.x));
        let y = self.y.clamp(container.y, container.bottom().max(container.y));
        let width = self.width.max(0.0).min((container.right() - x).max(0.0));
        let height = self.height.max(0.0).min((container.bottom() - y).max(0.0));
        Rect::new(x, y, width, height)
    }
}

/// Per-edge insets for padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// No inset on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Equal inset on every edge.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Sides};

    #[test]
    fn rect_contains_excludes_far_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Point::new(2.0, 3.0)));
        assert!(rect.contains(Point::new(5.9, 7.9)));
        assert!(!rect.contains(Point::new(6.0, 3.0)));
        assert!(!rect.contains(Point::new(2.0, 8.0)));
    }

    #[test]
    fn rect_inner_never_goes_negative() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let inner = rect.inner(Sides::new(3.0, 2.0, 3.0, 4.0));
        assert_eq!(inner, Rect::new(4.0, 3.0, 4.0, 0.0));
    }

    #[test]
    fn inner_then_outer_round_trips() {
        let rect = Rect::new(1.0, 2.0, 30.0, 40.0);
        let pad = Sides::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.inner(pad).outer(pad), rect);
    }

    #[test]
    fn clamp_within_cuts_overflow() {
        let container = Rect::new(0.0, 0.0, 100.0, 50.0);
        let child = Rect::new(80.0, 40.0, 50.0, 30.0);
        let clamped = child.clamp_within(&container);
        assert_eq!(clamped, Rect::new(80.0, 40.0, 20.0, 10.0));
        assert!(container.contains_rect(&clamped));
    }

    #[test]
    fn clamp_within_pulls_origin_inside() {
        let container = Rect::new(10.0, 10.0, 20.0, 20.0);
        let child = Rect::new(-5.0, 50.0, 8.0, 8.0);
        let clamped = child.clamp_within(&container);
        assert_eq!(clamped, Rect::new(10.0, 30.0, 8.0, 0.0));
        assert!(container.contains_rect(&clamped));
    }

    #[test]
    fn intersection_and_union() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 6.0, 6.0));
        assert_eq!(a.intersection_opt(&Rect::new(5.0, 5.0, 1.0, 1.0)), None);
    }
}

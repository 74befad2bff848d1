#![forbid(unsafe_code)]

//! The draw command vocabulary.
//!
//! Commands are plain data: a backend executes a list of them strictly in
//! order, so emission order is paint order. `Save`/`Restore` pairs nest;
//! lists built through [`CommandList`](crate::drawing::CommandList) are
//! always balanced.

use crate::color::Color;
use reactified_core::geometry::{Point, Rect};
use smallvec::SmallVec;
use std::fmt;

/// Fill and stroke settings for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    /// Stroke width in logical units; ignored without `stroke`.
    pub stroke_width: f64,
}

impl ShapeStyle {
    /// Filled, no outline.
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Outline only.
    pub const fn stroke(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }

    /// Add an outline to this style.
    #[must_use]
    pub const fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

/// Font selection. Only the size is meaningful at this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
}

impl Font {
    pub const fn new(size: f64) -> Self {
        Self { size }
    }
}

/// Opaque handle to an image owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// 2D affine transform `[a b c d e f]` mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub [f64; 6]);

impl Transform {
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self([1.0, 0.0, 0.0, 1.0, dx, dy])
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// Rotation about the origin; `angle_deg` is clockwise in screen space.
    pub fn rotate(angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Self([c, s, -s, c, 0.0, 0.0])
    }

    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }
}

/// Polygon vertex list; most polygons drawn by the engine are triangles or
/// quads.
pub type Points = SmallVec<[Point; 4]>;

/// A single backend-agnostic paint instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Color },
    Rect {
        bounds: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: Option<f64>,
    },
    Circle {
        center: Point,
        radius: f64,
        style: ShapeStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: ShapeStyle,
    },
    PolygonFill { points: Points, style: ShapeStyle },
    PolygonStroke { points: Points, style: ShapeStyle },
    /// Text drawn with its baseline at `position.y`.
    Text {
        text: String,
        position: Point,
        font: Font,
        color: Color,
    },
    ImageRect {
        image: ImageId,
        src: Rect,
        dst: Rect,
        transform: Option<Transform>,
    },
    /// Push the current transform and clip state.
    Save,
    /// Pop the state pushed by the matching `Save`.
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { angle_deg: f64 },
    Scale { sx: f64, sy: f64 },
    /// Intersect the current clip with `bounds`.
    ClipRect { bounds: Rect },
}

impl DrawCommand {
    /// Kebab-case operation name, as used in logs and debugging dumps.
    pub const fn op(&self) -> &'static str {
        match self {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Line { .. } => "line",
            DrawCommand::PolygonFill { .. } => "polygon-fill",
            DrawCommand::PolygonStroke { .. } => "polygon-stroke",
            DrawCommand::Text { .. } => "text",
            DrawCommand::ImageRect { .. } => "image-rect",
            DrawCommand::Save => "save",
            DrawCommand::Restore => "restore",
            DrawCommand::Translate { .. } => "translate",
            DrawCommand::Rotate { .. } => "rotate",
            DrawCommand::Scale { .. } => "scale",
            DrawCommand::ClipRect { .. } => "clip-rect",
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Text { text, position, .. } => {
                write!(f, "text {text:?} @ ({}, {})", position.x, position.y)
            }
            DrawCommand::Rect { bounds, .. } | DrawCommand::ClipRect { bounds } => write!(
                f,
                "{} [{} {} {} {}]",
                self.op(),
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height
            ),
            other => f.write_str(other.op()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_helpers() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
        assert_eq!(Transform::translate(1.0, -1.0).apply(p), Point::new(3.0, 2.0));
        assert_eq!(Transform::scale(2.0, 0.5).apply(p), Point::new(4.0, 1.5));
        let r = Transform::rotate(90.0).apply(Point::new(1.0, 0.0));
        assert!((r.x).abs() < 1e-12 && (r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn op_names() {
        assert_eq!(DrawCommand::Save.op(), "save");
        assert_eq!(
            DrawCommand::ClipRect {
                bounds: Rect::from_size(4.0, 2.0)
            }
            .to_string(),
            "clip-rect [0 0 4 2]"
        );
    }
}

#![forbid(unsafe_code)]

//! Command list builder and drawing helpers.
//!
//! [`CommandList`] records [`DrawCommand`]s and tracks `save`/`restore`
//! depth so callers cannot emit an unbalanced list: unmatched restores are
//! dropped and [`CommandList::finish`] closes anything left open. The
//! [`Draw`] trait layers ergonomic helpers on top of raw pushes so planners
//! don't hand-assemble command structs.

use crate::color::Color;
use crate::command::{DrawCommand, Font, Points, ShapeStyle};
use reactified_core::geometry::{Point, Rect};

/// An ordered, balanced list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl CommandList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            depth: 0,
        }
    }

    /// Append a command.
    ///
    /// `Save`/`Restore` pushed here are tracked like [`save`](Self::save) and
    /// [`restore`](Self::restore).
    pub fn push(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Save => self.save(),
            DrawCommand::Restore => self.restore(),
            other => self.commands.push(other),
        }
    }

    pub fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    /// Pop one saved state. A restore with nothing saved is ignored.
    pub fn restore(&mut self) {
        if self.depth == 0 {
            reactified_core::warn!("restore without matching save ignored");
            return;
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::Restore);
    }

    /// Run `f` between `save` + `clip-rect` and `restore`.
    pub fn clipped(&mut self, clip: Rect, f: impl FnOnce(&mut Self)) {
        self.save();
        self.commands.push(DrawCommand::ClipRect { bounds: clip });
        let depth = self.depth;
        f(self);
        while self.depth >= depth {
            self.restore();
        }
    }

    /// Append every command from `other`, which must itself be balanced.
    pub fn extend(&mut self, other: CommandList) {
        self.commands.extend(other.finish());
    }

    /// Current `save` nesting depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Close any open saves and return the commands.
    #[must_use]
    pub fn finish(mut self) -> Vec<DrawCommand> {
        while self.depth > 0 {
            self.restore();
        }
        self.commands
    }
}

/// True when every `Restore` matches an earlier `Save` and none are left
/// open.
pub fn is_balanced(commands: &[DrawCommand]) -> bool {
    let mut depth = 0usize;
    for command in commands {
        match command {
            DrawCommand::Save => depth += 1,
            DrawCommand::Restore => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Drawing helpers over a command sink.
pub trait Draw {
    /// Record one command.
    fn command(&mut self, command: DrawCommand);

    /// Filled rectangle.
    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.command(DrawCommand::Rect {
            bounds,
            fill: Some(color),
            stroke: None,
            stroke_width: None,
        });
    }

    /// Rectangle outline.
    fn stroke_rect(&mut self, bounds: Rect, color: Color, width: f64) {
        self.command(DrawCommand::Rect {
            bounds,
            fill: None,
            stroke: Some(color),
            stroke_width: Some(width),
        });
    }

    /// Filled rectangle with an outline, as one command.
    fn panel(&mut self, bounds: Rect, fill: Color, border: Color) {
        self.command(DrawCommand::Rect {
            bounds,
            fill: Some(fill),
            stroke: Some(border),
            stroke_width: Some(1.0),
        });
    }

    fn circle(&mut self, center: Point, radius: f64, style: ShapeStyle) {
        self.command(DrawCommand::Circle {
            center,
            radius,
            style,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.command(DrawCommand::Line {
            from,
            to,
            style: ShapeStyle::stroke(color, width),
        });
    }

    fn fill_polygon(&mut self, points: impl IntoIterator<Item = Point>, color: Color) {
        self.command(DrawCommand::PolygonFill {
            points: points.into_iter().collect::<Points>(),
            style: ShapeStyle::fill(color),
        });
    }

    /// Text with its baseline at `position.y`.
    fn text(&mut self, text: impl Into<String>, position: Point, size: f64, color: Color) {
        self.command(DrawCommand::Text {
            text: text.into(),
            position,
            font: Font::new(size),
            color,
        });
    }
}

impl Draw for CommandList {
    fn command(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

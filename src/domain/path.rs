//! Path primitives and their serialized form.

use std::fmt::{self, Write};

use serde::Serialize;

/// Fractional digits kept for every emitted coordinate.
pub const PRECISION: i32 = 3;

/// A point in output space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates rounded to [`PRECISION`] digits.
    pub fn rounded(self) -> Self {
        Self {
            x: round_coord(self.x),
            y: round_coord(self.y),
        }
    }
}

/// A single path primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    /// Pen up, jump to a point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, p) = match self {
            PathCommand::MoveTo(p) => ('M', p),
            PathCommand::LineTo(p) => ('L', p),
        };
        write!(f, "{key}{} {}", p.x, p.y)
    }
}

/// Accumulates path primitives in emission order.
///
/// Always starts with a move to the origin. Coordinates are rounded to
/// [`PRECISION`] digits as they are added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(Point::ORIGIN)],
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p.rounded()));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p.rounded()));
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of line-to primitives.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// Serialize as SVG path data, e.g. `M0 0L600 0`.
    pub fn to_path_data(&self) -> String {
        let mut data = String::with_capacity(self.commands.len() * 16);
        for cmd in &self.commands {
            // writing to a String cannot fail
            let _ = write!(data, "{cmd}");
        }
        data
    }
}

/// Round to [`PRECISION`] digits, folding negative zero into zero.
pub fn round_coord(v: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    let r = (v * scale).round() / scale;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Format a number with at most [`PRECISION`] digits and no trailing zeros.
pub fn format_number(v: f64) -> String {
    round_coord(v).to_string()
}

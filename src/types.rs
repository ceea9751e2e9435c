//! Value types describing one logo request.
//!
//! A request is built once from the prompt answers, never mutated, and
//! discarded after rendering.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::defaults;
use crate::errors::Error;

/// The closed set of logo shapes.
///
/// Each variant carries its own geometry fields, so a kind parsed from user
/// input arrives with the fixed default sizes already attached, and callers
/// constructing a kind directly can override them. Adding a shape means
/// adding a variant here and a match arm in [`crate::svg::shape_fragment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle { radius: f64 },
    Triangle { side: f64 },
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
}

impl ShapeKind {
    /// Canonical lowercase name, as matched on input.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Square { .. } => "square",
            ShapeKind::Rectangle { .. } => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    /// Match a user-supplied shape name, ASCII case-insensitively, against
    /// the known kinds. The name is taken as given; trimming is the
    /// caller's job.
    fn from_str(name: &str) -> Result<Self, Error> {
        match name.to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle {
                radius: defaults::CIRCLE_RADIUS,
            }),
            "triangle" => Ok(ShapeKind::Triangle {
                side: defaults::TRIANGLE_SIDE,
            }),
            "square" => Ok(ShapeKind::Square {
                side: defaults::SQUARE_SIDE,
            }),
            "rectangle" => Ok(ShapeKind::Rectangle {
                width: defaults::RECT_WIDTH,
                height: defaults::RECT_HEIGHT,
            }),
            _ => Err(Error::InvalidShape {
                name: name.to_string(),
            }),
        }
    }
}

/// One shape instance: a kind plus the anchor point and a fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    /// The point the shape is visually centered on.
    pub center: DVec2,
    /// Free-form fill color, inserted into the markup unvalidated.
    pub fill: String,
}

impl ShapeSpec {
    /// A spec anchored on the default canvas center.
    pub fn new(kind: ShapeKind, fill: impl Into<String>) -> Self {
        Self {
            kind,
            center: defaults::CENTER,
            fill: fill.into(),
        }
    }
}

/// The complete, immutable description of one logo-rendering request.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoSpec {
    /// Label drawn over the shape. Neither escaped nor validated.
    pub text: String,
    /// Free-form text color.
    pub text_color: String,
    pub shape: ShapeSpec,
}

impl LogoSpec {
    pub fn new(text: impl Into<String>, text_color: impl Into<String>, shape: ShapeSpec) -> Self {
        Self {
            text: text.into(),
            text_color: text_color.into(),
            shape,
        }
    }
}

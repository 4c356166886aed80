//! Pixel and grid geometry.
//!
//! Positions are absolute pixel coordinates on the host's display
//! surface. Grid coordinates address squares within a card layout and
//! never reach the host. `Scale` converts event coordinates reported
//! against a resized display back into layout pixels.

use serde::{Deserialize, Serialize};

/// A point in pixel coordinates.
///
/// Doubles as a pixel offset: `Position + Position` is componentwise,
/// which is how card origins and layout offsets compose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a position from pixel coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply a display scale factor, rounding to the nearest pixel.
    #[must_use]
    pub fn scaled(self, scale: Scale) -> Self {
        Self {
            x: (self.x as f32 * scale.x).round() as i32,
            y: (self.y as f32 * scale.y).round() as i32,
        }
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned pixel rectangle, used for sprite bounds and click
/// hit-testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of the given size centered on a point.
    ///
    /// Sprites are anchored by their center; their bounds derive from
    /// the center and the atlas size.
    #[must_use]
    pub const fn centered_at(center: Position, width: i32, height: i32) -> Self {
        Self {
            x: center.x - width / 2,
            y: center.y - height / 2,
            width,
            height,
        }
    }

    /// The center point of this rectangle.
    #[must_use]
    pub const fn center(self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Point-in-rectangle test. Edges on the left/top are inclusive,
    /// right/bottom exclusive.
    #[must_use]
    pub const fn contains(self, point: Position) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// A square's (column, row) address within a card layout.
///
/// Columns key the number pools; rows only affect placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub col: u8,
    pub row: u8,
}

impl GridCoord {
    /// Create a grid coordinate.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}

/// Display scale factor applied to incoming event coordinates.
///
/// Hosts that letterbox or resize their window report events in window
/// pixels; the scale maps those back into layout pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Create a scale factor.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

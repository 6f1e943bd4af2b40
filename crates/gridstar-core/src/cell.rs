//! The [`Cell`] type: one character at one grid position.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::Point;

/// The wall sentinel. Every other character is traversable.
pub const WALL: char = '#';

/// A grid cell: the character read from the map text and its position.
///
/// Two cells are equal when they sit at the same position, whatever their
/// values. Per-search cost and parent live on the owning
/// [`Grid`](crate::Grid), not here.
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    value: char,
    pos: Point,
}

impl Cell {
    /// Create a cell holding `value` at `pos`.
    #[inline]
    pub const fn new(value: char, pos: Point) -> Self {
        Self { value, pos }
    }

    /// The character at this position.
    #[inline]
    pub const fn value(self) -> char {
        self.value
    }

    /// Position in the grid.
    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    /// Whether this cell is the wall sentinel.
    #[inline]
    pub const fn is_wall(self) -> bool {
        self.value == WALL
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({:?} at {})", self.value, self.pos)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.pos)
    }
}

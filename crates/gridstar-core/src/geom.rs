//! Geometry primitives: [`Point`] and the neighbour direction tables.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (row 0 is the top line).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether either coordinate is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Direction tables
// ---------------------------------------------------------------------------

/// Up, left, right, down.
pub const CARDINALS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Up-left, up-right, down-left, down-right.
pub const DIAGONALS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// All eight offsets in reading order, starting up-left.
pub const ADJACENT: [Point; 8] = [
    DIAGONALS[0],
    CARDINALS[0],
    DIAGONALS[1],
    CARDINALS[1],
    CARDINALS[2],
    DIAGONALS[2],
    CARDINALS[3],
    DIAGONALS[3],
];

/// Which offset table neighbour enumeration uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Directions {
    /// 4-connected: [`CARDINALS`].
    Cardinals,
    /// Corners only: [`DIAGONALS`].
    Diagonals,
    /// 8-connected: [`ADJACENT`].
    #[default]
    Adjacent,
}

impl Directions {
    /// The fixed, ordered offset table for this set.
    #[inline]
    pub const fn offsets(self) -> &'static [Point] {
        match self {
            Self::Cardinals => &CARDINALS,
            Self::Diagonals => &DIAGONALS,
            Self::Adjacent => &ADJACENT,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinals => "cardinals",
            Self::Diagonals => "diagonals",
            Self::Adjacent => "adjacent",
        }
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown direction set name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction set \u{201c}{0}\u{201d} (expected cardinals, diagonals or adjacent)")]
pub struct ParseDirectionsError(pub String);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinals" | "cardinal" => Ok(Self::Cardinals),
            "diagonals" | "diagonal" => Ok(Self::Diagonals),
            "adjacent" => Ok(Self::Adjacent),
            _ => Err(ParseDirectionsError(s.to_string())),
        }
    }
}

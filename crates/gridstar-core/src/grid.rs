//! The [`Grid`] type: a dense, rectangular arena of [`Cell`]s parsed from text.
//!
//! Cells are immutable once parsed. The only mutable part of a grid is its
//! [`SearchState`], which a pathfinder resets and fills in on every run.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, WALL};
use crate::error::{GridError, Malformed};
use crate::geom::{Directions, Point};
use crate::search::SearchState;

/// A rectangular grid of character cells.
///
/// Cell `i` sits at `(i % width, i / width)`; row 0 is the top line of the
/// source text.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    search: SearchState,
}

impl Grid {
    /// Parse a block of text into a grid.
    ///
    /// The block is trimmed, then every line is trimmed of surrounding
    /// whitespace. All rows must have the same number of characters as the
    /// first.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        for (y, line) in text.trim().lines().enumerate() {
            let line = line.trim();
            let found = line.chars().count();
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(Malformed::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                }
                .into());
            }
            for (x, value) in line.chars().enumerate() {
                cells.push(Cell::new(value, Point::new(x as i32, y as i32)));
            }
            height += 1;
        }

        if height == 0 || width == 0 {
            return Err(Malformed::Empty.into());
        }

        log::debug!("parsed {width}x{height} grid");
        let search = SearchState::new(cells.len());
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
            search,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a parsed grid; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Arena index of `p`, or `None` when outside the grid.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Arena index of `p`, failing with [`GridError::OutOfBounds`].
    pub fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index_of(p).ok_or(GridError::OutOfBounds {
            point: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Cell at arena index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// The cell at `p`.
    pub fn get(&self, p: Point) -> Result<&Cell, GridError> {
        self.checked_index(p).map(|i| &self.cells[i])
    }

    /// The cell at `p`, or `None` when outside the grid.
    #[inline]
    pub fn try_get(&self, p: Point) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// First cell in reading order whose value is `value`.
    pub fn find(&self, value: char) -> Option<&Cell> {
        self.cells.iter().find(|c| c.value() == value)
    }

    /// Iterate over all cells in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// Cells around `cell` under the given direction set, in table order.
    ///
    /// Offsets landing on negative coordinates or outside the grid are
    /// skipped, so edge and corner cells yield fewer neighbours.
    pub fn neighbours<'a>(
        &'a self,
        cell: &Cell,
        directions: Directions,
    ) -> impl Iterator<Item = &'a Cell> + Clone + use<'a> {
        let origin = cell.pos();
        directions.offsets().iter().filter_map(move |&d| {
            let p = origin + d;
            if p.is_negative() {
                return None;
            }
            self.try_get(p)
        })
    }

    /// 4-connected neighbours.
    pub fn cardinals<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        self.neighbours(cell, Directions::Cardinals)
    }

    /// Corner neighbours only.
    pub fn diagonals<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        self.neighbours(cell, Directions::Diagonals)
    }

    /// 8-connected neighbours.
    pub fn adjacent<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        self.neighbours(cell, Directions::Adjacent)
    }

    /// Whether a path may step onto `cell`.
    #[inline]
    pub fn is_traversable(&self, cell: &Cell) -> bool {
        cell.value() != WALL
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Set every cost to infinity and clear every parent.
    pub fn reset_search_state(&mut self) {
        self.search.reset();
    }

    /// Best known cost of `cell` from the last search.
    pub fn cost(&self, cell: &Cell) -> f64 {
        self.index_of(cell.pos())
            .map_or(f64::INFINITY, |i| self.search.cost(i))
    }

    /// Predecessor of `cell` recorded by the last search.
    pub fn parent(&self, cell: &Cell) -> Option<&Cell> {
        let i = self.index_of(cell.pos())?;
        self.search.parent(i).map(|p| &self.cells[p])
    }

    #[inline]
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    pub fn search_state_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! **gridstar-core**: character grids for pathfinding.
//!
//! This crate provides the foundational types used across the *gridstar*
//! workspace: integer points, the fixed neighbour direction tables, cells
//! parsed from map text, and the [`Grid`] arena that also carries the
//! transient per-search cost/parent state.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod search;

pub use cell::{Cell, WALL};
pub use error::{GridError, Malformed};
pub use geom::{ADJACENT, CARDINALS, DIAGONALS, Directions, ParseDirectionsError, Point};
pub use grid::Grid;
pub use search::SearchState;

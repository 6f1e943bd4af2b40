//! Best-first pathfinding over character grids.
//!
//! [`Pathfinder`] runs an A*-style search on a [`gridstar_core::Grid`]:
//! the open cell with the lowest recorded cost is closed next, and each
//! neighbour is scored as the Euclidean step from the current cell plus the
//! Euclidean distance to the goal. The cost already paid to reach the current
//! cell is not carried forward, and closed cells are never reopened.
//!
//! ```
//! use gridstar_core::{Grid, Point};
//!
//! let mut grid = Grid::from_text("...\n.#.\n...").unwrap();
//! let path = gridstar_paths::find_path(&mut grid, Point::new(0, 1), Point::new(2, 1)).unwrap();
//! assert_eq!(path.first().map(|c| c.pos()), Some(Point::new(0, 1)));
//! assert_eq!(path.last().map(|c| c.pos()), Some(Point::new(2, 1)));
//! ```
//!
//! Progress can be watched through a [`SearchObserver`]; the search behaves
//! identically without one.

mod astar;
mod config;
mod distance;
mod error;
mod observer;
mod pathfinder;

pub use astar::find_path;
pub use config::SearchConfig;
pub use distance::{chebyshev, euclidean};
pub use error::SearchError;
pub use observer::{CellStatus, SearchObserver, Snapshot};
pub use pathfinder::Pathfinder;

use gridstar_core::GridError;

/// Errors from [`Pathfinder::find_path`](crate::Pathfinder::find_path).
///
/// Not finding a path is not an error: the search returns an empty path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or goal could not be looked up in the grid.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The configured iteration cap was reached before the goal was closed.
    #[error("search gave up after closing {0} cells")]
    IterationLimit(usize),
}

use gridstar_core::Grid;

use crate::pathfinder::Mark;

/// How a cell looks to an observer at one moment of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// Not yet discovered.
    Unvisited,
    /// Discovered, waiting in the open set.
    Open,
    /// Finalised; never reconsidered.
    Closed,
    /// Part of the path being reconstructed.
    Path,
}

/// Read-only view of the search frontier handed to a [`SearchObserver`].
pub struct Snapshot<'a> {
    pub(crate) marks: &'a [Mark],
    pub(crate) open: &'a [usize],
    pub(crate) closed: usize,
    pub(crate) path: &'a [usize],
}

impl Snapshot<'_> {
    /// Status of the cell at arena index `idx`. Path membership wins over
    /// closed, closed over open.
    pub fn status(&self, idx: usize) -> CellStatus {
        if self.path.contains(&idx) {
            return CellStatus::Path;
        }
        match self.marks[idx] {
            Mark::Closed => CellStatus::Closed,
            Mark::Open => CellStatus::Open,
            Mark::Unvisited => CellStatus::Unvisited,
        }
    }

    /// Open cells in insertion order.
    pub fn open(&self) -> &[usize] {
        self.open
    }

    pub fn closed_count(&self) -> usize {
        self.closed
    }

    /// Path cells collected so far, goal first.
    pub fn path(&self) -> &[usize] {
        self.path
    }
}

/// Hook for watching a search as it runs.
///
/// Both methods default to doing nothing. The search works the same with or
/// without an observer; `()` is the no-op observer.
pub trait SearchObserver {
    /// Called at the top of every loop iteration, before the next cell is
    /// picked from the open set.
    fn on_iteration(&mut self, _grid: &Grid, _snapshot: &Snapshot<'_>) {}

    /// Called once per cell pushed while walking parents back from the goal.
    fn on_path_step(&mut self, _grid: &Grid, _snapshot: &Snapshot<'_>) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_iteration(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
        (**self).on_iteration(grid, snapshot);
    }

    fn on_path_step(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
        (**self).on_path_step(grid, snapshot);
    }
}

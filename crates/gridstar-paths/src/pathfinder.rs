use gridstar_core::SearchState;

use crate::config::SearchConfig;
use crate::observer::Snapshot;

/// Which search set a cell belongs to during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Mark {
    #[default]
    Unvisited,
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Best-first path search over a [`Grid`](gridstar_core::Grid).
///
/// `Pathfinder` owns the frontier buffers (open list, per-cell marks,
/// neighbour scratch) and reuses them across runs, so repeated queries on
/// same-sized grids do not reallocate. Costs and parents live on the grid
/// itself and are reset at the start of every run.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    /// Open cells in insertion order; ties on cost go to the earliest entry.
    pub(crate) open: Vec<usize>,
    pub(crate) marks: Vec<Mark>,
    pub(crate) closed: usize,
    pub(crate) nbuf: Vec<usize>,
}

impl Pathfinder {
    /// A pathfinder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            open: Vec::new(),
            marks: Vec::new(),
            closed: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Clear the frontier and size the mark array for `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        self.open.clear();
        self.marks.clear();
        self.marks.resize(len, Mark::Unvisited);
        self.closed = 0;
    }

    /// Position in `open` of the cheapest entry. Strict `<` keeps the
    /// earliest-inserted entry on ties.
    pub(crate) fn cheapest(&self, state: &SearchState) -> usize {
        let mut best = 0;
        let mut best_cost = f64::INFINITY;
        for (pos, &idx) in self.open.iter().enumerate() {
            let cost = state.cost(idx);
            if cost < best_cost {
                best = pos;
                best_cost = cost;
            }
        }
        best
    }

    pub(crate) fn snapshot<'a>(&'a self, path: &'a [usize]) -> Snapshot<'a> {
        Snapshot {
            marks: &self.marks,
            open: &self.open,
            closed: self.closed,
            path,
        }
    }
}

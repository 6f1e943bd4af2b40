//! Per-search bookkeeping stored alongside a grid's cells.

/// Best known cost and predecessor for every cell, indexed like the grid's
/// cell arena (`y * width + x`).
///
/// A fresh or reset state holds `f64::INFINITY` costs and no parents.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    costs: Vec<f64>,
    parents: Vec<Option<usize>>,
}

impl SearchState {
    /// State for `len` cells, all unreached.
    pub fn new(len: usize) -> Self {
        Self {
            costs: vec![f64::INFINITY; len],
            parents: vec![None; len],
        }
    }

    /// Forget every recorded cost and parent.
    pub fn reset(&mut self) {
        self.costs.fill(f64::INFINITY);
        self.parents.fill(None);
    }

    /// Best known cost of cell `idx`, `f64::INFINITY` if never recorded.
    #[inline]
    pub fn cost(&self, idx: usize) -> f64 {
        self.costs[idx]
    }

    /// Predecessor of cell `idx` on its best known route.
    #[inline]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// Record a new cost and predecessor for cell `idx`.
    #[inline]
    pub fn record(&mut self, idx: usize, cost: f64, parent: Option<usize>) {
        self.costs[idx] = cost;
        self.parents[idx] = parent;
    }

    /// Number of cells tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

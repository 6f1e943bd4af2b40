use gridstar_core::{Cell, Grid, Point};

use crate::Pathfinder;
use crate::distance::euclidean;
use crate::error::SearchError;
use crate::observer::SearchObserver;
use crate::pathfinder::Mark;

enum Outcome {
    Found,
    Exhausted,
    Capped(usize),
}

impl Pathfinder {
    /// Find a path from `start` to `goal`.
    ///
    /// Returns the cells from `start` to `goal` inclusive, or an empty vector
    /// when the goal cannot be reached. Fails only when `start` or `goal` is
    /// outside the grid, or when the configured iteration cap is hit.
    pub fn find_path(
        &mut self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Cell>, SearchError> {
        self.find_path_observed(grid, start, goal, &mut ())
    }

    /// Like [`find_path`](Self::find_path), reporting progress to `observer`.
    pub fn find_path_observed<O: SearchObserver + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<Vec<Cell>, SearchError> {
        let start_idx = grid.checked_index(start)?;
        let goal_idx = grid.checked_index(goal)?;
        let directions = self.config.directions;

        log::debug!("searching {start} -> {goal} over {directions} neighbours");

        grid.reset_search_state();
        self.reset(grid.len());

        grid.search_state_mut()
            .record(start_idx, euclidean(start, goal), None);
        self.open.push(start_idx);
        self.marks[start_idx] = Mark::Open;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            if self.open.is_empty() {
                break 'search Outcome::Exhausted;
            }
            if let Some(limit) = self.config.max_iterations {
                if self.closed >= limit {
                    break 'search Outcome::Capped(limit);
                }
            }
            observer.on_iteration(grid, &self.snapshot(&[]));

            let pos = self.cheapest(grid.search_state());
            let ci = self.open.remove(pos);
            self.marks[ci] = Mark::Closed;
            self.closed += 1;

            if ci == goal_idx {
                break 'search Outcome::Found;
            }

            let current = *grid.cell(ci);
            nbuf.clear();
            nbuf.extend(
                grid.neighbours(&current, directions)
                    .filter(|n| grid.is_traversable(n))
                    .filter_map(|n| grid.index_of(n.pos())),
            );

            for &ni in nbuf.iter() {
                if self.marks[ni] == Mark::Closed {
                    continue;
                }
                let np = grid.cell(ni).pos();
                // Step cost plus remaining estimate, without the cost already
                // paid to reach `current`. This is intentional: accumulating g
                // would change which paths are found.
                let tentative = euclidean(current.pos(), np) + euclidean(goal, np);

                let state = grid.search_state_mut();
                if state.cost(ni) <= tentative {
                    continue;
                }
                state.record(ni, tentative, Some(ci));
                log::trace!("{np} reached from {} at {tentative:.3}", current.pos());

                if self.marks[ni] == Mark::Unvisited {
                    self.marks[ni] = Mark::Open;
                    self.open.push(ni);
                }
            }
        };

        self.nbuf = nbuf;

        match outcome {
            Outcome::Found => {}
            Outcome::Exhausted => {
                log::debug!("no path from {start} to {goal} ({} cells closed)", self.closed);
                return Ok(Vec::new());
            }
            Outcome::Capped(limit) => {
                log::debug!("search {start} -> {goal} stopped at {limit} closed cells");
                return Err(SearchError::IterationLimit(limit));
            }
        }

        // Reconstruct path.
        let mut trail = Vec::new();
        let mut next = Some(goal_idx);
        while let Some(ci) = next {
            trail.push(ci);
            observer.on_path_step(grid, &self.snapshot(&trail));
            next = grid.search_state().parent(ci);
        }
        trail.reverse();

        log::debug!(
            "path {start} -> {goal}: {} cells, {} closed",
            trail.len(),
            self.closed
        );
        Ok(trail.into_iter().map(|i| *grid.cell(i)).collect())
    }
}

/// Find a path with a throwaway [`Pathfinder`] and default configuration.
pub fn find_path(grid: &mut Grid, start: Point, goal: Point) -> Result<Vec<Cell>, SearchError> {
    Pathfinder::new().find_path(grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::observer::{CellStatus, Snapshot};
    use gridstar_core::{Directions, GridError};

    fn grid(text: &str) -> Grid {
        Grid::from_text(text).unwrap()
    }

    fn positions(path: &[Cell]) -> Vec<Point> {
        path.iter().map(|c| c.pos()).collect()
    }

    #[test]
    fn straight_row() {
        let mut g = grid("...");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(
            positions(&path),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn wall_in_single_row_blocks() {
        let mut g = grid(".#.");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_goal() {
        let mut g = grid("...\n...");
        let p = Point::new(1, 1);
        let path = find_path(&mut g, p, p).unwrap();
        assert_eq!(positions(&path), vec![p]);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let mut g = grid("...");
        let err = find_path(&mut g, Point::new(0, 0), Point::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            SearchError::Grid(GridError::OutOfBounds {
                point: Point::new(3, 0),
                width: 3,
                height: 1,
            })
        );
        assert!(find_path(&mut g, Point::new(-1, 0), Point::new(0, 0)).is_err());
    }

    #[test]
    fn diagonal_step_taken_when_adjacent() {
        let mut g = grid("..\n..");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(positions(&path), vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn diagonal_squeeze_only_with_adjacent() {
        // The two open cells touch only at a corner.
        let text = ".#\n#.";
        let mut g = grid(text);
        let path = find_path(&mut g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(path.len(), 2);

        let mut pf =
            Pathfinder::with_config(SearchConfig::default().with_directions(Directions::Cardinals));
        let path = pf.find_path(&mut g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn walled_start_is_still_searched_from() {
        let mut g = grid("#..");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.len(), 3);
        assert!(path[0].is_wall());
    }

    #[test]
    fn walled_goal_is_unreachable() {
        let mut g = grid("..#");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn search_state_left_behind() {
        let mut g = grid("...");
        find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        let mid = *g.get(Point::new(1, 0)).unwrap();
        let start = *g.get(Point::new(0, 0)).unwrap();
        assert_eq!(g.cost(&start), 2.0);
        assert_eq!(g.cost(&mid), 2.0);
        assert_eq!(g.parent(&mid), Some(&start));
        assert_eq!(g.parent(&start), None);
    }

    #[test]
    fn cost_is_step_plus_estimate_not_accumulated() {
        let mut g = grid("....");
        let path = find_path(&mut g, Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(path.len(), 4);
        let cost_at = |g: &Grid, x: i32| g.cost(g.get(Point::new(x, 0)).unwrap());
        assert_eq!(cost_at(&g, 0), 3.0);
        assert_eq!(cost_at(&g, 1), 3.0);
        // Two steps out: 1 step + 1 remaining, not 2 paid + 1 remaining.
        assert_eq!(cost_at(&g, 2), 2.0);
        assert_eq!(cost_at(&g, 3), 1.0);
    }

    #[test]
    fn diagonal_step_cost_recorded() {
        let mut g = grid("...\n...\n...");
        find_path(&mut g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let mid = *g.get(Point::new(1, 1)).unwrap();
        let expected = 2.0 * std::f64::consts::SQRT_2;
        assert!((g.cost(&mid) - expected).abs() < 1e-12);
        assert_eq!(g.parent(&mid).map(|c| c.pos()), Some(Point::new(0, 0)));
    }

    #[test]
    fn iteration_cap() {
        let mut g = grid("..........");
        let mut pf = Pathfinder::with_config(SearchConfig::default().with_max_iterations(3));
        let err = pf.find_path(&mut g, Point::new(0, 0), Point::new(9, 0)).unwrap_err();
        assert_eq!(err, SearchError::IterationLimit(3));

        // Reaching the goal on the capped iteration still succeeds.
        let mut pf = Pathfinder::with_config(SearchConfig::default().with_max_iterations(3));
        let path = pf.find_path(&mut g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn zero_cap_closes_nothing() {
        let mut g = grid("...");
        let mut rec = Recorder::default();
        let mut pf = Pathfinder::with_config(SearchConfig::default().with_max_iterations(0));
        let err = pf
            .find_path_observed(&mut g, Point::new(0, 0), Point::new(2, 0), &mut rec)
            .unwrap_err();
        assert_eq!(err, SearchError::IterationLimit(0));
        assert_eq!(rec.iterations, 0);
    }

    #[derive(Default)]
    struct Recorder {
        iterations: usize,
        path_steps: Vec<usize>,
        open_seen: Vec<usize>,
        last_statuses: Vec<CellStatus>,
    }

    impl SearchObserver for Recorder {
        fn on_iteration(&mut self, _grid: &Grid, snapshot: &Snapshot<'_>) {
            self.iterations += 1;
            self.open_seen.push(snapshot.open().len());
        }

        fn on_path_step(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
            self.path_steps.push(snapshot.path().len());
            self.last_statuses = (0..grid.len()).map(|i| snapshot.status(i)).collect();
        }
    }

    #[test]
    fn observer_sees_each_iteration_and_path_step() {
        let mut g = grid("...");
        let mut rec = Recorder::default();
        let path = Pathfinder::new()
            .find_path_observed(&mut g, Point::new(0, 0), Point::new(2, 0), &mut rec)
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(rec.iterations, 3);
        assert_eq!(rec.open_seen, vec![1, 1, 1]);
        assert_eq!(rec.path_steps, vec![1, 2, 3]);
        assert_eq!(rec.last_statuses, vec![CellStatus::Path; 3]);
    }

    #[test]
    fn observer_does_not_change_result() {
        let text = "....\n.##.\n....";
        let mut g = grid(text);
        let plain = find_path(&mut g, Point::new(0, 1), Point::new(3, 1)).unwrap();
        let mut rec = Recorder::default();
        let watched = Pathfinder::new()
            .find_path_observed(&mut g, Point::new(0, 1), Point::new(3, 1), &mut rec)
            .unwrap();
        assert_eq!(positions(&plain), positions(&watched));
        assert!(rec.iterations > 0);
    }
}

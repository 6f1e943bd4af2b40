//! Shared pieces of the `gridstar` command-line demo: the built-in sample
//! maps, endpoint resolution, and the path overlay printed after a search.

use anyhow::{Context, bail};
use gridstar_core::{Cell, Grid, Point};

/// The default map: two long walls with one gap each, plus two wall
/// fragments next to the goal.
pub const FRAGMENTS: &str = "
..........
...#.B....
....#.....
.#########
..........
#########.
..........
..........
..A.......
..........
";

/// The same map without the fragments near the goal.
pub const GAPS: &str = "
..........
.....B....
..........
.#########
..........
#########.
..........
..........
..A.......
..........
";

/// Marks intermediate path cells in [`overlay_path`].
pub const PATH_MARK: char = '*';

/// Built-in maps selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Sample {
    #[default]
    Fragments,
    Gaps,
}

impl Sample {
    pub fn text(self) -> &'static str {
        match self {
            Self::Fragments => FRAGMENTS,
            Self::Gaps => GAPS,
        }
    }
}

/// Parse an `x,y` pair, e.g. `2,8`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got \u{201c}{s}\u{201d}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in \u{201c}{s}\u{201d}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in \u{201c}{s}\u{201d}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Use `explicit` if given (it must lie inside the grid), otherwise the first
/// cell holding `marker`.
pub fn resolve_endpoint(grid: &Grid, explicit: Option<Point>, marker: char) -> anyhow::Result<Point> {
    match explicit {
        Some(p) => {
            grid.get(p)?;
            Ok(p)
        }
        None => match grid.find(marker) {
            Some(cell) => Ok(cell.pos()),
            None => bail!("no \u{201c}{marker}\u{201d} marker in the grid"),
        },
    }
}

/// Load map text from `path`.
pub fn read_map(path: &std::path::Path) -> anyhow::Result<Grid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading map {}", path.display()))?;
    Grid::from_text(&text).with_context(|| format!("parsing map {}", path.display()))
}

/// Render `grid` with every path cell between the endpoints replaced by
/// [`PATH_MARK`]. The endpoints keep their own values.
pub fn overlay_path(grid: &Grid, path: &[Cell]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    if path.len() > 2 {
        for cell in &path[1..path.len() - 1] {
            rows[cell.y() as usize][cell.x() as usize] = PATH_MARK;
        }
    }
    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::find_path;

    #[test]
    fn samples_parse_with_markers() {
        for sample in [Sample::Fragments, Sample::Gaps] {
            let grid = Grid::from_text(sample.text()).unwrap();
            assert_eq!(grid.size(), Point::new(10, 10));
            assert_eq!(resolve_endpoint(&grid, None, 'A').unwrap(), Point::new(2, 8));
            assert_eq!(resolve_endpoint(&grid, None, 'B').unwrap(), Point::new(5, 1));
        }
    }

    #[test]
    fn parse_point_forms() {
        assert_eq!(parse_point("2,8"), Ok(Point::new(2, 8)));
        assert_eq!(parse_point(" 5 , 1 "), Ok(Point::new(5, 1)));
        assert!(parse_point("5").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn explicit_endpoint_must_be_in_bounds() {
        let grid = Grid::from_text("...").unwrap();
        assert_eq!(
            resolve_endpoint(&grid, Some(Point::new(1, 0)), 'A').unwrap(),
            Point::new(1, 0)
        );
        assert!(resolve_endpoint(&grid, Some(Point::new(3, 0)), 'A').is_err());
        assert!(resolve_endpoint(&grid, None, 'A').is_err());
    }

    #[test]
    fn overlay_marks_intermediate_cells() {
        let mut grid = Grid::from_text("A..B").unwrap();
        let path = find_path(&mut grid, Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(overlay_path(&grid, &path), "A**B\n");
        assert_eq!(overlay_path(&grid, &[]), "A..B\n");
    }

    #[test]
    fn read_map_reports_missing_file() {
        let err = read_map(std::path::Path::new("/nonexistent/gridstar.map")).unwrap_err();
        assert!(err.to_string().contains("reading map"));
    }
}

//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin gridstar -- --sample gaps --trace

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridstar_core::{Directions, Grid, Point};
use gridstar_crossterm::{TraceConfig, TraceRenderer};
use gridstar_demos::{Sample, overlay_path, parse_point, read_map, resolve_endpoint};
use gridstar_paths::{Pathfinder, SearchConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gridstar", about = "Find a path across a character grid")]
struct Cli {
    /// Built-in map to search.
    #[arg(long, value_enum, default_value_t = Sample::Fragments)]
    sample: Sample,

    /// Read the map from a file instead of a built-in sample.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Character marking the start cell.
    #[arg(long, default_value_t = 'A')]
    start_marker: char,

    /// Character marking the goal cell.
    #[arg(long, default_value_t = 'B')]
    goal_marker: char,

    /// Explicit start as x,y (overrides the marker).
    #[arg(long, value_parser = parse_point)]
    from: Option<Point>,

    /// Explicit goal as x,y (overrides the marker).
    #[arg(long, value_parser = parse_point)]
    to: Option<Point>,

    /// Neighbour set used to expand cells: adjacent, cardinals or diagonals.
    #[arg(long, default_value_t = Directions::Adjacent)]
    directions: Directions,

    /// Give up after closing this many cells.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Animate the search on the terminal.
    #[arg(long)]
    trace: bool,

    /// Pause between trace frames, in milliseconds.
    #[arg(long, default_value_t = 250)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut grid = match &cli.file {
        Some(path) => read_map(path)?,
        None => Grid::from_text(cli.sample.text())?,
    };
    let start = resolve_endpoint(&grid, cli.from, cli.start_marker)?;
    let goal = resolve_endpoint(&grid, cli.to, cli.goal_marker)?;

    let mut config = SearchConfig::default().with_directions(cli.directions);
    config.max_iterations = cli.max_iterations;
    let mut pathfinder = Pathfinder::with_config(config);

    let path = if cli.trace {
        let mut trace = TraceRenderer::stdout(
            TraceConfig::default().with_delay(Duration::from_millis(cli.delay_ms)),
        );
        let path = pathfinder.find_path_observed(&mut grid, start, goal, &mut trace)?;
        trace.finish()?;
        path
    } else {
        pathfinder.find_path(&mut grid, start, goal)?
    };

    print!("{}", overlay_path(&grid, &path));
    if path.is_empty() {
        println!("no path from {start} to {goal}");
    } else {
        println!("{} cells from {start} to {goal}", path.len());
    }
    Ok(())
}

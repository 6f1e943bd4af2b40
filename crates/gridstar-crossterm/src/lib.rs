//! Crossterm trace renderer for gridstar searches.
//!
//! Provides a [`TraceRenderer`] that implements
//! [`gridstar_paths::SearchObserver`], redrawing the grid after every search
//! iteration and path step with the frontier coloured in:
//!
//! | status | colour (ANSI 256) |
//! |---|---|
//! | path | 69 (blue) |
//! | closed | 196 (red) |
//! | open | 118 (green) |

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridstar_core::Grid;
use gridstar_paths::{CellStatus, SearchObserver, Snapshot};

/// Maps a cell status to the colour it is drawn in, `None` for plain text.
fn to_ct_color(status: CellStatus) -> Option<CtColor> {
    match status {
        CellStatus::Path => Some(CtColor::AnsiValue(69)),
        CellStatus::Closed => Some(CtColor::AnsiValue(196)),
        CellStatus::Open => Some(CtColor::AnsiValue(118)),
        CellStatus::Unvisited => None,
    }
}

/// Write one frame: every cell's value, coloured by its status, one row per
/// line.
pub fn render_frame<W: Write>(out: &mut W, grid: &Grid, snapshot: &Snapshot<'_>) -> io::Result<()> {
    for (i, cell) in grid.iter().enumerate() {
        match to_ct_color(snapshot.status(i)) {
            Some(color) => queue!(
                out,
                SetForegroundColor(color),
                Print(cell.value()),
                ResetColor
            )?,
            None => queue!(out, Print(cell.value()))?,
        }
        if cell.x() == grid.width() - 1 {
            queue!(out, Print('\n'))?;
        }
    }
    Ok(())
}

/// Settings for a [`TraceRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Pause after each frame.
    pub delay: Duration,
    /// Clear the terminal and home the cursor before each frame.
    pub clear: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
            clear: true,
        }
    }
}

impl TraceConfig {
    /// Set the per-frame pause (builder).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configure whether the screen is cleared between frames (builder).
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }
}

/// A search observer that animates the search on a terminal.
///
/// Write failures do not interrupt the search: the first error is logged,
/// kept, and returned from [`finish`](Self::finish); later frames are
/// skipped.
pub struct TraceRenderer<W: Write> {
    out: W,
    config: TraceConfig,
    frames: usize,
    error: Option<io::Error>,
}

impl TraceRenderer<io::Stdout> {
    /// Render to standard output.
    pub fn stdout(config: TraceConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W, config: TraceConfig) -> Self {
        Self {
            out,
            config,
            frames: 0,
            error: None,
        }
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Return the writer, or the first error hit while drawing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn draw(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.try_draw(grid, snapshot) {
            log::warn!("trace frame {} failed: {e}", self.frames);
            self.error = Some(e);
            return;
        }
        self.frames += 1;
        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
    }

    fn try_draw(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if self.config.clear {
            queue!(
                self.out,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        render_frame(&mut self.out, grid, snapshot)?;
        self.out.flush()
    }
}

impl<W: Write> SearchObserver for TraceRenderer<W> {
    fn on_iteration(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
        self.draw(grid, snapshot);
    }

    fn on_path_step(&mut self, grid: &Grid, snapshot: &Snapshot<'_>) {
        self.draw(grid, snapshot);
    }
}

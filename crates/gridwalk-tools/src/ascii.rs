use std::fmt::Write as _;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use gridwalk_nav::{Cell, Renderer, Snapshot};

const AGENT: char = 'A';
const GOAL: char = 'G';
const OBSTACLE: char = '#';
const VISITED: char = 'o';
const EMPTY: char = '.';

/// ANSI clear-screen + cursor-home.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Format one frame as text: one row per `y` (top row is `y = 0`), followed by a status line.
pub fn format_frame(snapshot: &Snapshot<'_>) -> String {
    let (width, height) = snapshot.grid_size();
    let (cols, rows) = (width as usize, height as usize);
    let mut out = String::with_capacity(cols * 2 * (rows + 1));

    for y in 0..height {
        for x in 0..width {
            if x > 0 {
                out.push(' ');
            }
            out.push(glyph(snapshot, Cell::new(x, y)));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "step {} | {} | at {} | visited {}",
        snapshot.step,
        snapshot.mode.as_str(),
        snapshot.position,
        snapshot.visited.len()
    );
    out
}

fn glyph(snapshot: &Snapshot<'_>, cell: Cell) -> char {
    if cell == snapshot.position {
        AGENT
    } else if cell == snapshot.goal() {
        GOAL
    } else if snapshot.grid.is_obstacle(cell) {
        OBSTACLE
    } else if snapshot.visited.contains(&cell) {
        VISITED
    } else {
        EMPTY
    }
}

/// Writes a text frame per step to `out`, optionally pausing between frames.
///
/// The first write error is kept and further frames are dropped; retrieve it with
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct AsciiRenderer<W> {
    out: W,
    delay: Duration,
    clear_screen: bool,
    error: Option<io::Error>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delay: Duration::ZERO,
            clear_screen: false,
            error: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Flush and return the writer, or the first error seen while rendering.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_frame(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR.as_bytes())?;
        }
        self.out.write_all(format_frame(snapshot).as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_frame(snapshot) {
            tracing::warn!(error = %err, step = snapshot.step, "Failed to write frame");
            self.error = Some(err);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

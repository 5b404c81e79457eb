//! Single runs - one seeded walk, recorded and optionally drawn.

use std::io::{self, Write};

use gridwalk_core::SplitMix64;
use gridwalk_nav::{Cell, Grid, NavError, Navigator, Renderer, Snapshot, StepBudget};
use gridwalk_tools::{AsciiRenderer, FrameLog};

/// Everything a single run produced.
///
/// The navigation result and the terminal error are kept apart so callers can save the frames
/// and report a `Stuck`/`NoProgress` failure even when drawing broke.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: Result<usize, NavError>,
    pub frames: FrameLog,
    /// First write error from the ASCII renderer, if one was attached
    pub render_error: Option<io::Error>,
}

/// Walk from `start` until the goal, recording every frame and drawing it to `ascii` if given.
///
/// Only an invalid start fails outright; run failures land in [`RunOutcome::result`].
pub fn run_single<W: Write>(
    grid: &Grid,
    start: Cell,
    budget: StepBudget,
    seed: u64,
    ascii: Option<AsciiRenderer<W>>,
) -> Result<RunOutcome, NavError> {
    let mut nav = Navigator::new(grid, start, SplitMix64::new(seed))?;
    let mut frames = FrameLog::new();

    let (result, render_error) = match ascii {
        Some(mut ascii) => {
            let mut both = |snapshot: &Snapshot<'_>| {
                ascii.render(snapshot);
                frames.render(snapshot);
            };
            let result = nav.run_until_goal(budget, &mut both);
            (result, ascii.finish().err())
        }
        None => (nav.run_until_goal(budget, &mut frames), None),
    };

    Ok(RunOutcome {
        result,
        frames,
        render_error,
    })
}

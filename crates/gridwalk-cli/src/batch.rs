//! Batch runs - many independent seeded walks over one grid.

use gridwalk_core::{derive_seed, SplitMix64};
use gridwalk_nav::{Cell, Grid, NavError, Navigator, NullRenderer, StepBudget};

/// Aggregate outcome of a batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    pub runs: usize,
    /// Step counts of the runs that reached the goal
    pub steps: Vec<usize>,
    pub stuck: usize,
    pub no_progress: usize,
}

impl BatchReport {
    pub fn finished(&self) -> usize {
        self.steps.len()
    }

    pub fn min_steps(&self) -> Option<usize> {
        self.steps.iter().copied().min()
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.steps.iter().copied().max()
    }

    pub fn mean_steps(&self) -> Option<f64> {
        if self.steps.is_empty() {
            return None;
        }
        let total: usize = self.steps.iter().sum();
        Some(total as f64 / self.steps.len() as f64)
    }

    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.finished() as f64 / self.runs as f64
    }

    pub fn summary(&self) -> String {
        match (self.min_steps(), self.mean_steps(), self.max_steps()) {
            (Some(min), Some(mean), Some(max)) => format!(
                "Finished: {}/{}, Stuck: {}, NoProgress: {}, Steps min/mean/max: {}/{:.1}/{}",
                self.finished(),
                self.runs,
                self.stuck,
                self.no_progress,
                min,
                mean,
                max
            ),
            _ => format!(
                "Finished: 0/{}, Stuck: {}, NoProgress: {}",
                self.runs, self.stuck, self.no_progress
            ),
        }
    }
}

/// Run `runs` fresh navigators from `start`, each seeded from `derive_seed(seed, run, 0)`.
///
/// Configuration errors abort the batch; per-run `Stuck`/`NoProgress` are counted.
pub fn run_batch(
    grid: &Grid,
    start: Cell,
    budget: StepBudget,
    seed: u64,
    runs: usize,
) -> Result<BatchReport, NavError> {
    let mut report = BatchReport {
        runs,
        ..BatchReport::default()
    };

    for run in 0..runs {
        let rng = SplitMix64::new(derive_seed(seed, run as u64, 0));
        let mut nav = Navigator::new(grid, start, rng)?;
        match nav.run_until_goal(budget, &mut NullRenderer) {
            Ok(steps) => report.steps.push(steps),
            Err(NavError::Stuck { .. }) => report.stuck += 1,
            Err(NavError::NoProgress { .. }) => report.no_progress += 1,
            Err(err @ NavError::InvalidConfiguration(_)) => return Err(err),
        }
    }

    tracing::info!(summary = %report.summary(), "Batch complete");
    Ok(report)
}

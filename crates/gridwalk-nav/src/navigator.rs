use std::collections::BTreeSet;

use gridwalk_core::DeterministicRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, NavError, Result};
use crate::{Cell, Grid, Renderer, Snapshot};

/// Whether the last step found a fresh neighbor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavMode {
    /// At least one valid neighbor had not been visited yet.
    #[default]
    Exploring,
    /// Every valid neighbor was already visited; the move was drawn from all of them.
    Backtracking,
}

impl NavMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NavMode::Exploring => "exploring",
            NavMode::Backtracking => "backtracking",
        }
    }
}

/// Result of a single successful [`Navigator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub from: Cell,
    pub to: Cell,
    pub mode: NavMode,
}

/// Upper bound on the number of steps a run may take before it is reported as `NoProgress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepBudget {
    #[default]
    Unlimited,
    Limited(usize),
}

impl StepBudget {
    /// `factor * width * height` steps.
    pub fn scaled(grid: &Grid, factor: usize) -> Self {
        let cells = grid.width() as usize * grid.height() as usize;
        StepBudget::Limited(cells.saturating_mul(factor))
    }

    pub fn max_steps(self) -> Option<usize> {
        match self {
            StepBudget::Unlimited => None,
            StepBudget::Limited(n) => Some(n),
        }
    }

    fn is_exhausted(self, steps: usize) -> bool {
        self.max_steps().is_some_and(|max| steps >= max)
    }
}

/// Memory-augmented random walker.
///
/// Prefers neighbors it has never occupied; when every valid neighbor is already in memory it
/// falls back to a uniform choice among all of them. Memory is never reset during a run, so the
/// walker can bounce between visited cells for a while before randomness carries it out again.
/// Build a new navigator for every attempt.
#[derive(Debug, Clone)]
pub struct Navigator<'g, R> {
    grid: &'g Grid,
    rng: R,
    start: Cell,
    position: Cell,
    visited: BTreeSet<Cell>,
    path: Vec<Cell>,
    mode: NavMode,
}

impl<'g, R> Navigator<'g, R>
where
    R: DeterministicRng,
{
    pub fn new(grid: &'g Grid, start: Cell, rng: R) -> Result<Self> {
        if !grid.is_valid(start) {
            return Err(ConfigError::StartNotWalkable(start).into());
        }
        Ok(Self {
            grid,
            rng,
            start,
            position: start,
            visited: BTreeSet::new(),
            path: vec![start],
            mode: NavMode::Exploring,
        })
    }

    /// Start in the `(0, 0)` corner.
    pub fn at_origin(grid: &'g Grid, rng: R) -> Result<Self> {
        Self::new(grid, Cell::new(0, 0), rng)
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Full move history, starting with the start cell. Never empty.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn visited(&self) -> &BTreeSet<Cell> {
        &self.visited
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    pub fn at_goal(&self) -> bool {
        self.grid.is_goal(self.position)
    }

    /// Valid axis-aligned neighbors of `position`, in the order +x, -x, +y, -y.
    pub fn candidate_moves(&self, position: Cell) -> Vec<Cell> {
        self.grid
            .neighbors(position)
            .into_iter()
            .filter(|&cell| self.grid.is_valid(cell))
            .collect()
    }

    /// Advance one cell.
    ///
    /// On `Stuck` the current cell is remembered as visited but `position` and `path` are left
    /// untouched.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let from = self.position;
        self.visited.insert(from);

        let candidates = self.candidate_moves(from);
        let unvisited: Vec<Cell> = candidates
            .iter()
            .copied()
            .filter(|cell| !self.visited.contains(cell))
            .collect();

        let (mode, options) = if unvisited.is_empty() {
            (NavMode::Backtracking, candidates)
        } else {
            (NavMode::Exploring, unvisited)
        };

        let Some(&to) = self.rng.choose(&options) else {
            tracing::warn!(position = %from, "No valid neighbor");
            return Err(NavError::Stuck { position: from });
        };

        if mode != self.mode {
            tracing::debug!(
                step = self.path.len(),
                position = %from,
                mode = mode.as_str(),
                "Navigation mode changed"
            );
        }

        self.mode = mode;
        self.position = to;
        self.path.push(to);

        tracing::trace!(step = self.steps(), from = %from, to = %to, mode = mode.as_str(), "Step");

        Ok(StepOutcome { from, to, mode })
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step: self.steps(),
            mode: self.mode,
            position: self.position,
            path: &self.path,
            visited: &self.visited,
            grid: self.grid,
        }
    }

    /// Step until the goal is reached, handing `renderer` a snapshot after every step.
    ///
    /// Returns the number of steps taken. A navigator that starts on the goal returns `0`
    /// without rendering anything.
    pub fn run_until_goal<V>(&mut self, budget: StepBudget, renderer: &mut V) -> Result<usize>
    where
        V: Renderer + ?Sized,
    {
        while !self.at_goal() {
            if budget.is_exhausted(self.steps()) {
                let max_steps = budget.max_steps().unwrap_or(usize::MAX);
                tracing::warn!(
                    max_steps,
                    position = %self.position,
                    visited = self.visited.len(),
                    "Step budget exhausted before reaching goal"
                );
                return Err(NavError::NoProgress {
                    max_steps,
                    position: self.position,
                });
            }

            self.step()?;
            renderer.render(&self.snapshot());
        }

        let steps = self.steps();
        tracing::info!(steps, goal = %self.grid.goal(), "Goal reached");
        Ok(steps)
    }

    /// [`run_until_goal`](Self::run_until_goal) without a step cap.
    pub fn run_until_goal_unbounded<V>(&mut self, renderer: &mut V) -> Result<usize>
    where
        V: Renderer + ?Sized,
    {
        self.run_until_goal(StepBudget::Unlimited, renderer)
    }
}

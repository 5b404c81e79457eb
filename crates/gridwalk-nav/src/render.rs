use std::collections::BTreeSet;

use crate::{Cell, Grid, NavMode};

/// Read-only view of a run, handed to a [`Renderer`] after every completed step.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Number of steps taken so far (`path.len() - 1`).
    pub step: usize,
    pub mode: NavMode,
    pub position: Cell,
    pub path: &'a [Cell],
    pub visited: &'a BTreeSet<Cell>,
    pub grid: &'a Grid,
}

impl Snapshot<'_> {
    pub fn goal(&self) -> Cell {
        self.grid.goal()
    }

    pub fn grid_size(&self) -> (i32, i32) {
        self.grid.size()
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.obstacles()
    }

    pub fn at_goal(&self) -> bool {
        self.grid.is_goal(self.position)
    }
}

/// Presentation-side consumer of snapshots.
///
/// The navigator never depends on what a renderer does with a frame (draw, record, pace); it
/// only promises one call per completed step.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self(snapshot);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot<'_>) {}
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gridwalk_nav::{Cell, NavMode, Renderer, Snapshot};

/// Owned, compact record of one completed step.
///
/// Plain data so it can be recorded during a run and replayed or inspected later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    pub step: usize,
    pub mode: NavMode,
    pub position: Cell,
    /// Size of the visited set when the frame was taken.
    pub visited: usize,
}

impl Frame {
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        Self {
            step: snapshot.step,
            mode: snapshot.mode,
            position: snapshot.position,
            visited: snapshot.visited.len(),
        }
    }
}

/// Renderer that keeps every frame in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameLog {
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub frames: Vec<Frame>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Rebuild the walked path: the start cell followed by every frame position.
    pub fn path(&self) -> Vec<Cell> {
        self.start
            .into_iter()
            .chain(self.frames.iter().map(|f| f.position))
            .collect()
    }

    pub fn backtracking_steps(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| f.mode == NavMode::Backtracking)
            .count()
    }
}

impl Renderer for FrameLog {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        if self.start.is_none() {
            self.start = snapshot.path.first().copied();
            self.goal = Some(snapshot.goal());
        }
        self.push(Frame::from_snapshot(snapshot));
    }
}

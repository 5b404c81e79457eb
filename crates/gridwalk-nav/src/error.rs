use thiserror::Error;

use crate::Cell;

/// Why a grid or navigator could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive, got {width}x{height}")]
    NonPositiveSize { width: i32, height: i32 },

    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Cell),

    #[error("goal {0} is an obstacle")]
    GoalOnObstacle(Cell),

    #[error("start {0} is out of bounds or an obstacle")]
    StartNotWalkable(Cell),
}

/// Errors raised by grid construction and navigation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The current cell has no valid neighbor at all.
    #[error("agent is stuck at {position}: no valid neighbor")]
    Stuck { position: Cell },

    /// The step budget ran out before the goal was reached.
    #[error("goal not reached within {max_steps} steps (last position {position})")]
    NoProgress { max_steps: usize, position: Cell },
}

pub type Result<T> = std::result::Result<T, NavError>;

//! Simulation configuration loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use gridwalk_nav::{Cell, Grid, NavError, StepBudget};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gridwalk.yaml";

/// Budget multiplier applied to `width * height` when `max_steps` is not set.
pub const DEFAULT_BUDGET_FACTOR: usize = 20;

/// Written by `gridwalk init`.
pub const DEFAULT_CONFIG_YAML: &str = r#"# gridwalk simulation configuration

width: 5
height: 5
start: [0, 0]
goal: [4, 4]
obstacles:
  - [2, 2]
  - [3, 2]

# Steps allowed before the run is reported as NoProgress.
# Omit to use 20 * width * height (500 on this grid).
# max_steps: 500

# Omit for a clock-derived seed (logged at startup).
# seed: 0

render:
  enabled: false
  delay_ms: 500
  clear_screen: true
"#;

/// Main simulation configuration, loaded from gridwalk.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: i32,

    /// Grid height in cells
    pub height: i32,

    /// Entry cell
    pub start: [i32; 2],

    /// Goal cell
    pub goal: [i32; 2],

    /// Cells the agent may never occupy
    pub obstacles: Vec<[i32; 2]>,

    /// Step cap for a single run; `None` scales with the grid area
    pub max_steps: Option<usize>,

    /// RNG seed
    pub seed: Option<u64>,

    /// Terminal rendering
    pub render: RenderConfig,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub enabled: bool,

    /// Pause after each frame, in milliseconds
    pub delay_ms: u64,

    /// Clear the terminal before each frame
    pub clear_screen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: 500,
            clear_screen: true,
        }
    }
}

impl RenderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            start: [0, 0],
            goal: [4, 4],
            obstacles: vec![[2, 2], [3, 2]],
            max_steps: None,
            seed: None,
            render: RenderConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, else `gridwalk.yaml` in `dir` if it exists, else defaults.
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Self::default_path(dir);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_FILE)
    }

    pub fn start_cell(&self) -> Cell {
        Cell::new(self.start[0], self.start[1])
    }

    pub fn goal_cell(&self) -> Cell {
        Cell::new(self.goal[0], self.goal[1])
    }

    pub fn obstacle_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().map(|&[x, y]| Cell::new(x, y))
    }

    /// Validate and build the grid this config describes.
    pub fn build_grid(&self) -> std::result::Result<Grid, NavError> {
        Grid::new(
            self.width,
            self.height,
            self.obstacle_cells(),
            self.goal_cell(),
        )
    }

    pub fn budget(&self, grid: &Grid) -> StepBudget {
        match self.max_steps {
            Some(n) => StepBudget::Limited(n),
            None => StepBudget::scaled(grid, DEFAULT_BUDGET_FACTOR),
        }
    }
}

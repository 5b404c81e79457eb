//! gridwalk CLI support: configuration, single runs and batch runs.

pub mod batch;
pub mod config;
pub mod run;

pub use batch::{run_batch, BatchReport};
pub use config::{RenderConfig, SimConfig};
pub use run::{run_single, RunOutcome};

//! Grid environment and memory-augmented random-walk navigator.
//!
//! [`Grid`] is a static spatial oracle. [`Navigator`] walks it one cell per
//! [`step`](Navigator::step), preferring cells it has never occupied, and
//! reports every completed step to a [`Renderer`] as a read-only [`Snapshot`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod navigator;
pub mod render;

pub use error::{ConfigError, NavError, Result};
pub use grid::{Cell, Grid};
pub use navigator::{NavMode, Navigator, StepBudget, StepOutcome};
pub use render::{NullRenderer, Renderer, Snapshot};

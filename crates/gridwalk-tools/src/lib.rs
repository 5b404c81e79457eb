//! Presentation-side renderers for gridwalk runs.
//!
//! Nothing here is needed to run a simulation. These are ready-made consumers of the
//! [`Snapshot`](gridwalk_nav::Snapshot) stream: a recorder for replay and an ASCII frame
//! printer for terminals.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod frame;

pub use ascii::{format_frame, AsciiRenderer};
pub use frame::{Frame, FrameLog};

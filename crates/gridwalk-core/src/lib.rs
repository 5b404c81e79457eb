//! Deterministic, engine-agnostic simulation primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod rng;

pub use rng::{derive_seed, mix64, DeterministicRng, SplitMix64};

//! Optimal-path search.
//!
//! Deterministic, exhaustive scoring of every affordable pair. Each pair
//! is treated as a complete path from an empty outfit: its path cost is
//! one minus the weighted benefit, and a heuristic term penalises
//! leaving too much of the budget unused for occasions that warrant it.
//! The pair with the lowest `f = g + h` wins; ties go to the pair
//! enumerated first.
//!
//! # Key Types
//!
//! - [`ScoringWeights`]: Component weights and utilisation bands
//! - [`OptimalSearch`]: Ranks pairs and selects the best
//! - [`PathScore`]: Per-component breakdown of one pair
//!
//! Occasion labels are compared case-insensitively, like everywhere
//! else in the crate.

mod config;
mod runner;
mod scoring;

pub use config::{Band, ScoringWeights};
pub use runner::{OptimalResult, OptimalSearch, ScoredPair};
pub use scoring::{score_pair, OccasionPriority, PathScore};

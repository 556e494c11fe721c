//! Evolutionary search.
//!
//! A small generational engine built on trait-based abstractions, and
//! its instantiation over the affordable outfit/jewelry pairs.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`EvolutionProblem`]: Initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Population size, generations, tournament size, rates
//! - [`EvolutionRunner`]: Executes the generational loop
//! - [`EvolutionarySearch`]: Runs the loop over a [`PairSpace`](crate::constraint::PairSpace)
//!
//! The search is stochastic by design. Its random source is an explicit
//! argument, so callers seed it for reproducible runs.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod outfit;
mod runner;
mod selection;
mod types;

pub use config::EvolutionConfig;
pub use outfit::{EvolutionaryOutcome, EvolutionarySearch, FitnessWeights, OutfitProblem, PairGenome};
pub use runner::{EvolutionResult, EvolutionRunner};
pub use selection::tournament;
pub use types::{EvolutionProblem, Fitness, Individual};

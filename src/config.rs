//! Engine configuration.
//!
//! Every table is optional in TOML; omitted values take their defaults.
//!
//! ```
//! use stylist_core::StylistConfig;
//!
//! let config = StylistConfig::from_toml_str(r#"
//!     seed = 42
//!
//!     [evolution]
//!     population_size = 80
//!     generations = 30
//!
//!     [scoring]
//!     outfit_occasion = 0.25
//!
//!     [validation]
//!     pass_threshold = 4
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(42));
//! assert_eq!(config.evolution.population_size, 80);
//! assert_eq!(config.evolution.tournament_size, 3);
//! assert_eq!(config.validation.pass_threshold, 4);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StylistError;
use crate::evolution::{EvolutionConfig, FitnessWeights};
use crate::optimal::ScoringWeights;
use crate::validation::ValidationConfig;

/// Top-level configuration of a [`Stylist`](crate::recommend::Stylist).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylistConfig {
    /// Seed for the evolutionary search. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Run the two searches concurrently. Requires the `parallel`
    /// feature; ignored otherwise.
    pub parallel: bool,

    pub evolution: EvolutionConfig,
    pub fitness: FitnessWeights,
    pub scoring: ScoringWeights,
    pub validation: ValidationConfig,
}

impl StylistConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, StylistError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StylistError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_evolution(mut self, evolution: EvolutionConfig) -> Self {
        self.evolution = evolution;
        self
    }

    pub fn with_fitness(mut self, fitness: FitnessWeights) -> Self {
        self.fitness = fitness;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), StylistError> {
        let prefixed = |section: &str, msg: String| StylistError::InvalidConfig(format!("{section}: {msg}"));
        self.evolution.validate().map_err(|e| prefixed("evolution", e))?;
        self.fitness.validate().map_err(|e| prefixed("fitness", e))?;
        self.scoring.validate().map_err(|e| prefixed("scoring", e))?;
        self.validation.validate().map_err(|e| prefixed("validation", e))?;
        Ok(())
    }
}

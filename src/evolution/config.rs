//! Evolutionary search configuration.

use serde::{Deserialize, Serialize};

/// Parameters of the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use stylist_core::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 20);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use stylist_core::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(80)
///     .with_generations(40)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Fixed number of generations; there is no early termination.
    pub generations: usize,

    /// Individuals drawn per tournament.
    pub tournament_size: usize,

    /// Probability of recombining the two parents (0.0–1.0).
    ///
    /// When crossover is skipped the first parent is cloned.
    pub crossover_rate: f64,

    /// Probability of mutating a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). Zero replaces the whole population.
    pub elite_ratio: f64,

    /// Whether to evaluate individuals on the rayon pool.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 20,
            tournament_size: 3,
            crossover_rate: 1.0,
            mutation_rate: 0.1,
            elite_ratio: 0.0,
            parallel: false,
        }
    }
}

impl EvolutionConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elite_ratio", self.elite_ratio),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(format!("{name} must be within 0.0..=1.0"));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 20);
        assert_eq!(config.tournament_size, 3);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.elite_count(), 0);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = EvolutionConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolutionConfig::default().with_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = EvolutionConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = EvolutionConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_out_of_range_rate_from_toml() {
        let config: EvolutionConfig = toml::from_str("mutation_rate = 1.5").unwrap();
        assert!(config.validate().is_err());
    }
}

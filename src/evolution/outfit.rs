//! Evolutionary search over the affordable-pair space.
//!
//! Every individual is drawn from [`PairSpace::pairs`], so the whole
//! population is budget-valid without penalty terms. Crossover picks the
//! outfit and the jewelry independently from either parent; an
//! over-budget child is replaced by a fresh affordable pair, and
//! mutation does the same unconditionally.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::EvolutionConfig;
use super::runner::EvolutionRunner;
use super::types::{EvolutionProblem, Fitness, Individual};
use crate::constraint::{PairIndex, PairSpace};
use crate::error::StylistError;
use crate::optimal::Band;
use crate::request::Request;

/// Constants of the additive fitness function.
///
/// Fitness is unbounded-positive and never below `baseline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    pub baseline: f64,
    pub outfit_occasion: f64,
    pub jewelry_occasion: f64,

    /// Utilisation range that earns `utilization_scale * utilisation`.
    pub utilization_band: Band,
    pub utilization_scale: f64,

    /// Bonus when the two items have different categories.
    pub category_bonus: f64,

    /// Multiplier of `min(price) / max(price)`.
    pub balance_scale: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            baseline: 100.0,
            outfit_occasion: 50.0,
            jewelry_occasion: 30.0,
            utilization_band: Band::new(0.5, 0.9),
            utilization_scale: 40.0,
            category_bonus: 20.0,
            balance_scale: 30.0,
        }
    }
}

impl FitnessWeights {
    /// Validates the weights.
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("baseline", self.baseline),
            ("outfit_occasion", self.outfit_occasion),
            ("jewelry_occasion", self.jewelry_occasion),
            ("utilization_scale", self.utilization_scale),
            ("category_bonus", self.category_bonus),
            ("balance_scale", self.balance_scale),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative"));
            }
        }
        let band = self.utilization_band;
        if band.min < 0.0 || band.min > band.max {
            return Err("utilization_band must satisfy 0 <= min <= max".into());
        }
        Ok(())
    }
}

/// One individual: an affordable pair and its cost (negated fitness).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGenome {
    pub pair: PairIndex,
    cost: f64,
}

impl PairGenome {
    fn new(pair: PairIndex) -> Self {
        Self {
            pair,
            cost: f64::worst(),
        }
    }

    /// Fitness in the positive, higher-is-better convention.
    pub fn score(&self) -> f64 {
        -self.cost
    }
}

impl Individual for PairGenome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.cost
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.cost = fitness;
    }
}

/// The pair-space problem plugged into [`EvolutionRunner`].
pub struct OutfitProblem<'s, 'a> {
    space: &'s PairSpace<'a>,
    first: PairIndex,
    request: &'s Request,
    weights: &'s FitnessWeights,
}

impl<'s, 'a> OutfitProblem<'s, 'a> {
    /// Returns `None` when the space has no affordable pair.
    pub fn new(space: &'s PairSpace<'a>, request: &'s Request, weights: &'s FitnessWeights) -> Option<Self> {
        let first = *space.pairs().first()?;
        Some(Self {
            space,
            first,
            request,
            weights,
        })
    }

    /// Positive fitness of a pair.
    pub fn fitness_of(&self, pair: PairIndex) -> f64 {
        let w = self.weights;
        let candidate = self.space.candidate(pair);
        let mut score = w.baseline;

        if candidate.outfit.occasion_matches(&self.request.occasion) {
            score += w.outfit_occasion;
        }
        if candidate.jewelry.occasion_matches(&self.request.occasion) {
            score += w.jewelry_occasion;
        }

        if self.space.budget() > 0 {
            let utilization = candidate.total_cost as f64 / self.space.budget() as f64;
            if w.utilization_band.contains(utilization) {
                score += w.utilization_scale * utilization;
            }
        }

        if candidate.outfit.category != candidate.jewelry.category {
            score += w.category_bonus;
        }

        let hi = candidate.outfit.price.max(candidate.jewelry.price);
        let lo = candidate.outfit.price.min(candidate.jewelry.price);
        if hi > 0 {
            score += w.balance_scale * (lo as f64 / hi as f64);
        }

        score
    }

    /// A uniformly drawn affordable pair. The space is non-empty here.
    fn draw<R: Rng>(&self, rng: &mut R) -> PairIndex {
        self.space.random_pair(rng).unwrap_or(self.first)
    }
}

impl EvolutionProblem for OutfitProblem<'_, '_> {
    type Individual = PairGenome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> PairGenome {
        PairGenome::new(self.draw(rng))
    }

    fn evaluate(&self, individual: &PairGenome) -> f64 {
        -self.fitness_of(individual.pair)
    }

    fn crossover<R: Rng>(&self, parent1: &PairGenome, parent2: &PairGenome, rng: &mut R) -> Vec<PairGenome> {
        let outfit = if rng.random_bool(0.5) {
            parent1.pair.outfit
        } else {
            parent2.pair.outfit
        };
        let jewelry = if rng.random_bool(0.5) {
            parent1.pair.jewelry
        } else {
            parent2.pair.jewelry
        };

        let pair = match self.space.affordable(outfit, jewelry) {
            Some(pair) => pair,
            None => self.draw(rng),
        };
        vec![PairGenome::new(pair)]
    }

    fn mutate<R: Rng>(&self, individual: &mut PairGenome, rng: &mut R) {
        *individual = PairGenome::new(self.draw(rng));
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        tracing::trace!(generation, fitness = -best_fitness, "evolution generation");
    }
}

/// Outcome of [`EvolutionarySearch::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionaryOutcome {
    /// Fittest pair of the final population; `None` when infeasible.
    pub best: Option<PairIndex>,

    /// Positive fitness of `best`, `0.0` when infeasible.
    pub fitness: f64,

    /// Generations executed (0 when infeasible).
    pub generations: usize,

    /// Best positive fitness per generation, starting with the initial
    /// population.
    pub history: Vec<f64>,
}

/// Population-based alternate search over the affordable pairs.
///
/// # Usage
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use stylist_core::catalog::sample_catalog;
/// use stylist_core::constraint::PairSpace;
/// use stylist_core::evolution::{EvolutionConfig, EvolutionarySearch, FitnessWeights};
/// use stylist_core::Request;
///
/// let catalog = sample_catalog();
/// let request = Request::new("party", 10_000).unwrap();
/// let space = PairSpace::build(&catalog, request.budget);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let outcome = EvolutionarySearch::run(
///     &space,
///     &request,
///     &EvolutionConfig::default(),
///     &FitnessWeights::default(),
///     &mut rng,
/// )
/// .unwrap();
/// assert!(outcome.best.unwrap().total_cost <= 10_000);
/// ```
pub struct EvolutionarySearch;

impl EvolutionarySearch {
    /// Runs the search. An empty pair space returns immediately without
    /// entering the loop or touching `rng`.
    pub fn run<R: Rng>(
        space: &PairSpace<'_>,
        request: &Request,
        config: &EvolutionConfig,
        weights: &FitnessWeights,
        rng: &mut R,
    ) -> Result<EvolutionaryOutcome, StylistError> {
        let Some(problem) = OutfitProblem::new(space, request, weights) else {
            tracing::debug!("evolutionary search: no affordable pair");
            return Ok(EvolutionaryOutcome {
                best: None,
                fitness: 0.0,
                generations: 0,
                history: Vec::new(),
            });
        };

        let result = EvolutionRunner::run(&problem, config, rng)?;
        let fitness = result.best.score();

        tracing::debug!(
            generations = result.generations,
            fitness,
            total_cost = result.best.pair.total_cost,
            "evolutionary search finished"
        );

        Ok(EvolutionaryOutcome {
            best: Some(result.best.pair),
            fitness,
            generations: result.generations,
            history: result.fitness_history.iter().map(|c| -c).collect(),
        })
    }
}

//! Recommendation orchestrator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{AlgorithmMetrics, Recommendation, SearchSource};
use crate::catalog::{CatalogProvider, Product};
use crate::config::StylistConfig;
use crate::constraint::{PairIndex, PairSpace};
use crate::error::StylistError;
use crate::evolution::{EvolutionaryOutcome, EvolutionarySearch};
use crate::optimal::{OptimalResult, OptimalSearch};
use crate::request::Request;
use crate::validation::{RuleSet, RuleValidator};

/// Composes the constraint filter, both searches and the rule validator
/// into one recommendation.
///
/// Each call is self-contained: nothing is shared between requests
/// except the immutable configuration.
///
/// # Usage
///
/// ```
/// use stylist_core::catalog::sample_catalog;
/// use stylist_core::{Request, Stylist, StylistConfig};
///
/// let stylist = Stylist::new(StylistConfig::default().with_seed(42)).unwrap();
/// let request = Request::new("wedding", 8000)
///     .unwrap()
///     .with_preferences("gold embroidery");
///
/// let rec = stylist.recommend(&sample_catalog(), &request).unwrap();
/// let (outfit, jewelry) = rec.pair().unwrap();
/// assert_eq!(rec.total_cost, outfit.price + jewelry.price);
/// assert!(rec.total_cost <= 8000);
/// ```
#[derive(Debug, Clone)]
pub struct Stylist {
    config: StylistConfig,
    validator: RuleValidator,
}

impl Stylist {
    /// Creates a stylist with the standard rule set.
    ///
    /// Returns [`StylistError::InvalidConfig`] if any section of `config`
    /// is out of range.
    pub fn new(config: StylistConfig) -> Result<Self, StylistError> {
        config.validate()?;
        let validator = RuleValidator::new(RuleSet::standard(), config.validation.clone());
        Ok(Self { config, validator })
    }

    /// Replaces the validator's rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.validator = RuleValidator::new(rules, self.config.validation.clone());
        self
    }

    pub fn config(&self) -> &StylistConfig {
        &self.config
    }

    /// Fetches the catalog from `provider`, then recommends.
    ///
    /// Catalog errors are returned unchanged; nothing is computed on a
    /// partial catalog.
    pub fn recommend_from<C: CatalogProvider + ?Sized>(
        &self,
        provider: &C,
        request: &Request,
    ) -> Result<Recommendation, StylistError> {
        request.validate()?;
        let catalog = provider.products()?;
        self.recommend(&catalog, request)
    }

    /// Recommends using the configured seed, or OS entropy when unset.
    pub fn recommend(&self, catalog: &[Product], request: &Request) -> Result<Recommendation, StylistError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.recommend_with_rng(catalog, request, &mut rng)
    }

    /// Recommends using an injected random source.
    ///
    /// The evolutionary search draws from a generator seeded off `rng`,
    /// so a given `rng` state yields the same result whether or not the
    /// searches run concurrently.
    pub fn recommend_with_rng<R: Rng>(
        &self,
        catalog: &[Product],
        request: &Request,
        rng: &mut R,
    ) -> Result<Recommendation, StylistError> {
        request.validate()?;

        let space = PairSpace::build(catalog, request.budget);
        let mut search_rng = StdRng::seed_from_u64(rng.random());
        let (optimal, evolutionary) = self.run_searches(&space, request, &mut search_rng)?;

        let Some((pair, source)) = select_pair(&optimal, &evolutionary) else {
            tracing::info!(
                occasion = %request.occasion,
                budget = request.budget,
                "no affordable outfit and jewelry pair"
            );
            return Ok(shortfall(request, &optimal, &evolutionary));
        };

        let candidate = space.candidate(pair);
        let report = self
            .validator
            .validate(Some(candidate.outfit), Some(candidate.jewelry), &request.occasion);

        tracing::info!(
            outfit = %candidate.outfit.id,
            jewelry = %candidate.jewelry.id,
            total_cost = candidate.total_cost,
            ?source,
            rule_score = report.score,
            passed = report.passed,
            "recommendation ready"
        );

        Ok(Recommendation {
            outfit: Some(candidate.outfit.clone()),
            jewelry: Some(candidate.jewelry.clone()),
            style_tips: report.tips,
            total_cost: candidate.total_cost,
            algorithm_metrics: AlgorithmMetrics {
                optimal_score: optimal.best.map(|b| b.score.f_score),
                evolutionary_fitness: evolutionary.fitness,
                rule_score: report.score,
                validation_passed: report.passed,
                source: Some(source),
            },
            no_products_available: false,
        })
    }

    #[cfg(feature = "parallel")]
    fn run_searches(
        &self,
        space: &PairSpace<'_>,
        request: &Request,
        rng: &mut StdRng,
    ) -> Result<(OptimalResult, EvolutionaryOutcome), StylistError> {
        if !self.config.parallel {
            return self.run_searches_sequential(space, request, rng);
        }
        let (optimal, evolutionary) = rayon::join(
            || OptimalSearch::run(space, request, &self.config.scoring),
            || {
                EvolutionarySearch::run(
                    space,
                    request,
                    &self.config.evolution,
                    &self.config.fitness,
                    rng,
                )
            },
        );
        Ok((optimal, evolutionary?))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_searches(
        &self,
        space: &PairSpace<'_>,
        request: &Request,
        rng: &mut StdRng,
    ) -> Result<(OptimalResult, EvolutionaryOutcome), StylistError> {
        self.run_searches_sequential(space, request, rng)
    }

    fn run_searches_sequential(
        &self,
        space: &PairSpace<'_>,
        request: &Request,
        rng: &mut StdRng,
    ) -> Result<(OptimalResult, EvolutionaryOutcome), StylistError> {
        let optimal = OptimalSearch::run(space, request, &self.config.scoring);
        let evolutionary = EvolutionarySearch::run(
            space,
            request,
            &self.config.evolution,
            &self.config.fitness,
            rng,
        )?;
        Ok((optimal, evolutionary))
    }
}

/// Prefers the optimal-path pair and falls back to the evolutionary one.
fn select_pair(
    optimal: &OptimalResult,
    evolutionary: &EvolutionaryOutcome,
) -> Option<(PairIndex, SearchSource)> {
    optimal
        .best
        .map(|b| (b.pair, SearchSource::Optimal))
        .or_else(|| evolutionary.best.map(|p| (p, SearchSource::Evolutionary)))
}

fn shortfall(
    request: &Request,
    optimal: &OptimalResult,
    evolutionary: &EvolutionaryOutcome,
) -> Recommendation {
    Recommendation {
        outfit: None,
        jewelry: None,
        style_tips: shortfall_tips(request),
        total_cost: 0,
        algorithm_metrics: AlgorithmMetrics {
            optimal_score: optimal.best.map(|b| b.score.f_score),
            evolutionary_fitness: evolutionary.fitness,
            rule_score: 0.0,
            validation_passed: false,
            source: None,
        },
        no_products_available: true,
    }
}

fn shortfall_tips(request: &Request) -> Vec<String> {
    vec![
        format!(
            "No outfit and jewelry combination fits within a budget of {}; consider raising it or shopping the pieces separately",
            request.budget
        ),
        format!(
            "Look for versatile {} pieces that can be re-worn across occasions",
            request.preferences_or_default()
        ),
        "A simple outfit lifted by one statement jewelry piece stretches a tight budget".to_string(),
        format!(
            "Watch for new arrivals and seasonal sales on {} wear",
            request.occasion.trim()
        ),
    ]
}

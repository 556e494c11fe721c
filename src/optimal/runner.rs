//! Exhaustive optimal-path search.

use super::config::ScoringWeights;
use super::scoring::{score_pair, PathScore};
use crate::constraint::{PairIndex, PairSpace};
use crate::request::Request;

/// An affordable pair together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair {
    pub pair: PairIndex,
    pub score: PathScore,
}

/// Result of an optimal-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalResult {
    /// The lowest-`f_score` pair, `None` when no pair is affordable.
    pub best: Option<ScoredPair>,

    /// `f_score` of `best`, `f64::INFINITY` when infeasible.
    pub f_score: f64,

    /// Number of pairs scored.
    pub evaluated: usize,
}

impl OptimalResult {
    fn infeasible() -> Self {
        Self {
            best: None,
            f_score: f64::INFINITY,
            evaluated: 0,
        }
    }
}

/// Scores every affordable pair and picks the best deterministically.
///
/// # Usage
///
/// ```
/// use stylist_core::catalog::sample_catalog;
/// use stylist_core::constraint::PairSpace;
/// use stylist_core::optimal::{OptimalSearch, ScoringWeights};
/// use stylist_core::Request;
///
/// let catalog = sample_catalog();
/// let request = Request::new("wedding", 8000).unwrap();
/// let space = PairSpace::build(&catalog, request.budget);
///
/// let result = OptimalSearch::run(&space, &request, &ScoringWeights::default());
/// let best = result.best.unwrap();
/// assert!(best.pair.total_cost <= 8000);
/// ```
pub struct OptimalSearch;

impl OptimalSearch {
    /// Returns every affordable pair ordered by `f_score` ascending.
    ///
    /// The sort is stable, so equal scores keep enumeration order.
    pub fn rank(space: &PairSpace<'_>, request: &Request, weights: &ScoringWeights) -> Vec<ScoredPair> {
        let keywords = request.keywords();
        let mut scored: Vec<ScoredPair> = space
            .pairs()
            .iter()
            .map(|&pair| ScoredPair {
                pair,
                score: score_pair(&space.candidate(pair), request, &keywords, weights),
            })
            .collect();

        scored.sort_by(|a, b| {
            a.score
                .f_score
                .partial_cmp(&b.score.f_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    /// Runs the search and returns the single best pair.
    pub fn run(space: &PairSpace<'_>, request: &Request, weights: &ScoringWeights) -> OptimalResult {
        if space.is_empty() {
            tracing::debug!("optimal search: no affordable pair");
            return OptimalResult::infeasible();
        }

        let ranked = Self::rank(space, request, weights);
        let evaluated = ranked.len();
        let Some(best) = ranked.into_iter().next() else {
            return OptimalResult::infeasible();
        };

        tracing::debug!(
            evaluated,
            f_score = best.score.f_score,
            benefit = best.score.benefit,
            total_cost = best.pair.total_cost,
            "optimal search finished"
        );

        OptimalResult {
            f_score: best.score.f_score,
            best: Some(best),
            evaluated,
        }
    }
}

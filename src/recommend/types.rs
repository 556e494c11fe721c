//! Recommendation output.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Which search supplied the presented pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchSource {
    Optimal,
    Evolutionary,
}

/// Scores reported by the three components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetrics {
    /// Optimal-path `f_score` of its best pair (lower is better).
    /// `None` when it found nothing.
    #[serde(rename = "aStarScore")]
    pub optimal_score: Option<f64>,

    /// Evolutionary fitness of its best pair, 0 when it found nothing.
    #[serde(rename = "geneticFitness")]
    pub evolutionary_fitness: f64,

    /// Rule validator score, 0 when the validator did not run.
    #[serde(rename = "expertScore")]
    pub rule_score: f64,

    pub validation_passed: bool,

    #[serde(default)]
    pub source: Option<SearchSource>,
}

/// The engine's answer to one request.
///
/// `outfit` and `jewelry` are either both present or both absent; when
/// absent, `total_cost` is 0 and `style_tips` carries budget-shortfall
/// guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub outfit: Option<Product>,
    pub jewelry: Option<Product>,
    pub style_tips: Vec<String>,
    pub total_cost: u64,
    pub algorithm_metrics: AlgorithmMetrics,
    #[serde(default)]
    pub no_products_available: bool,
}

impl Recommendation {
    /// The selected pair, if any.
    pub fn pair(&self) -> Option<(&Product, &Product)> {
        self.outfit.as_ref().zip(self.jewelry.as_ref())
    }
}

//! Benefit model for a single candidate pair.
//!
//! Four additive components (occasion, preference, budget, coordination)
//! form the total benefit `b ∈ [0, 1]`. The path cost is `g = 1 - b`
//! and the heuristic `h` penalises under-spending on high-priority
//! occasions, giving `f = g + h` where lower is better.

use super::config::ScoringWeights;
use crate::catalog::{same_occasion, Category};
use crate::constraint::CandidatePair;
use crate::request::Request;

/// How much an occasion warrants spending close to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccasionPriority {
    /// Wedding, formal, traditional, festive.
    High,
    /// Casual, party and anything unrecognised.
    Standard,
}

impl OccasionPriority {
    const HIGH: [&'static str; 4] = ["wedding", "formal", "traditional", "festive"];

    /// Classifies an occasion label, ignoring ASCII case.
    pub fn of(occasion: &str) -> Self {
        if Self::HIGH.iter().any(|h| same_occasion(h, occasion)) {
            OccasionPriority::High
        } else {
            OccasionPriority::Standard
        }
    }
}

/// Component breakdown of a pair's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathScore {
    pub occasion: f64,
    pub preference: f64,
    pub budget: f64,
    pub coordination: f64,

    /// Sum of the four components, clamped to `[0, 1]`.
    pub benefit: f64,

    /// Under-utilisation penalty.
    pub heuristic: f64,

    /// `(1 - benefit) + heuristic`. Lower is better.
    pub f_score: f64,
}

/// Scores one pair against the request.
///
/// `keywords` are the request's preference keywords, passed in so they
/// are tokenised once per search rather than once per pair.
pub fn score_pair(
    pair: &CandidatePair<'_>,
    request: &Request,
    keywords: &[String],
    weights: &ScoringWeights,
) -> PathScore {
    let occasion = occasion_component(pair, request, weights);
    let preference = preference_component(pair, keywords, weights);
    let (budget, heuristic) = budget_component(pair, request, weights);
    let coordination = coordination_component(pair, weights);

    let benefit = (occasion + preference + budget + coordination).clamp(0.0, 1.0);
    PathScore {
        occasion,
        preference,
        budget,
        coordination,
        benefit,
        heuristic,
        f_score: (1.0 - benefit) + heuristic,
    }
}

fn occasion_component(pair: &CandidatePair<'_>, request: &Request, w: &ScoringWeights) -> f64 {
    let outfit = pair.outfit.occasion_matches(&request.occasion);
    let jewelry = pair.jewelry.occasion_matches(&request.occasion);
    let mut score = 0.0;
    if outfit {
        score += w.outfit_occasion;
    }
    if jewelry {
        score += w.jewelry_occasion;
    }
    if outfit && jewelry {
        score += w.occasion_coordination;
    }
    score
}

fn preference_component(pair: &CandidatePair<'_>, keywords: &[String], w: &ScoringWeights) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let outfit_text = pair.outfit.search_text();
    let jewelry_text = pair.jewelry.search_text();
    let hits = keywords
        .iter()
        .map(|k| usize::from(outfit_text.contains(k.as_str())) + usize::from(jewelry_text.contains(k.as_str())))
        .sum::<usize>();
    (hits as f64 * w.preference_per_hit).min(w.preference_cap)
}

/// Returns `(reward, heuristic_penalty)`.
fn budget_component(pair: &CandidatePair<'_>, request: &Request, w: &ScoringWeights) -> (f64, f64) {
    if request.budget == 0 {
        return (0.0, 0.0);
    }
    let utilization = pair.total_cost as f64 / request.budget as f64;
    let priority = OccasionPriority::of(&request.occasion);
    let (band, reward) = match priority {
        OccasionPriority::High => (w.high_priority_band, w.high_priority_reward),
        OccasionPriority::Standard => (w.standard_band, w.standard_reward),
    };

    let score = if band.contains(utilization) {
        reward
    } else if utilization <= 1.0 {
        w.off_band_reward
    } else {
        0.0
    };

    let penalty = match priority {
        OccasionPriority::High if utilization < band.min => (band.min - utilization) * w.underuse_penalty,
        _ => 0.0,
    };

    (score, penalty)
}

fn coordination_component(pair: &CandidatePair<'_>, w: &ScoringWeights) -> f64 {
    let mut score = 0.0;
    if pair.jewelry.price > 0 {
        let ratio = pair.outfit.price as f64 / pair.jewelry.price as f64;
        if w.price_ratio_band.contains(ratio) {
            score += w.price_ratio_reward;
        }
    }
    if pair.outfit.category == Category::Outfit && pair.jewelry.category == Category::Jewelry {
        score += w.category_bonus;
    }
    score
}

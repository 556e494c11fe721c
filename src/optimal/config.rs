//! Scoring weights for the optimal-path search.
//!
//! [`ScoringWeights`] holds every constant of the four benefit
//! components. The defaults sum to a total benefit just under 1.0.

use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` of budget utilisation or price ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Weights and bands of the optimal-path benefit model.
///
/// # Defaults
///
/// ```
/// use stylist_core::optimal::ScoringWeights;
///
/// let w = ScoringWeights::default();
/// assert!((w.outfit_occasion - 0.20).abs() < 1e-12);
/// assert!(w.high_priority_band.contains(0.8));
/// assert!(w.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bonus when the outfit's occasion matches the request.
    pub outfit_occasion: f64,

    /// Bonus when the jewelry's occasion matches the request.
    pub jewelry_occasion: f64,

    /// Extra bonus when both items match.
    pub occasion_coordination: f64,

    /// Bonus per keyword hit per item.
    pub preference_per_hit: f64,

    /// Upper bound of the preference component.
    pub preference_cap: f64,

    /// Target utilisation for wedding, formal, traditional and festive.
    pub high_priority_band: Band,

    pub high_priority_reward: f64,

    /// Target utilisation for every other occasion.
    pub standard_band: Band,

    pub standard_reward: f64,

    /// Reward for an in-budget pair outside the target band.
    pub off_band_reward: f64,

    /// Heuristic penalty per unit of utilisation below the high-priority
    /// band.
    pub underuse_penalty: f64,

    /// Accepted `outfit.price / jewelry.price` range.
    pub price_ratio_band: Band,

    pub price_ratio_reward: f64,

    /// Flat bonus for an exact outfit + jewelry category pairing.
    pub category_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            outfit_occasion: 0.20,
            jewelry_occasion: 0.10,
            occasion_coordination: 0.05,
            preference_per_hit: 0.05,
            preference_cap: 0.20,
            high_priority_band: Band::new(0.70, 0.95),
            high_priority_reward: 0.20,
            standard_band: Band::new(0.40, 0.85),
            standard_reward: 0.15,
            off_band_reward: 0.05,
            underuse_penalty: 0.10,
            price_ratio_band: Band::new(0.5, 3.0),
            price_ratio_reward: 0.15,
            category_bonus: 0.05,
        }
    }
}

impl ScoringWeights {
    /// Sets the three occasion bonuses.
    pub fn with_occasion_weights(mut self, outfit: f64, jewelry: f64, coordination: f64) -> Self {
        self.outfit_occasion = outfit;
        self.jewelry_occasion = jewelry;
        self.occasion_coordination = coordination;
        self
    }

    /// Sets the per-hit preference bonus and its cap.
    pub fn with_preference(mut self, per_hit: f64, cap: f64) -> Self {
        self.preference_per_hit = per_hit;
        self.preference_cap = cap;
        self
    }

    /// Sets the high-priority utilisation band.
    pub fn with_high_priority_band(mut self, band: Band) -> Self {
        self.high_priority_band = band;
        self
    }

    /// Sets the standard utilisation band.
    pub fn with_standard_band(mut self, band: Band) -> Self {
        self.standard_band = band;
        self
    }

    /// Sets the under-utilisation penalty factor.
    pub fn with_underuse_penalty(mut self, penalty: f64) -> Self {
        self.underuse_penalty = penalty;
        self
    }

    /// Validates the weights.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("outfit_occasion", self.outfit_occasion),
            ("jewelry_occasion", self.jewelry_occasion),
            ("occasion_coordination", self.occasion_coordination),
            ("preference_per_hit", self.preference_per_hit),
            ("preference_cap", self.preference_cap),
            ("high_priority_reward", self.high_priority_reward),
            ("standard_reward", self.standard_reward),
            ("off_band_reward", self.off_band_reward),
            ("underuse_penalty", self.underuse_penalty),
            ("price_ratio_reward", self.price_ratio_reward),
            ("category_bonus", self.category_bonus),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative"));
            }
        }
        let bands = [
            ("high_priority_band", self.high_priority_band),
            ("standard_band", self.standard_band),
            ("price_ratio_band", self.price_ratio_band),
        ];
        for (name, band) in bands {
            if !(band.min.is_finite() && band.max.is_finite()) || band.min < 0.0 || band.min > band.max {
                return Err(format!("{name} must satisfy 0 <= min <= max"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn test_band_inclusive() {
        let b = Band::new(0.5, 3.0);
        assert!(b.contains(0.5));
        assert!(b.contains(3.0));
        assert!(!b.contains(3.0001));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = ScoringWeights::default().with_occasion_weights(-0.1, 0.1, 0.0);
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let w = ScoringWeights::default().with_standard_band(Band::new(0.9, 0.4));
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let w = ScoringWeights::default()
            .with_preference(0.1, 0.3)
            .with_underuse_penalty(0.2);
        assert!((w.preference_per_hit - 0.1).abs() < 1e-12);
        assert!((w.preference_cap - 0.3).abs() < 1e-12);
        assert!((w.underuse_penalty - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let w: ScoringWeights = toml::from_str("outfit_occasion = 0.3").unwrap();
        assert!((w.outfit_occasion - 0.3).abs() < 1e-12);
        assert_eq!(w.standard_band, ScoringWeights::default().standard_band);
    }
}

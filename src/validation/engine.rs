//! Rule evaluation engine.

use serde::{Deserialize, Serialize};

use super::rules::{accessory_tip, coordination_tip, hairstyle_tip, NO_PRODUCTS_TIP, STANDARD_RULES};
use super::types::{Rule, RuleContext, ValidationReport};
use crate::catalog::{same_occasion, Product};

/// Tunables of the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of weighted rules that must fire to pass.
    pub pass_threshold: usize,

    /// Score added when both items carry the same occasion label.
    pub coordination_bonus: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 3,
            coordination_bonus: 5.0,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.coordination_bonus.is_finite() || self.coordination_bonus < 0.0 {
            return Err("coordination_bonus must be finite and non-negative".into());
        }
        Ok(())
    }
}

/// An ordered collection of weighted rules.
///
/// # Examples
///
/// ```
/// use stylist_core::validation::{Rule, RuleId, RuleSet};
///
/// let rules = RuleSet::standard().with_rule(Rule {
///     id: RuleId::Custom("described"),
///     weight: 5.0,
///     predicate: |ctx| !ctx.outfit.description.is_empty(),
///     tip: |_| "Detailed pieces photograph well".to_string(),
/// });
/// assert_eq!(rules.len(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The six standard rules.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Evaluates a [`RuleSet`] against a chosen pair.
#[derive(Debug, Clone)]
pub struct RuleValidator {
    rules: RuleSet,
    config: ValidationConfig,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new(RuleSet::standard(), ValidationConfig::default())
    }
}

impl RuleValidator {
    pub fn new(rules: RuleSet, config: ValidationConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates a pair for the requested occasion.
    ///
    /// If either item is missing, returns score 0, not passed, and a
    /// single "no products" tip.
    pub fn validate(
        &self,
        outfit: Option<&Product>,
        jewelry: Option<&Product>,
        occasion: &str,
    ) -> ValidationReport {
        let (Some(outfit), Some(jewelry)) = (outfit, jewelry) else {
            return ValidationReport {
                score: 0.0,
                passed: false,
                fired: Vec::new(),
                tips: vec![NO_PRODUCTS_TIP.to_string()],
            };
        };

        let ctx = RuleContext {
            outfit,
            jewelry,
            occasion: occasion.trim(),
        };

        let mut score = 0.0;
        let mut fired = Vec::new();
        let mut tips = Vec::new();
        for rule in self.rules.rules() {
            if (rule.predicate)(&ctx) {
                score += rule.weight;
                fired.push(rule.id);
                tips.push((rule.tip)(&ctx));
            }
        }

        if let (Some(a), Some(b)) = (outfit.occasion.as_deref(), jewelry.occasion.as_deref()) {
            if same_occasion(a, b) {
                score += self.config.coordination_bonus;
                tips.push(coordination_tip(a));
            }
        }

        tips.push(accessory_tip(&ctx));
        tips.push(hairstyle_tip(&ctx));

        let passed = fired.len() >= self.config.pass_threshold;
        tracing::debug!(
            score,
            fired = fired.len(),
            passed,
            "validated pair"
        );

        ValidationReport {
            score,
            passed,
            fired,
            tips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::validation::RuleId;

    fn outfit(price: u64, occasion: &str) -> Product {
        Product::new("o", "Lawn Suit", price, Category::Outfit).with_occasion(occasion)
    }

    fn jewel(price: u64, occasion: &str) -> Product {
        Product::new("j", "Kundan Set", price, Category::Jewelry).with_occasion(occasion)
    }

    #[test]
    fn test_standard_table() {
        let rules = RuleSet::standard();
        assert_eq!(rules.len(), 6);
        let total: f64 = rules.rules().iter().map(|r| r.weight).sum();
        assert!((total - 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_null_input() {
        let v = RuleValidator::default();
        let o = outfit(3000, "wedding");
        let report = v.validate(Some(&o), None, "wedding");
        assert_eq!(report.score, 0.0);
        assert!(!report.passed);
        assert_eq!(report.tips.len(), 1);
        assert!(report.fired.is_empty());

        let report = v.validate(None, None, "wedding");
        assert_eq!(report.tips, vec![NO_PRODUCTS_TIP.to_string()]);
    }

    #[test]
    fn test_wedding_pair_below_formal_pricing() {
        let v = RuleValidator::default();
        let o = outfit(3000, "wedding");
        let j = jewel(2000, "wedding");
        let report = v.validate(Some(&o), Some(&j), "wedding");

        assert_eq!(
            report.fired,
            vec![
                RuleId::OutfitOccasion,
                RuleId::JewelryOccasion,
                RuleId::BudgetBalance,
                RuleId::CategoryCoordination,
                RuleId::CasualBalance,
            ]
        );
        assert!(!report.fired.contains(&RuleId::FormalPricing));
        assert!(report.passed);
        // 25 + 20 + 15 + 15 + 10 + 5 coordination
        assert!((report.score - 90.0).abs() < 1e-12);
        assert_eq!(report.tips.len(), 5 + 1 + 2);
        assert!(report.tips.iter().any(|t| t.contains("clutch and heels")));
    }

    #[test]
    fn test_exactly_two_rules_fails() {
        let v = RuleValidator::default();
        // Party: formal and casual rules hold vacuously; nothing else does.
        let o = Product::new("o", "Odd", 10_000, Category::Jewelry).with_occasion("casual");
        let j = jewel(1000, "bridal");
        let report = v.validate(Some(&o), Some(&j), "party");

        assert_eq!(report.fired, vec![RuleId::FormalPricing, RuleId::CasualBalance]);
        assert!(!report.passed);
        assert!((report.score - 20.0).abs() < 1e-12);
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn test_exactly_three_rules_passes() {
        let v = RuleValidator::default();
        let o = Product::new("o", "Odd", 10_000, Category::Jewelry).with_occasion("party");
        let j = jewel(1000, "bridal");
        let report = v.validate(Some(&o), Some(&j), "party");

        assert_eq!(report.fired.len(), 3);
        assert!(report.passed);
        assert!((report.score - 45.0).abs() < 1e-12);
        assert_eq!(report.tips.len(), 5);
    }

    #[test]
    fn test_casual_overpriced_outfit() {
        let v = RuleValidator::default();
        let o = outfit(6000, "casual");
        let j = jewel(3000, "casual");
        let report = v.validate(Some(&o), Some(&j), "casual");

        assert!(!report.fired.contains(&RuleId::CasualBalance));
        assert_eq!(report.fired.len(), 5);
        // 25 + 20 + 15 + 15 + 10 + 5, no casual-balance weight
        assert!((report.score - 90.0).abs() < 1e-12);
        assert!(!report.tips.iter().any(|t| t.contains("casual look effortless")));
        assert_eq!(report.tips.len(), 8);
    }

    #[test]
    fn test_formal_pricing_met() {
        let v = RuleValidator::default();
        let o = outfit(6500, "formal");
        let j = jewel(2500, "party");
        let report = v.validate(Some(&o), Some(&j), "formal");

        assert!(report.fired.contains(&RuleId::FormalPricing));
        assert!(!report.fired.contains(&RuleId::JewelryOccasion));
        assert!(report.tips.iter().any(|t| t.contains("updo")));
    }

    #[test]
    fn test_occasion_case_insensitive() {
        let v = RuleValidator::default();
        let o = outfit(3000, "Wedding");
        let j = jewel(2000, "WEDDING");
        let report = v.validate(Some(&o), Some(&j), "wedding");
        assert!(report.fired.contains(&RuleId::OutfitOccasion));
        assert!(report.fired.contains(&RuleId::JewelryOccasion));
        assert!(report.tips.iter().any(|t| t.contains("coordinate naturally")));
    }

    #[test]
    fn test_padded_occasion_matches_trimmed() {
        let v = RuleValidator::default();
        let o = outfit(3000, "wedding ");
        let j = jewel(2000, "wedding");
        let padded = v.validate(Some(&o), Some(&j), " wedding");
        let plain = v.validate(Some(&o), Some(&j), "wedding");

        assert_eq!(padded, plain);
        assert!(!padded.fired.contains(&RuleId::FormalPricing));
        assert!(padded.tips.iter().any(|t| t.contains("clutch and heels")));
        assert!(padded.tips.iter().all(|t| !t.contains("  ")));
    }

    #[test]
    fn test_tip_count_grows_with_rules() {
        let v = RuleValidator::default();
        let j = jewel(2000, "bridal");
        let weak = Product::new("o", "Odd", 10_000, Category::Jewelry).with_occasion("casual");
        let strong = outfit(3000, "party");

        let a = v.validate(Some(&weak), Some(&j), "party");
        let b = v.validate(Some(&strong), Some(&j), "party");
        assert!(b.fired.len() > a.fired.len());
        assert!(b.tips.len() > a.tips.len());
        assert!(a.tips.len() >= 2);
    }

    #[test]
    fn test_custom_rule_and_threshold() {
        let rules = RuleSet::new().with_rule(Rule {
            id: RuleId::Custom("always"),
            weight: 7.0,
            predicate: |_| true,
            tip: |_| "always".to_string(),
        });
        let v = RuleValidator::new(
            rules,
            ValidationConfig {
                pass_threshold: 1,
                coordination_bonus: 0.0,
            },
        );
        let o = outfit(3000, "x");
        let j = jewel(3000, "y");
        let report = v.validate(Some(&o), Some(&j), "z");
        assert!(report.passed);
        assert_eq!(report.fired, vec![RuleId::Custom("always")]);
        assert!((report.score - 7.0).abs() < 1e-12);
        assert_eq!(report.tips.len(), 3);
    }

    #[test]
    fn test_config_validate() {
        assert!(ValidationConfig::default().validate().is_ok());
        let bad = ValidationConfig {
            coordination_bonus: f64::NAN,
            ..ValidationConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}

//! Rule and report types.

use crate::catalog::{same_occasion, Product};

/// Identifies a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    OutfitOccasion,
    JewelryOccasion,
    BudgetBalance,
    CategoryCoordination,
    FormalPricing,
    CasualBalance,
    /// A rule added on top of the standard set.
    Custom(&'static str),
}

impl RuleId {
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::OutfitOccasion => "outfit_occasion",
            RuleId::JewelryOccasion => "jewelry_occasion",
            RuleId::BudgetBalance => "budget_balance",
            RuleId::CategoryCoordination => "category_coordination",
            RuleId::FormalPricing => "formal_pricing",
            RuleId::CasualBalance => "casual_balance",
            RuleId::Custom(name) => name,
        }
    }
}

/// What a rule sees: the chosen pair and the requested occasion.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub outfit: &'a Product,
    pub jewelry: &'a Product,
    pub occasion: &'a str,
}

impl RuleContext<'_> {
    /// `true` if the requested occasion is any of `labels`.
    pub fn occasion_is(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| same_occasion(l, self.occasion))
    }

    /// `outfit.price / jewelry.price`, `None` for free jewelry.
    pub fn price_ratio(&self) -> Option<f64> {
        (self.jewelry.price > 0).then(|| self.outfit.price as f64 / self.jewelry.price as f64)
    }
}

/// One weighted rule: a predicate, its weight, and the tip emitted when
/// it holds.
///
/// Rules are plain data so a [`RuleSet`](super::RuleSet) can be extended
/// without touching the evaluation loop.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub weight: f64,
    pub predicate: fn(&RuleContext<'_>) -> bool,
    pub tip: fn(&RuleContext<'_>) -> String,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Result of validating one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Sum of fired rule weights plus the coordination bonus.
    pub score: f64,

    /// At least `pass_threshold` weighted rules fired.
    pub passed: bool,

    /// Weighted rules that fired, in rule order.
    pub fired: Vec<RuleId>,

    /// Rule tips, then the coordination tip, then the two styling tips.
    pub tips: Vec<String>,
}

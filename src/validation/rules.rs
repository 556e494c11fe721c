//! The standard rule table and the unconditional styling tips.

use super::types::{Rule, RuleContext, RuleId};
use crate::catalog::Category;

const FORMAL_OCCASIONS: [&str; 2] = ["wedding", "formal"];
const FORMAL_MIN_OUTFIT: u64 = 4000;
const FORMAL_MIN_JEWELRY: u64 = 2000;
const CASUAL_MAX_OUTFIT: u64 = 5000;
const BALANCE_MIN: f64 = 0.5;
const BALANCE_MAX: f64 = 3.0;

/// The six weighted rules, in evaluation order.
pub(crate) const STANDARD_RULES: [Rule; 6] = [
    Rule {
        id: RuleId::OutfitOccasion,
        weight: 25.0,
        predicate: |ctx| ctx.outfit.occasion_matches(ctx.occasion),
        tip: |ctx| format!("The {} is a perfect match for a {} occasion", ctx.outfit.name, ctx.occasion),
    },
    Rule {
        id: RuleId::JewelryOccasion,
        weight: 20.0,
        predicate: |ctx| ctx.jewelry.occasion_matches(ctx.occasion),
        tip: |ctx| format!("The {} complements a {} setting beautifully", ctx.jewelry.name, ctx.occasion),
    },
    Rule {
        id: RuleId::BudgetBalance,
        weight: 15.0,
        predicate: |ctx| {
            ctx.price_ratio()
                .is_some_and(|r| (BALANCE_MIN..=BALANCE_MAX).contains(&r))
        },
        tip: |_| "Your budget is split evenly between outfit and jewelry, keeping the look cohesive".to_string(),
    },
    Rule {
        id: RuleId::CategoryCoordination,
        weight: 15.0,
        predicate: |ctx| ctx.outfit.category == Category::Outfit && ctx.jewelry.category == Category::Jewelry,
        tip: |_| "A complete look: the main outfit is paired with matching jewelry".to_string(),
    },
    Rule {
        id: RuleId::FormalPricing,
        weight: 10.0,
        predicate: |ctx| {
            !ctx.occasion_is(&FORMAL_OCCASIONS)
                || (ctx.outfit.price >= FORMAL_MIN_OUTFIT && ctx.jewelry.price >= FORMAL_MIN_JEWELRY)
        },
        tip: |ctx| {
            if ctx.occasion_is(&FORMAL_OCCASIONS) {
                format!("Premium pieces suit the formality of a {}", ctx.occasion)
            } else {
                format!("The pieces are priced right for a {} outing", ctx.occasion)
            }
        },
    },
    Rule {
        id: RuleId::CasualBalance,
        weight: 10.0,
        predicate: |ctx| !ctx.occasion_is(&["casual"]) || ctx.outfit.price <= CASUAL_MAX_OUTFIT,
        tip: |ctx| {
            if ctx.occasion_is(&["casual"]) {
                "An easy, reasonably priced outfit keeps a casual look effortless".to_string()
            } else {
                "The outfit's price point fits the event without overspending".to_string()
            }
        },
    },
];

pub(crate) fn coordination_tip(label: &str) -> String {
    format!("Both pieces are styled for {label}, so they coordinate naturally")
}

pub(crate) fn accessory_tip(ctx: &RuleContext<'_>) -> String {
    if ctx.occasion_is(&["wedding"]) {
        "Pair with a traditional embellished clutch and heels to complete the wedding look".to_string()
    } else {
        "Add complementary accessories like a matching clutch or a light stole".to_string()
    }
}

pub(crate) fn hairstyle_tip(ctx: &RuleContext<'_>) -> String {
    if ctx.occasion_is(&["formal"]) {
        "An elegant updo or sleek low bun keeps the look polished for a formal event".to_string()
    } else {
        "Soft waves or a loose braid give the outfit a relaxed finish".to_string()
    }
}

pub(crate) const NO_PRODUCTS_TIP: &str = "No products were available to validate for this request";

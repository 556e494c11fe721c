//! Rule-based validation of a chosen pair.
//!
//! A fixed table of weighted predicates is evaluated against the pair
//! and the requested occasion. Every rule that holds adds its weight and
//! an affirmative tip; rules that do not hold are simply omitted. Two
//! styling tips (accessories and hairstyle) are always appended.
//!
//! | Rule                  | Weight | Holds when                                              |
//! |-----------------------|--------|---------------------------------------------------------|
//! | outfit occasion       | 25     | outfit label equals the occasion                        |
//! | jewelry occasion      | 20     | jewelry label equals the occasion                       |
//! | budget balance        | 15     | `0.5 <= outfit/jewelry <= 3`                            |
//! | category coordination | 15     | outfit is a dress, jewelry is jewelry                   |
//! | formal pricing        | 10     | wedding/formal: outfit ≥ 4000 and jewelry ≥ 2000        |
//! | casual balance        | 10     | casual: outfit ≤ 5000                                   |
//!
//! Matching labels on both items add a coordination bonus of 5 that does
//! not count toward the pass threshold.

mod engine;
mod rules;
mod types;

pub use engine::{RuleSet, RuleValidator, ValidationConfig};
pub use types::{Rule, RuleContext, RuleId, ValidationReport};

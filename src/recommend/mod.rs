//! Recommendation orchestrator.
//!
//! Data flows one way: catalog → [`PairSpace`](crate::constraint::PairSpace)
//! → optimal-path and evolutionary searches → pair selection → rule
//! validation → [`Recommendation`].
//!
//! The optimal-path pair is always preferred; the evolutionary pair is
//! used only when the former is absent. When neither search finds a
//! pair the validator is skipped and the result carries generic
//! budget-shortfall tips instead.

mod stylist;
mod types;

pub use stylist::Stylist;
pub use types::{AlgorithmMetrics, Recommendation, SearchSource};

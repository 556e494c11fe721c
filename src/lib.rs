//! Budget-constrained outfit and jewelry recommendation engine.
//!
//! Given an occasion, free-text style preferences and a budget, the
//! engine picks one outfit and one jewelry item from a small catalog,
//! explains the pick with style tips and reports the total cost.
//!
//! - **Constraint filter** ([`constraint`]): enumerates every affordable
//!   `(outfit, jewelry)` pair.
//! - **Optimal-path search** ([`optimal`]): deterministic, exhaustive
//!   weighted scoring; the lowest `f = g + h` wins.
//! - **Evolutionary search** ([`evolution`]): tournament-selection
//!   genetic search over the same pairs, used as a fallback and as an
//!   independent metric.
//! - **Rule validator** ([`validation`]): a table of weighted rules that
//!   scores the chosen pair and produces tips.
//! - **Orchestrator** ([`recommend`]): composes the above into a
//!   [`Recommendation`].
//!
//! The catalog is read through [`CatalogProvider`](catalog::CatalogProvider)
//! and never modified. Every computation is request-scoped; the only
//! randomness is an explicit, seedable generator.
//!
//! # Example
//!
//! ```
//! use stylist_core::catalog::sample_catalog;
//! use stylist_core::{Request, Stylist, StylistConfig};
//!
//! let stylist = Stylist::new(StylistConfig::default().with_seed(7)).unwrap();
//! let request = Request::new("party", 1000).unwrap();
//!
//! let rec = stylist.recommend(&sample_catalog(), &request).unwrap();
//! assert!(rec.no_products_available);
//! assert_eq!(rec.total_cost, 0);
//! ```

pub mod catalog;
pub mod config;
pub mod constraint;
pub mod error;
pub mod evolution;
pub mod optimal;
pub mod recommend;
pub mod request;
pub mod validation;

pub use config::StylistConfig;
pub use error::StylistError;
pub use recommend::{Recommendation, Stylist};
pub use request::Request;

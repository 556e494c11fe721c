//! Product catalog.
//!
//! The catalog is an external collaborator: the engine reads a snapshot
//! through [`CatalogProvider`] and never writes back.

mod provider;
mod types;

pub use provider::{sample_catalog, CatalogProvider, InMemoryCatalog, JsonCatalog};
pub use types::{same_occasion, Category, Product};

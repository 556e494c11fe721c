//! Budget constraint filter.
//!
//! Partitions the catalog into outfits and jewelry and enumerates every
//! `(outfit, jewelry)` pair whose combined price fits the budget. Both
//! searches draw exclusively from this set, so every candidate they
//! produce is budget-valid by construction.
//!
//! Enumeration is O(outfits × jewelry), which is intended for catalogs of
//! tens to low hundreds of items.

use rand::Rng;

use crate::catalog::{Category, Product};

/// Indices of an affordable pair into [`PairSpace::outfits`] and
/// [`PairSpace::jewelry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairIndex {
    pub outfit: usize,
    pub jewelry: usize,
    pub total_cost: u64,
}

/// A concrete `(outfit, jewelry)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePair<'a> {
    pub outfit: &'a Product,
    pub jewelry: &'a Product,
    pub total_cost: u64,
}

/// The affordable-pair space of one request.
#[derive(Debug, Clone)]
pub struct PairSpace<'a> {
    outfits: Vec<&'a Product>,
    jewelry: Vec<&'a Product>,
    budget: u64,
    pairs: Vec<PairIndex>,
}

impl<'a> PairSpace<'a> {
    /// Partitions `catalog` and enumerates affordable pairs, outfits in
    /// the outer loop and jewelry in the inner loop, both in catalog order.
    pub fn build(catalog: &'a [Product], budget: u64) -> Self {
        let outfits: Vec<&Product> = catalog
            .iter()
            .filter(|p| p.category == Category::Outfit)
            .collect();
        let jewelry: Vec<&Product> = catalog
            .iter()
            .filter(|p| p.category == Category::Jewelry)
            .collect();

        let mut pairs = Vec::new();
        for (oi, outfit) in outfits.iter().enumerate() {
            for (ji, item) in jewelry.iter().enumerate() {
                let total_cost = outfit.price.saturating_add(item.price);
                if total_cost <= budget {
                    pairs.push(PairIndex {
                        outfit: oi,
                        jewelry: ji,
                        total_cost,
                    });
                }
            }
        }

        tracing::debug!(
            outfits = outfits.len(),
            jewelry = jewelry.len(),
            affordable = pairs.len(),
            budget,
            "built pair space"
        );

        Self {
            outfits,
            jewelry,
            budget,
            pairs,
        }
    }

    pub fn outfits(&self) -> &[&'a Product] {
        &self.outfits
    }

    pub fn jewelry(&self) -> &[&'a Product] {
        &self.jewelry
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// All affordable pairs in enumeration order.
    pub fn pairs(&self) -> &[PairIndex] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when no affordable pair exists (infeasible request).
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolves indices to products.
    pub fn candidate(&self, index: PairIndex) -> CandidatePair<'a> {
        CandidatePair {
            outfit: self.outfits[index.outfit],
            jewelry: self.jewelry[index.jewelry],
            total_cost: index.total_cost,
        }
    }

    /// Returns the pair for the given indices if it fits the budget.
    pub fn affordable(&self, outfit: usize, jewelry: usize) -> Option<PairIndex> {
        let o = self.outfits.get(outfit)?;
        let j = self.jewelry.get(jewelry)?;
        let total_cost = o.price.saturating_add(j.price);
        (total_cost <= self.budget).then_some(PairIndex {
            outfit,
            jewelry,
            total_cost,
        })
    }

    /// Draws a uniformly random affordable pair.
    ///
    /// Returns `None` if the space is empty.
    pub fn random_pair<R: Rng>(&self, rng: &mut R) -> Option<PairIndex> {
        if self.pairs.is_empty() {
            return None;
        }
        Some(self.pairs[rng.random_range(0..self.pairs.len())])
    }
}

//! Product and category definitions.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The storefront labels outfits as `"dress"`; `"outfit"` is accepted
/// on input as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Main garment (suit, saree, kurta, lehenga).
    #[serde(rename = "dress", alias = "outfit")]
    Outfit,

    /// Necklace, earrings, bangles and sets.
    #[serde(rename = "jewelry")]
    Jewelry,
}

/// Compares two occasion labels, ignoring surrounding whitespace and
/// ASCII case.
pub fn same_occasion(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// An item available for recommendation.
///
/// Products are owned by the catalog provider; the engine only reads
/// snapshots and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text description, searched by preference keywords.
    #[serde(default)]
    pub description: String,

    /// Price in integer currency units.
    pub price: u64,

    pub category: Category,

    /// Occasion label, e.g. `"wedding"` or `"casual"`.
    #[serde(default)]
    pub occasion: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product without occasion label or image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category,
            occasion: None,
            image_url: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the occasion label.
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    /// Sets the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Returns `true` if the occasion label equals `occasion` under
    /// [`same_occasion`]. Unlabelled products never match.
    pub fn occasion_matches(&self, occasion: &str) -> bool {
        self.occasion
            .as_deref()
            .is_some_and(|label| same_occasion(label, occasion))
    }

    /// Lowercased `name + " " + description`, the text preference
    /// keywords are matched against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

//! Catalog read seam.

use std::path::Path;

use super::types::{Category, Product};
use crate::error::StylistError;

/// Supplies the full product list.
///
/// The engine treats the catalog as read-only and never computes on a
/// partial list: an `Err` is surfaced to the caller unchanged.
pub trait CatalogProvider {
    /// Returns a snapshot of every product.
    fn products(&self) -> Result<Vec<Product>, StylistError>;
}

/// A fixed in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for InMemoryCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> Result<Vec<Product>, StylistError> {
        Ok(self.products.clone())
    }
}

/// A catalog stored as a JSON array of products.
///
/// The file is re-read on every call so edits are picked up without
/// restarting.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    source: JsonSource,
}

#[derive(Debug, Clone)]
enum JsonSource {
    File(std::path::PathBuf),
    Inline(String),
}

impl JsonCatalog {
    /// Reads products from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: JsonSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Parses products from a JSON string.
    pub fn from_json_str(json: impl Into<String>) -> Self {
        Self {
            source: JsonSource::Inline(json.into()),
        }
    }
}

impl CatalogProvider for JsonCatalog {
    fn products(&self) -> Result<Vec<Product>, StylistError> {
        let products: Vec<Product> = match &self.source {
            JsonSource::File(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)?
            }
            JsonSource::Inline(raw) => serde_json::from_str(raw)?,
        };
        tracing::debug!(count = products.len(), "loaded catalog from JSON");
        Ok(products)
    }
}

/// The six-item demo storefront inventory.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Embroidered Lawn Suit", 4500, Category::Outfit)
            .with_description("Elegant burgundy lawn suit with intricate gold embroidery")
            .with_occasion("wedding")
            .with_image_url("/assets/product-1.jpg"),
        Product::new("2", "Kundan Jewelry Set", 8500, Category::Jewelry)
            .with_description("Luxurious kundan necklace and earrings set")
            .with_occasion("bridal")
            .with_image_url("/assets/product-2.jpg"),
        Product::new("3", "Silk Saree", 6500, Category::Outfit)
            .with_description("Beautiful silk saree in deep burgundy with gold border")
            .with_occasion("formal")
            .with_image_url("/assets/product-3.jpg"),
        Product::new("4", "Traditional Earrings", 2500, Category::Jewelry)
            .with_description("Gold-plated kundan earrings with pearl drops")
            .with_occasion("party")
            .with_image_url("/assets/product-4.jpg"),
        Product::new("5", "Designer Kurta", 3500, Category::Outfit)
            .with_description("Modern designer kurta in burgundy with gold embroidery")
            .with_occasion("casual")
            .with_image_url("/assets/product-5.jpg"),
        Product::new("6", "Bridal Necklace", 12000, Category::Jewelry)
            .with_description("Stunning bridal necklace set with kundan and pearls")
            .with_occasion("bridal")
            .with_image_url("/assets/product-6.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 6);
        let outfits = catalog
            .iter()
            .filter(|p| p.category == Category::Outfit)
            .count();
        assert_eq!(outfits, 3);
    }

    #[test]
    fn test_in_memory_returns_snapshot() {
        let catalog = InMemoryCatalog::from(sample_catalog());
        let products = catalog.products().unwrap();
        assert_eq!(products, sample_catalog());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_json_inline() {
        let json = r#"[
            {"id":"a","name":"Lehenga","price":9000,"category":"dress","occasion":"wedding"},
            {"id":"b","name":"Bangles","price":1200,"category":"jewelry"}
        ]"#;
        let products = JsonCatalog::from_json_str(json).products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].category, Category::Jewelry);
    }

    #[test]
    fn test_json_malformed_is_error() {
        let err = JsonCatalog::from_json_str("not json").products().unwrap_err();
        assert!(matches!(err, StylistError::Json(_)));
    }

    #[test]
    fn test_json_missing_file_is_io_error() {
        let err = JsonCatalog::from_path("/nonexistent/catalog.json")
            .products()
            .unwrap_err();
        assert!(matches!(err, StylistError::Io(_)));
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "stylist-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, serde_json::to_string(&sample_catalog()).unwrap()).unwrap();
        let products = JsonCatalog::from_path(&path).products().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(products, sample_catalog());
    }
}

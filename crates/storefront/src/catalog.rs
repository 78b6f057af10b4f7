//! In-memory product catalog.
//!
//! The catalog is loaded once at startup, validated, and never mutated
//! afterwards. Products are handed out as `Arc<Product>` so the cart,
//! wishlist and filtered views share the same records.
//!
//! By default the catalog is the JSON file embedded at compile time
//! (`data/products.json`); `STOREFRONT_CATALOG_PATH` points the binary at a
//! different file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use elegance_core::{Product, ProductError, ProductId};
use thiserror::Error;

/// Catalog bundled with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// Number of products shown in the home page "featured" strip.
pub const FEATURED_LIMIT: usize = 8;

/// Number of related products shown on a product page.
pub const RELATED_LIMIT: usize = 4;

/// Errors raised while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidProduct(#[from] ProductError),

    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Immutable, ordered product catalog.
///
/// Cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Arc<Product>>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if any product fails validation or two products
    /// share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut shared = Vec::with_capacity(products.len());

        for (index, product) in products.into_iter().enumerate() {
            product.validate()?;
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
            shared.push(Arc::new(product));
        }

        Ok(Self {
            inner: Arc::new(CatalogInner {
                products: shared,
                by_id,
            }),
        })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a product is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded file is invalid (caught by tests).
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        tracing::info!(products = catalog.len(), "Built-in catalog loaded");
        Ok(catalog)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.inner.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.inner
            .by_id
            .get(id)
            .and_then(|&index| self.inner.products.get(index))
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }

    /// New or on-sale products, in catalog order, at most `limit`.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<Arc<Product>> {
        self.products()
            .iter()
            .filter(|p| p.is_new || p.is_sale)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Other products in the same category, in catalog order, at most `limit`.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Arc<Product>> {
        self.products()
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use elegance_core::Category;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for category in Category::ALL {
            assert!(
                catalog.products().iter().any(|p| p.category == category),
                "no products in {category}"
            );
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let product = catalog.get("m-001").unwrap();
        assert_eq!(product.id.as_str(), "m-001");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let catalog = Catalog::builtin().unwrap();
        let first = (**catalog.products().first().unwrap()).clone();
        let result = Catalog::from_products(vec![first.clone(), first]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_rejects_invalid_product() {
        let json = r#"[{
            "id": "x", "name": "X", "price": 100, "category": "men",
            "subcategory": "", "sizes": [], "colors": ["Red"], "images": ["/x.jpg"],
            "description": "", "rating": 1.0, "reviews": 0
        }]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidProduct(ProductError::NoSizes(_)))
        ));
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_featured_is_new_or_sale_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let featured = catalog.featured(FEATURED_LIMIT);
        assert!(featured.len() <= FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.is_new || p.is_sale));

        let positions: Vec<usize> = featured
            .iter()
            .map(|f| catalog.products().iter().position(|p| p.id == f.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = Catalog::builtin().unwrap();
        let product = catalog.get("k-001").unwrap();
        let related = catalog.related(product, RELATED_LIMIT);
        assert!(!related.is_empty());
        assert!(related.len() <= RELATED_LIMIT);
        assert!(related.iter().all(|p| p.category == Category::Kids));
        assert!(related.iter().all(|p| p.id != product.id));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Catalog::from_path(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}

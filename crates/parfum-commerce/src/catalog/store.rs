//! The catalog store.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use super::product::{FragranceNotes, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// An ordered, read-only collection of products.
///
/// Insertion order is display order. Ids are unique. Once built a catalog
/// is only ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The catalog the storefront ships with, built on first access.
    pub fn shipped() -> &'static Catalog {
        static SHIPPED: OnceLock<Catalog> = OnceLock::new();
        SHIPPED.get_or_init(|| Catalog {
            products: shipped_products(),
        })
    }

    /// Build a catalog from products, checking ids are unique and required
    /// fields are present.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProductId(product.id.get()));
            }
        }

        debug!(count = products.len(), "Catalog built");
        Ok(Self { products })
    }

    /// Build a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// All products in display order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Find the product with the given id.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        let found = self.products.iter().find(|p| p.id == id);
        if found.is_none() {
            debug!(%id, "Product lookup missed");
        }
        found
    }

    /// Look up a product from an untrusted integer.
    ///
    /// Zero, negatives and unknown ids all yield `ProductNotFound`.
    pub fn lookup(&self, raw: i64) -> Result<&Product, CommerceError> {
        ProductId::new(raw)
            .and_then(|id| self.find_by_id(id))
            .ok_or_else(|| {
                warn!(raw, "Product not found");
                CommerceError::ProductNotFound(raw.to_string())
            })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[allow(clippy::too_many_arguments)]
fn shipped_product(
    id: u32,
    name: &str,
    category: &str,
    price: &str,
    image: &str,
    is_new: bool,
    description: &str,
    notes: FragranceNotes,
) -> Option<Product> {
    Some(Product {
        id: ProductId::new(i64::from(id))?,
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        is_new,
        description: description.to_string(),
        notes,
        size: "100 ML".to_string(),
    })
}

fn shipped_products() -> Vec<Product> {
    [
        shipped_product(
            1,
            "Royal Oud Intense",
            "Unisex Perfume",
            "450 QAR",
            "https://images.unsplash.com/photo-1592945403244-b3fbafd7f539?q=80&w=800&auto=format&fit=crop",
            true,
            "A majestic blend of rare oud and warm spices, creating an aura of royalty and sophistication. Perfect for those who command attention.",
            FragranceNotes::new("Bergamot, Saffron", "Rose, Oud Wood", "Amber, Musk, Patchouli"),
        ),
        shipped_product(
            2,
            "Velvet Rose & Musk",
            "Women Perfume",
            "380 QAR",
            "https://images.unsplash.com/photo-1588405748880-12d1d2a59f75?q=80&w=800&auto=format&fit=crop",
            false,
            "An intoxicating bouquet of velvet roses enveloped in soft white musk. A fragrance that whispers elegance and romance.",
            FragranceNotes::new("Red Berries, Pear", "Damask Rose, Peony", "White Musk, Vanilla"),
        ),
        shipped_product(
            3,
            "Midnight Amber",
            "Men Perfume",
            "420 QAR",
            "https://images.unsplash.com/photo-1541643600914-78b084683601?q=80&w=800&auto=format&fit=crop",
            true,
            "Dark, mysterious, and captivating. Midnight Amber captures the essence of the night with deep woody notes and a hint of spice.",
            FragranceNotes::new("Black Pepper, Cardamom", "Incense, Amberwood", "Leather, Tonka Bean"),
        ),
        shipped_product(
            4,
            "Crystal Noir Edition",
            "Luxury Collection",
            "550 QAR",
            "https://images.unsplash.com/photo-1616951849649-74dd2dd7e662?q=80&w=800&auto=format&fit=crop",
            false,
            "A luminous fragrance that sparkles like a diamond. Fresh, vibrant, and undeniably luxurious, designed for the modern elite.",
            FragranceNotes::new("Yuzu, Pomegranate", "Lotus, Magnolia", "Mahogany, Amber, Musk"),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_shipped_catalog_order() {
        let catalog = Catalog::shipped();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        let products = Catalog::shipped().list_all().to_vec();
        let rebuilt = Catalog::from_products(products).unwrap();
        assert_eq!(&rebuilt, Catalog::shipped());
    }

    #[test]
    fn test_list_all_is_stable() {
        let catalog = Catalog::shipped();
        let first = catalog.list_all();
        let second = catalog.list_all();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::shipped();
        assert_eq!(catalog.find_by_id(id(1)).unwrap().name, "Royal Oud Intense");
        assert_eq!(catalog.find_by_id(id(4)).unwrap().name, "Crystal Noir Edition");
        assert!(catalog.find_by_id(id(999)).is_none());
    }

    #[test]
    fn test_find_every_shipped_id() {
        let catalog = Catalog::shipped();
        for product in catalog {
            assert_eq!(catalog.find_by_id(product.id), Some(product));
        }
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::shipped();
        for raw in [0, -1, 5, 999, i64::MAX, i64::MIN] {
            assert_eq!(
                catalog.lookup(raw),
                Err(CommerceError::ProductNotFound(raw.to_string()))
            );
        }
        assert_eq!(catalog.lookup(2).unwrap().name, "Velvet Rose & Musk");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = Catalog::shipped().list_all().to_vec();
        products[1].id = id(1);

        assert_eq!(
            Catalog::from_products(products),
            Err(CommerceError::DuplicateProductId(1))
        );
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(Catalog::shipped()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.list_all()[2].name, "Midnight Amber");
    }

    #[test]
    fn test_from_json_rejects_bad_id() {
        let json = r#"[{"id": 0, "name": "X", "category": "Y", "price": "1 QAR",
            "image": "", "isNew": false, "description": "",
            "notes": {"top": "a", "heart": "b", "base": "c"}, "size": "10 ML"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_products(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.lookup(1).is_err());
    }
}

//! Read-only catalog queries used by the storefront listings.

use super::product::Product;
use super::store::Catalog;
use crate::ids::ProductId;

impl Catalog {
    /// Products whose category label matches, ignoring case.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        let category = category.trim();
        self.iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct category labels in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for product in self {
            if !labels.contains(&product.category.as_str()) {
                labels.push(&product.category);
            }
        }
        labels
    }

    /// Products carrying the "New" badge.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.iter().filter(|p| p.is_new).collect()
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A blank term matches every product.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.iter().collect();
        }

        self.iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Other products to suggest alongside `id`, in catalog order.
    pub fn related(&self, id: ProductId, limit: usize) -> Vec<&Product> {
        self.iter().filter(|p| p.id != id).take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn names(products: Vec<&crate::catalog::Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::shipped();
        assert_eq!(names(catalog.by_category("men perfume")), vec!["Midnight Amber"]);
        assert!(catalog.by_category("Body Mist").is_empty());
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Catalog::shipped().categories(),
            vec!["Unisex Perfume", "Women Perfume", "Men Perfume", "Luxury Collection"]
        );
    }

    #[test]
    fn test_new_arrivals() {
        assert_eq!(
            names(Catalog::shipped().new_arrivals()),
            vec!["Royal Oud Intense", "Midnight Amber"]
        );
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::shipped();
        assert_eq!(names(catalog.search("ROSE")), vec!["Velvet Rose & Musk"]);
        assert_eq!(
            names(catalog.search("royal")),
            vec!["Royal Oud Intense"]
        );
        assert_eq!(catalog.search("  ").len(), 4);
        assert!(catalog.search("vetiver").is_empty());
    }

    #[test]
    fn test_related() {
        let catalog = Catalog::shipped();
        let id = ProductId::new(2).unwrap();

        let related = catalog.related(id, 2);
        assert_eq!(names(related), vec!["Royal Oud Intense", "Midnight Amber"]);
        assert_eq!(catalog.related(id, 10).len(), 3);
    }
}

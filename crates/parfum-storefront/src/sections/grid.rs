//! Product grid section.

use parfum_commerce::catalog::Product;

use super::{html_escape, render_new_badge};
use crate::route::product_path;

/// Render the "Best Sellers" grid in catalog order.
pub fn render_product_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="best-sellers" data-section="best-sellers">
    <h2>Best Sellers</h2>
    <p class="section-subtitle">Our most loved fragrances, curated just for you. Discover the scents that define luxury.</p>
    <div class="product-grid">
        {cards}
    </div>
</section>"#,
        cards = cards
    )
}

/// Render one product card with its quick view trigger.
pub fn render_product_card(product: &Product) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
        <a href="{path}" class="product-card-link"></a>
        {badge}
        <img src="{image}" alt="{name}" class="product-card-image">
        <button class="product-card-quick-view" data-quick-view="{id}">Quick View</button>
        <div class="product-card-info">
            <p class="product-card-category">{category}</p>
            <h3 class="product-card-name">{name}</h3>
            <p class="product-card-price">{price}</p>
        </div>
    </article>"#,
        id = product.id,
        path = product_path(product.id),
        badge = render_new_badge(product, "New"),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        price = html_escape(&product.price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use parfum_commerce::catalog::Catalog;

    #[test]
    fn test_grid_keeps_catalog_order() {
        let html = render_product_grid(Catalog::shipped().list_all());

        let positions: Vec<usize> = ["1", "2", "3", "4"]
            .iter()
            .map(|id| html.find(&format!(r#"data-product-id="{}""#, id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_card_badge_and_escaping() {
        let catalog = Catalog::shipped();

        let fresh = render_product_card(&catalog.list_all()[0]);
        assert!(fresh.contains("badge-new"));
        assert!(fresh.contains(r#"href="/product/1""#));

        let rose = render_product_card(&catalog.list_all()[1]);
        assert!(!rose.contains("badge-new"));
        assert!(rose.contains("Velvet Rose &amp; Musk"));
        assert!(rose.contains("380 QAR"));
    }
}

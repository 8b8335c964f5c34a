//! Product detail page section.

use parfum_commerce::catalog::Product;

use super::{html_escape, render_new_badge, render_notes};
use crate::route::{product_path, DetailPage};

/// Render the detail page, or the "not found" fallback on a miss.
pub fn render_product_details(page: &DetailPage<'_>, related: &[&Product]) -> String {
    let product = match page {
        DetailPage::Found(product) => *product,
        DetailPage::NotFound { requested } => return render_product_not_found(requested),
    };

    format!(
        r#"<main class="product-details" data-page="product" data-product-id="{id}">
    <a href="/" class="back-link">Back to Collection</a>
    <div class="product-details-media">
        {badge}
        <img src="{image}" alt="{name}">
    </div>
    <div class="product-details-info">
        <span class="product-details-category">{category}</span>
        <h1 class="product-details-name">{name}</h1>
        <span class="product-details-price">{price}</span>
        <span class="product-details-size">{size}</span>
        <p class="product-details-description">{description}</p>
        {notes}
    </div>
    {related}
</main>"#,
        id = product.id,
        badge = render_new_badge(product, "New Arrival"),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        price = html_escape(&product.price),
        size = html_escape(&product.size),
        description = html_escape(&product.description),
        notes = render_notes(product, "product-details"),
        related = render_related(related)
    )
}

fn render_related(products: &[&Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let items: String = products
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="{path}">{name}</a> <span>{price}</span></li>"#,
                path = product_path(p.id),
                name = html_escape(&p.name),
                price = html_escape(&p.price)
            )
        })
        .collect();

    format!(
        r#"<section class="related-products" data-section="related">
        <h2>You May Also Like</h2>
        <ul>{}</ul>
    </section>"#,
        items
    )
}

/// Render the fallback shown when a product route matches nothing.
pub fn render_product_not_found(requested: &str) -> String {
    format!(
        r#"<main class="product-not-found" data-page="product" data-requested="{}">
    <p>Product not found</p>
    <a href="/" class="back-link">Back to Collection</a>
</main>"#,
        html_escape(requested)
    )
}

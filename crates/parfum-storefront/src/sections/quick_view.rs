//! Quick view overlay section.

use parfum_commerce::selection::QuickView;

use super::{html_escape, render_new_badge, render_notes};
use crate::route::product_path;

/// Render the quick view overlay. Closed overlays render nothing.
pub fn render_quick_view(quick_view: &QuickView<'_>) -> String {
    let Some(product) = quick_view.product() else {
        return String::new();
    };

    format!(
        r#"<div class="quick-view-backdrop" data-close="backdrop"></div>
<section class="quick-view" data-section="quick-view" data-product-id="{id}" role="dialog">
    <button class="quick-view-close" data-close="close_button" aria-label="Close">&times;</button>
    <div class="quick-view-media">
        {badge}
        <img src="{image}" alt="{name}">
    </div>
    <div class="quick-view-info">
        <p class="quick-view-category">{category}</p>
        <h2 class="quick-view-name">{name}</h2>
        <p class="quick-view-price">{price}</p>
        <p class="quick-view-description">{description}</p>
        {notes}
        <a href="{path}" class="quick-view-details" data-close="view_details">View Full Details</a>
    </div>
</section>"#,
        id = product.id,
        badge = render_new_badge(product, "New"),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        price = html_escape(&product.price),
        description = html_escape(&product.description),
        notes = render_notes(product, "quick-view"),
        path = product_path(product.id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use parfum_commerce::catalog::Catalog;

    #[test]
    fn test_closed_renders_nothing() {
        assert!(render_quick_view(&QuickView::Closed).is_empty());
    }

    #[test]
    fn test_open_renders_product() {
        let product = &Catalog::shipped().list_all()[3];
        let html = render_quick_view(&QuickView::Open(product));

        assert!(html.contains(r#"data-product-id="4""#));
        assert!(html.contains("Crystal Noir Edition"));
        assert!(html.contains("Yuzu, Pomegranate"));
        assert!(html.contains(r#"href="/product/4""#));
    }
}

//! Section renderers for the storefront pages.

mod details;
mod grid;
mod hero;
mod quick_view;

pub use details::*;
pub use grid::*;
pub use hero::*;
pub use quick_view::*;

use parfum_commerce::catalog::{Catalog, Product};
use parfum_commerce::promo::Slide;
use parfum_commerce::selection::{Carousel, QuickView};

/// Render the home page body: hero, best sellers grid and quick view overlay.
pub fn render_home(
    slides: &[Slide],
    carousel: &Carousel,
    catalog: &Catalog,
    quick_view: &QuickView<'_>,
) -> String {
    format!(
        r#"<main class="home" data-page="home">
{hero}
{grid}
{quick_view}
</main>"#,
        hero = render_hero(slides, carousel),
        grid = render_product_grid(catalog.list_all()),
        quick_view = render_quick_view(quick_view),
    )
}

fn render_new_badge(product: &Product, label: &str) -> String {
    if product.is_new {
        format!(r#"<span class="badge badge-new">{}</span>"#, label)
    } else {
        String::new()
    }
}

fn render_notes(product: &Product, class: &str) -> String {
    let items: String = product
        .notes
        .labelled()
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="{class}-note"><span class="{class}-note-label">{label}</span><span class="{class}-note-value">{value}</span></div>"#,
                class = class,
                label = label,
                value = html_escape(value)
            )
        })
        .collect();

    format!(r#"<div class="{}-notes">{}</div>"#, class, items)
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parfum_commerce::promo::shipped_slides;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Rose & 'Musk'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Rose &amp; &#39;Musk&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_home_without_quick_view() {
        let catalog = Catalog::shipped();
        let carousel = Carousel::new(shipped_slides().len()).unwrap();
        let html = render_home(shipped_slides(), &carousel, catalog, &QuickView::Closed);

        assert!(html.contains(r#"data-section="hero""#));
        assert!(html.contains(r#"data-section="best-sellers""#));
        assert!(!html.contains(r#"data-section="quick-view""#));
    }

    #[test]
    fn test_render_home_with_quick_view() {
        let catalog = Catalog::shipped();
        let carousel = Carousel::new(shipped_slides().len()).unwrap();
        let quick_view = QuickView::Open(&catalog.list_all()[2]);
        let html = render_home(shipped_slides(), &carousel, catalog, &quick_view);

        assert!(html.contains(r#"data-section="quick-view""#));
        assert!(html.contains("Black Pepper, Cardamom"));
    }
}

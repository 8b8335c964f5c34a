//! Per-visitor browsing session.

use parfum_commerce::catalog::{Catalog, Product};
use parfum_commerce::ids::ProductId;
use parfum_commerce::promo::Slide;
use parfum_commerce::selection::{CloseReason, QuickView};
use tracing::info;

use crate::carousel::MountedCarousel;
use crate::config::CarouselConfig;
use crate::error::StorefrontResult;
use crate::route::{product_path, resolve_product, DetailPage};
use crate::sections::{render_home, render_product_details};

/// Number of suggestions shown under a product.
const RELATED_LIMIT: usize = 3;

/// Selection state of one visitor.
///
/// Every session owns its own carousel timer and quick view; nothing is
/// shared between sessions except the read-only catalog.
#[derive(Debug)]
pub struct BrowsingSession<'c> {
    catalog: &'c Catalog,
    slides: &'c [Slide],
    carousel: MountedCarousel,
    quick_view: QuickView<'c>,
}

impl<'c> BrowsingSession<'c> {
    /// Open the home page: mounts the hero carousel with the quick view closed.
    pub fn start(
        catalog: &'c Catalog,
        slides: &'c [Slide],
        config: &CarouselConfig,
    ) -> StorefrontResult<Self> {
        let carousel = MountedCarousel::mount(slides.len(), config.interval())?;
        info!(products = catalog.len(), "Browsing session started");

        Ok(Self {
            catalog,
            slides,
            carousel,
            quick_view: QuickView::Closed,
        })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn carousel(&self) -> &MountedCarousel {
        &self.carousel
    }

    pub fn quick_view(&self) -> &QuickView<'c> {
        &self.quick_view
    }

    /// Show a product in the quick view overlay.
    pub fn open_quick_view(&mut self, id: ProductId) -> StorefrontResult<&'c Product> {
        Ok(self.quick_view.open_by_id(self.catalog, id)?)
    }

    /// Dismiss the quick view overlay.
    pub fn close_quick_view(&mut self, reason: CloseReason) {
        self.quick_view.close(reason);
    }

    /// Follow the overlay's "view full details" link.
    ///
    /// Closes the overlay and returns the detail page path, or `None` when
    /// nothing was open.
    pub fn view_details(&mut self) -> Option<String> {
        let product = self.quick_view.product()?;
        self.quick_view.close(CloseReason::ViewDetails);
        Some(product_path(product.id))
    }

    /// Jump the hero to a slide.
    pub fn select_slide(&self, index: usize) -> StorefrontResult<()> {
        self.carousel.select(index)
    }

    /// The active hero slide index.
    pub fn active_slide(&self) -> usize {
        self.carousel.index()
    }

    /// Resolve a `/product/:id` parameter.
    pub fn product_page(&self, param: &str) -> DetailPage<'c> {
        resolve_product(self.catalog, param)
    }

    /// Render the home page as currently selected.
    pub fn render_home(&self) -> String {
        let carousel = self.carousel.observer().snapshot();
        render_home(self.slides, &carousel, self.catalog, &self.quick_view)
    }

    /// Render the detail page for a route parameter.
    pub fn render_product(&self, param: &str) -> String {
        let page = self.product_page(param);
        let related = page
            .product()
            .map(|p| self.catalog.related(p.id, RELATED_LIMIT))
            .unwrap_or_default();
        render_product_details(&page, &related)
    }

    /// Leave the page: stops the carousel timer.
    pub async fn teardown(self) {
        self.carousel.unmount().await;
        info!("Browsing session ended");
    }
}

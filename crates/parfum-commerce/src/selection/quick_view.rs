//! Quick-view overlay state machine.

use tracing::debug;

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::CommerceError;

/// How the overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The close button was pressed.
    CloseButton,
    /// The backdrop behind the overlay was clicked.
    Backdrop,
    /// The "view full details" link navigated away.
    ViewDetails,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::CloseButton => "close_button",
            CloseReason::Backdrop => "backdrop",
            CloseReason::ViewDetails => "view_details",
        }
    }
}

/// The quick-view overlay: either closed or showing exactly one product.
///
/// Visibility is derived from the variant, so an open overlay without a
/// product cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickView<'c> {
    /// Nothing selected; the overlay is hidden.
    #[default]
    Closed,
    /// The overlay shows this product.
    Open(&'c Product),
}

impl<'c> QuickView<'c> {
    /// Show a product, replacing whatever was shown before.
    pub fn open(&mut self, product: &'c Product) {
        debug!(product_id = %product.id, "Quick view opened");
        *self = QuickView::Open(product);
    }

    /// Show the catalog product with `id` and return it.
    ///
    /// On a miss the overlay is left as it was.
    pub fn open_by_id(
        &mut self,
        catalog: &'c Catalog,
        id: ProductId,
    ) -> Result<&'c Product, CommerceError> {
        let product = catalog
            .find_by_id(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        self.open(product);
        Ok(product)
    }

    /// Hide the overlay.
    pub fn close(&mut self, reason: CloseReason) {
        if let QuickView::Open(product) = self {
            debug!(product_id = %product.id, reason = reason.as_str(), "Quick view closed");
        }
        *self = QuickView::Closed;
    }

    /// Whether the overlay is showing.
    pub fn is_visible(&self) -> bool {
        matches!(self, QuickView::Open(_))
    }

    /// The product being shown, if any.
    pub fn product(&self) -> Option<&'c Product> {
        match *self {
            QuickView::Open(product) => Some(product),
            QuickView::Closed => None,
        }
    }
}

//! Product detail routing.

use parfum_commerce::catalog::{Catalog, Product};
use parfum_commerce::ids::ProductId;
use tracing::{debug, warn};

/// Route prefix of the product detail page.
pub const PRODUCT_ROUTE_PREFIX: &str = "/product/";

/// What the detail page should show for a route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage<'c> {
    /// The requested product.
    Found(&'c Product),
    /// Nothing matched; the page shows its "not found" state.
    NotFound {
        /// The raw parameter as it appeared in the route.
        requested: String,
    },
}

impl<'c> DetailPage<'c> {
    pub fn product(&self) -> Option<&'c Product> {
        match *self {
            DetailPage::Found(product) => Some(product),
            DetailPage::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailPage::Found(_))
    }
}

/// Resolve a `:id` route parameter against the catalog.
///
/// Malformed, zero, negative and unknown ids all resolve to `NotFound`.
pub fn resolve_product<'c>(catalog: &'c Catalog, param: &str) -> DetailPage<'c> {
    match ProductId::parse(param).and_then(|id| catalog.find_by_id(id)) {
        Some(product) => {
            debug!(product_id = %product.id, "Resolved product route");
            DetailPage::Found(product)
        }
        None => {
            warn!(param, "Product route did not match any product");
            DetailPage::NotFound {
                requested: param.to_string(),
            }
        }
    }
}

/// Path of the detail page for `id`.
pub fn product_path(id: ProductId) -> String {
    format!("{}{}", PRODUCT_ROUTE_PREFIX, id)
}

/// Extract the raw `:id` parameter from a `/product/:id` path.
///
/// Query strings, fragments and one trailing slash are ignored. Returns
/// `None` for paths that are not product routes.
pub fn match_product_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let param = path.strip_prefix(PRODUCT_ROUTE_PREFIX)?;
    let param = param.strip_suffix('/').unwrap_or(param);

    if param.is_empty() || param.contains('/') {
        return None;
    }
    Some(param)
}

/// Resolve a full request path. `None` when the path is not a product route.
pub fn resolve_path<'c>(catalog: &'c Catalog, path: &str) -> Option<DetailPage<'c>> {
    match_product_path(path).map(|param| resolve_product(catalog, param))
}

//! Fragrance catalog and selection state for the Parfum storefront.
//!
//! This crate holds everything the storefront pages read from:
//!
//! - **Catalog**: the fixed, ordered list of fragrances and its read-only queries
//! - **Promo**: the promotional slides shown in the home page hero
//! - **Selection**: the carousel index and the quick-view overlay state
//!
//! There is no I/O here. The catalog is built once per process and is never
//! mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use parfum_commerce::prelude::*;
//!
//! let catalog = Catalog::shipped();
//! let id = ProductId::parse("1").unwrap();
//! assert_eq!(catalog.find_by_id(id).unwrap().name, "Royal Oud Intense");
//!
//! let mut quick_view = QuickView::default();
//! quick_view.open_by_id(catalog, id).unwrap();
//! assert!(quick_view.is_visible());
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod promo;
pub mod selection;

pub use error::CommerceError;
pub use ids::{ProductId, SlideId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SlideId};

    // Catalog
    pub use crate::catalog::{Catalog, FragranceNotes, Product};

    // Promo
    pub use crate::promo::{shipped_slides, Slide};

    // Selection
    pub use crate::selection::{Carousel, CloseReason, QuickView};
}

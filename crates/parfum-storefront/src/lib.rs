//! Storefront runtime for the Parfum fragrance shop.
//!
//! This crate provides:
//! - `StorefrontConfig` - Carousel, catalog and logging configuration
//! - `resolve_product` - The `/product/:id` routing boundary
//! - `MountedCarousel` - The carousel bound to a recurring, cancellable timer
//! - `BrowsingSession` - Per-visitor selection state
//! - `sections` - HTML renderers for the home and detail pages

mod carousel;
mod config;
mod error;
mod route;
mod session;

pub mod sections;

pub use carousel::*;
pub use config::*;
pub use error::*;
pub use route::*;
pub use session::*;

// Re-export the domain crate for convenience
pub use parfum_commerce;

//! Product catalog module.
//!
//! Contains the fragrance record types, the catalog store and its read-only
//! queries.

mod product;
mod query;
mod store;

pub use product::{FragranceNotes, Product};
pub use store::Catalog;

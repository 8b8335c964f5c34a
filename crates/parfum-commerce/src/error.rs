//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while building or querying the catalog and
/// selection state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// No product matches the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(u32),

    /// A product record is missing a required field.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u32, reason: String },

    /// A carousel was built with no slides.
    #[error("Carousel needs at least one slide")]
    EmptyCarousel,

    /// A slide index outside the carousel was selected.
    #[error("Slide {index} out of range (carousel has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

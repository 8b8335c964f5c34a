//! Fragrance product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Scent composition of a fragrance.
///
/// Each field is a comma-separated list of ingredients kept exactly as
/// written; it is only ever displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FragranceNotes {
    /// First impression after application.
    pub top: String,
    /// Body of the fragrance.
    pub heart: String,
    /// Lasting dry-down.
    pub base: String,
}

impl FragranceNotes {
    pub fn new(top: impl Into<String>, heart: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            heart: heart.into(),
            base: base.into(),
        }
    }

    /// Notes paired with their display labels, top to base.
    pub fn labelled(&self) -> [(&'static str, &str); 3] {
        [
            ("Top", self.top.as_str()),
            ("Heart", self.heart.as_str()),
            ("Base", self.base.as_str()),
        ]
    }
}

/// A fragrance in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, also used in the detail page route.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form category label (e.g. "Unisex Perfume").
    pub category: String,
    /// Formatted price with currency code (e.g. "450 QAR"). Display only.
    pub price: String,
    /// Image URL.
    pub image: String,
    /// Shows the "New" badge.
    pub is_new: bool,
    /// Marketing description.
    pub description: String,
    /// Top, heart and base notes.
    pub notes: FragranceNotes,
    /// Bottle size with unit (e.g. "100 ML").
    pub size: String,
}

impl Product {
    /// Check the fields every storefront view relies on.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("name", &self.name),
            ("category", &self.category),
            ("notes.top", &self.notes.top),
            ("notes.heart", &self.notes.heart),
            ("notes.base", &self.notes.base),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CommerceError::InvalidProduct {
                    id: self.id.get(),
                    reason: format!("{} must not be empty", field),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(7).unwrap(),
            name: "Test Scent".to_string(),
            category: "Unisex Perfume".to_string(),
            price: "100 QAR".to_string(),
            image: "https://example.com/a.jpg".to_string(),
            is_new: false,
            description: "A test".to_string(),
            notes: FragranceNotes::new("Bergamot", "Rose", "Musk"),
            size: "50 ML".to_string(),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut product = sample();
        product.name = "   ".to_string();

        let err = product.validate().unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidProduct {
                id: 7,
                reason: "name must not be empty".to_string()
            }
        );
    }

    #[test]
    fn test_blank_note_rejected() {
        let mut product = sample();
        product.notes.base = String::new();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_notes_labelled() {
        let notes = FragranceNotes::new("Yuzu", "Lotus", "Amber");
        assert_eq!(
            notes.labelled(),
            [("Top", "Yuzu"), ("Heart", "Lotus"), ("Base", "Amber")]
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isNew"], serde_json::json!(false));
        assert_eq!(json["id"], serde_json::json!(7));
        assert_eq!(json["notes"]["heart"], serde_json::json!("Rose"));
    }
}

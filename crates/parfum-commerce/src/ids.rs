//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids are positive integers. Anything that cannot be one (zero,
//! negatives, malformed route text) never becomes an id at all, so a lookup
//! with it cannot be attempted and resolves to "not found" upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Macro to generate positive integer ID newtypes.
macro_rules! define_id {
    ($name:ident) => {
        /// A positive integer identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Create an ID from a raw integer, `None` when it is not positive
            /// or does not fit in 32 bits.
            pub fn new(raw: i64) -> Option<Self> {
                u32::try_from(raw).ok().and_then(NonZeroU32::new).map(Self)
            }

            /// Parse an ID from its decimal text form (e.g. a route parameter).
            pub fn parse(text: &str) -> Option<Self> {
                text.trim().parse::<NonZeroU32>().ok().map(Self)
            }

            /// Get the raw integer value.
            pub fn get(&self) -> u32 {
                self.0.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<NonZeroU32> for $name {
            fn from(raw: NonZeroU32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(ProductId);
define_id!(SlideId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_positive_integer() {
        let id = ProductId::new(4).unwrap();
        assert_eq!(id.get(), 4);
    }

    #[test]
    fn test_id_rejects_non_positive() {
        assert!(ProductId::new(0).is_none());
        assert!(ProductId::new(-1).is_none());
        assert!(ProductId::new(i64::from(u32::MAX) + 1).is_none());
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(ProductId::parse("2"), ProductId::new(2));
        assert_eq!(ProductId::parse(" 3 "), ProductId::new(3));
        assert!(ProductId::parse("abc").is_none());
        assert!(ProductId::parse("1.5").is_none());
        assert!(ProductId::parse("-1").is_none());
        assert!(ProductId::parse("0").is_none());
        assert!(ProductId::parse("").is_none());
        assert!(ProductId::parse("NaN").is_none());
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(789).unwrap();
        assert_eq!(format!("{}", id), "789");
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id = ProductId::new(12).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");

        let back: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("0").is_err());
    }
}

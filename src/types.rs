//! Core types for the discount journal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single discount entry.
///
/// Owns both text fields outright: they are deep copies of whatever input
/// they came from, never borrowed, and are released exactly once when the
/// record is dropped. Construction performs no validation; callers run
/// the rules in [`crate::validate`] first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Shop name, 1..=100 characters of visible text.
    pub shop: String,

    /// Discount percentage in [0, 100].
    pub discount: u8,

    /// Expiry date in the exact form `YYYY-MM-DD`.
    pub expiry: String,
}

impl Record {
    /// Deep-copy the borrowed fields into an owned record.
    pub fn new(shop: &str, discount: u8, expiry: &str) -> Self {
        Self {
            shop: shop.to_owned(),
            discount,
            expiry: expiry.to_owned(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shop: {} | Discount: {}% | Expiry: {}",
            self.shop, self.discount, self.expiry
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_fields() {
        let shop = String::from("Acme");
        let record = Record::new(&shop, 10, "2025-12-01");
        drop(shop);

        assert_eq!(record.shop, "Acme");
        assert_eq!(record.discount, 10);
        assert_eq!(record.expiry, "2025-12-01");
    }

    #[test]
    fn test_display() {
        let record = Record::new("Acme", 10, "2025-12-01");
        assert_eq!(
            record.to_string(),
            "Shop: Acme | Discount: 10% | Expiry: 2025-12-01"
        );
    }

    #[test]
    fn test_serde_field_names() {
        let record = Record::new("Acme", 10, "2025-12-01");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["shop"], "Acme");
        assert_eq!(json["discount"], 10);
        assert_eq!(json["expiry"], "2025-12-01");
    }
}

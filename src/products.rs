//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Opaque product identifier.
///
/// Identifiers come from the catalog source (fixture keys in the demo) and
/// are never interpreted by the cart beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Units available; `None` means unknown or unlimited
    pub stock: Option<u32>,
}

impl Product<'_> {
    /// Whether the product can currently be offered for sale.
    ///
    /// Stock gating is a presentation concern only; the cart never checks it.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock.is_none_or(|stock| stock > 0)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn widget(stock: Option<u32>) -> Product<'static> {
        Product {
            id: ProductId::from("widget"),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Money::from_minor(1000, USD),
            stock,
        }
    }

    #[test]
    fn product_id_display_matches_source_string() {
        let id = ProductId::new("smartphone");

        assert_eq!(id.to_string(), "smartphone");
        assert_eq!(id.as_str(), "smartphone");
    }

    #[test]
    fn in_stock_treats_missing_stock_as_available() {
        assert!(widget(None).in_stock());
        assert!(widget(Some(3)).in_stock());
        assert!(!widget(Some(0)).in_stock());
    }
}

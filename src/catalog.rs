//! Catalog
//!
//! The in-memory product catalog. Products are interned into a `SlotMap`
//! with a string-id index for lookups, the same shape the demo fixtures
//! load into. The catalog is reference data; the cart holds its own
//! snapshots and never reads back through it.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductId, ProductKey};

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A product's currency differs from the catalog currency (product id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// A product id was inserted twice.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product was not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Catalog
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    ids: FxHashMap<ProductId, ProductKey>,
    currency: Option<&'a Currency>,
}

impl<'a> Catalog<'a> {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog {
            products: SlotMap::with_key(),
            ids: FxHashMap::default(),
            currency: None,
        }
    }

    /// Insert a product into the catalog.
    ///
    /// The first insert fixes the catalog currency; later inserts must
    /// match it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on a duplicate product id or a currency
    /// mismatch.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        let product_currency = product.price.currency();

        if let Some(currency) = self.currency {
            if currency != product_currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
        } else {
            self.currency = Some(product_currency);
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.ids.insert(id, key);

        Ok(key)
    }

    /// Get a product by its id.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::ProductNotFound`] if the id is unknown.
    pub fn get(&self, id: &ProductId) -> Result<&Product<'a>, CatalogError> {
        self.ids
            .get(id)
            .and_then(|key| self.products.get(*key))
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }

    /// Get a product by its interned key.
    pub fn by_key(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Get the interned key for a product id.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::ProductNotFound`] if the id is unknown.
    pub fn key_of(&self, id: &ProductId) -> Result<ProductKey, CatalogError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }

    /// Iterate over the products in the catalog.
    ///
    /// Iteration order is unspecified; callers that display the catalog
    /// sort it themselves.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.values()
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog, if any product has been inserted.
    pub fn currency(&self) -> Option<&'a Currency> {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{EUR, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn product(id: &str, minor: i64, currency: &'static Currency) -> Product<'static> {
        Product {
            id: id.into(),
            name: id.to_string(),
            description: String::new(),
            price: Money::from_minor(minor, currency),
            stock: None,
        }
    }

    #[test]
    fn insert_and_get_round_trip() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert(product("phone", 189_999, USD))?;
        catalog.insert(product("laptop", 429_999, USD))?;

        assert_eq!(catalog.len(), 2);

        let phone = catalog.get(&"phone".into())?;

        assert_eq!(phone.price, Money::from_minor(189_999, USD));

        Ok(())
    }

    #[test]
    fn first_insert_fixes_the_currency() -> TestResult {
        let mut catalog = Catalog::new();

        assert!(catalog.currency().is_none());

        catalog.insert(product("phone", 100, USD))?;

        assert_eq!(catalog.currency(), Some(USD));

        Ok(())
    }

    #[test]
    fn insert_rejects_currency_mismatch() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert(product("phone", 100, USD))?;

        let result = catalog.insert(product("laptop", 200, EUR));

        assert_eq!(
            result,
            Err(CatalogError::CurrencyMismatch(
                "laptop".into(),
                EUR.iso_alpha_code,
                USD.iso_alpha_code,
            ))
        );

        Ok(())
    }

    #[test]
    fn insert_rejects_duplicate_id() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert(product("phone", 100, USD))?;

        let result = catalog.insert(product("phone", 150, USD));

        assert_eq!(result, Err(CatalogError::DuplicateProduct("phone".into())));

        Ok(())
    }

    #[test]
    fn get_missing_returns_error() {
        let catalog = Catalog::new();
        let result = catalog.get(&"nope".into());

        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[test]
    fn key_lookups_agree_with_id_lookups() -> TestResult {
        let mut catalog = Catalog::new();

        let key = catalog.insert(product("phone", 100, USD))?;

        assert_eq!(catalog.key_of(&"phone".into())?, key);

        let by_key = catalog.by_key(key).ok_or("expected product for key")?;

        assert_eq!(by_key.id, "phone".into());

        Ok(())
    }
}

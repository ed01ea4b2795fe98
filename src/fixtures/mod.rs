//! Fixtures
//!
//! YAML fixture sets play the role of the mock backend: a products file
//! seeds the catalog and an orders file seeds the order history, so the
//! demo runs entirely from in-memory data.

use std::{fs, path::PathBuf};

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    orders::{Order, OrderHistory, OrderLine},
    pricing::TotalPriceError,
    products::ProductId,
};

pub mod orders;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// An order line referenced a product id that was not loaded
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// An order fixture has no lines
    #[error("Order {0} has no lines")]
    EmptyOrder(String),

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Total calculation error for a seeded order
    #[error("Failed to total seeded order: {0}")]
    TotalPrice(#[from] TotalPriceError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the products file
    catalog: Catalog<'a>,

    /// Order history built from the orders file
    orders: OrderHistory<'a>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
            orders: OrderHistory::new(),
        }
    }

    /// Load products from a YAML fixture file into the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// catalog rejects a product (duplicate id or currency mismatch).
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: products::ProductsFixture = serde_norway::from_str(&contents)?;

        for (id, product_fixture) in fixture.products {
            let product = product_fixture.into_product(ProductId::new(id))?;

            self.catalog.insert(product)?;
        }

        Ok(self)
    }

    /// Load seeded orders from a YAML fixture file
    ///
    /// Order lines reference product fixture ids; unit prices are
    /// snapshotted from the loaded catalog and each order's total is
    /// derived from its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a line
    /// references an unknown product, or if a total cannot be derived.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: orders::OrdersFixture = serde_norway::from_str(&contents)?;

        for order_fixture in fixture.orders {
            let mut lines: SmallVec<[OrderLine<'a>; 4]> = SmallVec::new();

            for line in order_fixture.lines {
                let id = ProductId::new(line.product);

                let product = self
                    .catalog
                    .get(&id)
                    .map_err(|_err| FixtureError::ProductNotFound(id.clone()))?;

                lines.push(OrderLine {
                    product_id: id,
                    product_name: product.name.clone(),
                    unit_price: product.price,
                    quantity: line.quantity,
                });
            }

            let first = lines
                .first()
                .ok_or_else(|| FixtureError::EmptyOrder(order_fixture.id.clone()))?;

            let total = lines.iter().skip(1).try_fold(first.subtotal()?, |acc, line| {
                acc.add(line.subtotal()?)
                    .map_err(TotalPriceError::from)
            })?;

            self.orders.push(Order::new(
                order_fixture.id,
                order_fixture.status,
                lines,
                total,
                order_fixture.created_at,
            ));
        }

        Ok(self)
    }

    /// Load a complete fixture set (products and orders with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// The catalog built from the loaded products
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// The order history built from the loaded orders
    pub fn orders(&self) -> &OrderHistory<'a> {
        &self.orders
    }

    /// Consume the fixture, yielding the catalog and seeded order history
    #[must_use]
    pub fn into_parts(self) -> (Catalog<'a>, OrderHistory<'a>) {
        (self.catalog, self.orders)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use crate::orders::OrderStatus;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_products_and_orders() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        assert_eq!(fixture.catalog().len(), 6);
        assert_eq!(fixture.orders().len(), 2);
        assert_eq!(fixture.catalog().currency(), Some(BRL));

        let phone = fixture.catalog().get(&"smartphone".into())?;

        assert_eq!(phone.price.to_minor_units(), 189_999);
        assert_eq!(phone.stock, Some(15));

        Ok(())
    }

    #[test]
    fn seeded_order_totals_are_derived_from_lines() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        let completed = fixture
            .orders()
            .iter()
            .find(|order| order.status() == OrderStatus::Completed)
            .ok_or("expected a completed seeded order")?;

        // smartphone (1899.99) + 2x headphones (249.99 each)
        assert_eq!(completed.total().to_minor_units(), 239_997);

        Ok(())
    }

    #[test]
    fn into_parts_yields_catalog_and_history() -> TestResult {
        let (catalog, history) = Fixture::from_set("demo")?.into_parts();

        assert_eq!(catalog.len(), 6);
        assert_eq!(history.len(), 2);

        Ok(())
    }

    #[test]
    fn load_orders_rejects_unknown_product_reference() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "products",
            "broken",
            "products:\n  apple:\n    name: Apple\n    price: 1.00 USD\n",
        )?;

        write_fixture(
            dir.path(),
            "orders",
            "broken",
            "orders:\n  - id: ord-1\n    status: PENDING\n    created_at: 2026-08-01T10:00:00Z\n    lines:\n      - product: banana\n        quantity: 1\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_products("broken")?;

        let result = fixture.load_orders("broken");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(_))));

        Ok(())
    }

    #[test]
    fn load_orders_rejects_an_order_with_no_lines() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "products",
            "empty",
            "products:\n  apple:\n    name: Apple\n    price: 1.00 USD\n",
        )?;

        write_fixture(
            dir.path(),
            "orders",
            "empty",
            "orders:\n  - id: ord-1\n    status: PENDING\n    created_at: 2026-08-01T10:00:00Z\n    lines: []\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_products("empty")?;

        let result = fixture.load_orders("empty");

        assert!(matches!(result, Err(FixtureError::EmptyOrder(_))));

        Ok(())
    }

    #[test]
    fn load_products_rejects_currency_mismatch() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "products",
            "mixed",
            "products:\n  apple:\n    name: Apple\n    price: 1.00 USD\n  banana:\n    name: Banana\n    price: 1.00 GBP\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        let result = fixture.load_products("mixed");

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::CurrencyMismatch(..)))
        ));

        Ok(())
    }

    #[test]
    fn missing_fixture_file_is_an_io_error() {
        let mut fixture = Fixture::new();

        let result = fixture.load_products("does-not-exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.catalog().is_empty());
        assert!(fixture.orders().is_empty());
    }
}

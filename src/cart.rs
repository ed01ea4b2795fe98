//! Cart
//!
//! The cart aggregator owns the session's line entries and derives the
//! running total. Entries are kept in insertion order and are unique per
//! product id. All mutations are synchronous structural edits; a missing
//! id is a no-op rather than an error.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{TotalPriceError, cart_total},
    products::{Product, ProductId},
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product id, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// One product-and-quantity pairing held in the cart.
///
/// The product is a snapshot taken at add time; the cart never re-fetches
/// it from the catalog. Invariant: `quantity >= 1` always holds, entries
/// that would drop to zero are removed instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartEntry<'a> {
    /// Returns the product snapshot for this entry.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Returns the quantity for this entry.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Cart
#[derive(Debug)]
pub struct Cart<'a> {
    entries: Vec<CartEntry<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart bound to the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            entries: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If an entry with the same product id already exists, its quantity is
    /// incremented by exactly one and its stored snapshot is replaced by
    /// the supplied product. Otherwise a new entry with quantity 1 is
    /// appended, preserving the relative order of other entries.
    ///
    /// Stock is not checked here; gating an out-of-stock add is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::CurrencyMismatch`] if the product is priced
    /// in a currency other than the cart's.
    pub fn add(&mut self, product: Product<'a>) -> Result<(), CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == product.id)
        {
            entry.quantity = entry.quantity.saturating_add(1);
            entry.product = product;
        } else {
            self.entries.push(CartEntry {
                product,
                quantity: 1,
            });
        }

        Ok(())
    }

    /// Remove the entry for a product id.
    ///
    /// A missing id is a no-op. The order of the remaining entries is
    /// preserved.
    pub fn remove(&mut self, id: &ProductId) {
        self.entries.retain(|entry| entry.product.id != *id);
    }

    /// Set the quantity of an existing entry to an absolute value.
    ///
    /// A quantity of zero is equivalent to [`Cart::remove`]. A missing id
    /// is a no-op; unlike [`Cart::add`], this never creates an entry.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == *id)
        {
            entry.quantity = quantity;
        }
    }

    /// Remove all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Calculate the cart total.
    ///
    /// The total is derived on every read as the sum over entries of
    /// price times quantity; nothing is cached between reads.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if there was a money arithmetic or
    /// overflow error.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        cart_total(&self.entries)
    }

    /// Get the entry for a product id, if present.
    pub fn entry(&self, id: &ProductId) -> Option<&CartEntry<'a>> {
        self.entries.iter().find(|entry| entry.product.id == *id)
    }

    /// The entries currently in the cart, in insertion order.
    pub fn entries(&self) -> &[CartEntry<'a>] {
        &self.entries
    }

    /// Iterate over the entries in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry<'a>> {
        self.entries.iter()
    }

    /// Get the number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

//! Orders
//!
//! Mocked order history for one storefront session. Orders are immutable
//! snapshots: line items copy the product id, name and unit price at
//! checkout time, so later catalog changes never rewrite history.

use chrono::{DateTime, Utc};
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{TotalPriceError, line_total},
    products::ProductId,
    session::Session,
};

/// Order lifecycle status, as the mock backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// The order was placed and is being processed.
    Pending,

    /// The order was delivered.
    Completed,

    /// The order was cancelled.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        };

        f.write_str(label)
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'a> {
    /// Id of the ordered product
    pub product_id: ProductId,

    /// Name of the ordered product at checkout time
    pub product_name: String,

    /// Unit price at checkout time
    pub unit_price: Money<'a, Currency>,

    /// Units ordered
    pub quantity: u32,
}

impl<'a> OrderLine<'a> {
    /// The line subtotal (unit price times quantity).
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError::Overflow`] if the multiplication
    /// overflows.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(self.unit_price, self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    id: String,
    status: OrderStatus,
    lines: SmallVec<[OrderLine<'a>; 4]>,
    total: Money<'a, Currency>,
    created_at: DateTime<Utc>,
}

impl<'a> Order<'a> {
    /// Create an order from its parts.
    #[must_use]
    pub fn new(
        id: String,
        status: OrderStatus,
        lines: SmallVec<[OrderLine<'a>; 4]>,
        total: Money<'a, Currency>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Order {
            id,
            status,
            lines,
            total,
            created_at,
        }
    }

    /// The order id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The order status.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// The order lines.
    pub fn lines(&self) -> &[OrderLine<'a>] {
        &self.lines
    }

    /// The order total, fixed at checkout time.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// When the order was placed.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Errors related to placing an order.
///
/// These are caller-policy errors layered on top of the cart; the cart
/// itself has no failure modes for its mutations.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Checkout requires a signed-in session.
    #[error("sign in before placing an order")]
    NotSignedIn,

    /// Checkout requires at least one cart entry.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// The cart total could not be calculated.
    #[error(transparent)]
    Total(#[from] TotalPriceError),
}

/// Order History
#[derive(Debug, Default)]
pub struct OrderHistory<'a> {
    orders: Vec<Order<'a>>,
}

impl<'a> OrderHistory<'a> {
    /// Create a new empty order history.
    #[must_use]
    pub fn new() -> Self {
        OrderHistory { orders: Vec::new() }
    }

    /// Record an order.
    pub fn push(&mut self, order: Order<'a>) {
        self.orders.push(order);
    }

    /// Iterate over the recorded orders, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order<'a>> {
        self.orders.iter()
    }

    /// The most recently recorded order, if any.
    pub fn latest(&self) -> Option<&Order<'a>> {
        self.orders.last()
    }

    /// Get the number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Place an order from the current cart.
///
/// Applies the storefront checkout policy: the session must be signed in
/// and the cart must not be empty. On success the cart contents are
/// snapshotted into a new [`OrderStatus::Pending`] order, the cart is
/// cleared, and the order is recorded in the history and returned.
///
/// # Errors
///
/// - [`CheckoutError::NotSignedIn`]: The session holds no token.
/// - [`CheckoutError::EmptyCart`]: The cart has no entries.
/// - [`CheckoutError::Total`]: The cart total could not be calculated.
pub fn checkout<'a>(
    cart: &mut Cart<'a>,
    session: &Session,
    history: &mut OrderHistory<'a>,
) -> Result<Order<'a>, CheckoutError> {
    if !session.is_authenticated() {
        return Err(CheckoutError::NotSignedIn);
    }

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total = cart.total()?;

    let lines: SmallVec<[OrderLine<'a>; 4]> = cart
        .iter()
        .map(|entry| OrderLine {
            product_id: entry.product().id.clone(),
            product_name: entry.product().name.clone(),
            unit_price: entry.product().price,
            quantity: entry.quantity(),
        })
        .collect();

    let order = Order::new(
        next_order_id(),
        OrderStatus::Pending,
        lines,
        total,
        Utc::now(),
    );

    cart.clear();
    history.push(order.clone());

    Ok(order)
}

fn next_order_id() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    format!("ord-{nanos:x}")
}

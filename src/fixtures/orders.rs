//! Order Fixtures

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::orders::OrderStatus;

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Seeded orders, oldest first
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order id
    pub id: String,

    /// Order status (PENDING, COMPLETED or CANCELLED)
    pub status: OrderStatus,

    /// When the order was placed (RFC 3339)
    pub created_at: DateTime<Utc>,

    /// Order lines
    pub lines: Vec<OrderLineFixture>,
}

/// One line of a seeded order, referencing a product fixture by id.
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Product fixture id
    pub product: String,

    /// Units ordered
    pub quantity: u32,
}

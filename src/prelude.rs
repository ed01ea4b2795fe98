//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEntry, CartError},
    catalog::{Catalog, CatalogError},
    fixtures::{Fixture, FixtureError},
    orders::{
        CheckoutError, Order, OrderHistory, OrderLine, OrderStatus, checkout,
    },
    pricing::{TotalPriceError, cart_total, line_total},
    products::{Product, ProductId, ProductKey},
    receipt::{Receipt, ReceiptError},
    session::{AuthError, Session, User},
};

//! Vitrine
//!
//! Vitrine is an in-memory storefront demo core: a product catalog, a
//! session-scoped shopping cart, mocked authentication and a mocked order
//! history. All state is explicit and session-owned; nothing persists and
//! nothing touches a network.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod session;
pub mod utils;

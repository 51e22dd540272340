//! Catalog gateways, cart sessions and the shared application context.

pub mod carts;
pub mod catalog;
pub mod context;

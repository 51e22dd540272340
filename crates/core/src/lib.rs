//! Pantry
//!
//! Pantry is the domain core of a food catalog storefront: the product model shared with the
//! upstream catalog, the shapes the catalog gateway hands out, and the shopping cart store.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod products;

//! Carts
//!
//! Cart sessions: one [`pantry::cart::CartStore`] per session, held in memory.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CartsServiceError;
pub use models::{CartSession, CartUuid};
pub use service::*;

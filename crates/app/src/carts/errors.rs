//! Carts service errors.

use thiserror::Error;

/// Cart service error variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    /// A cart session with this UUID already exists.
    #[error("cart already exists")]
    AlreadyExists,

    /// No cart session with this UUID exists.
    #[error("cart not found")]
    NotFound,
}

//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use pantry::cart::CartState;
use uuid::Uuid;

/// Identifier of a cart session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartUuid(Uuid);

impl CartUuid {
    /// Generate a fresh, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CartUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CartUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl PartialEq<Uuid> for CartUuid {
    fn eq(&self, other: &Uuid) -> bool {
        self.0 == *other
    }
}

impl From<Uuid> for CartUuid {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CartUuid> for Uuid {
    fn from(value: CartUuid) -> Self {
        value.0
    }
}

/// Cart Session Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartSession {
    pub uuid: CartUuid,
    pub state: CartState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_uuids_compare_with_plain_uuids() {
        let uuid = Uuid::now_v7();
        let cart = CartUuid::from(uuid);

        assert_eq!(cart, uuid);
        assert_eq!(Uuid::from(cart), uuid);
        assert_eq!(cart.to_string(), uuid.to_string());
    }

    #[test]
    fn generated_cart_uuids_are_time_ordered() {
        let first = CartUuid::new();
        let second = CartUuid::new();

        assert_ne!(first, second);
        assert_eq!(first.into_uuid().get_version_num(), 7);
    }
}

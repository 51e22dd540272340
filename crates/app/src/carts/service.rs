//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use pantry::cart::{CartAction, CartStore};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::carts::{
    errors::CartsServiceError,
    models::{CartSession, CartUuid},
};

#[derive(Debug)]
struct CartEntry {
    store: CartStore,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CartEntry {
    fn new(now: Timestamp) -> Self {
        Self {
            store: CartStore::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn session(&self, uuid: CartUuid) -> CartSession {
        CartSession {
            uuid,
            state: self.store.state().clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Cart sessions held in process memory.
///
/// Every transition takes the write lock, so actions on a cart apply one at a time and each
/// caller sees the state its own action produced.
#[derive(Debug, Default)]
pub struct InMemoryCartsService {
    carts: RwLock<FxHashMap<CartUuid, CartEntry>>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn create_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError> {
        let mut carts = self.carts.write().await;

        if carts.contains_key(&uuid) {
            return Err(CartsServiceError::AlreadyExists);
        }

        let entry = carts
            .entry(uuid)
            .or_insert_with(|| CartEntry::new(Timestamp::now()));

        debug!(cart = %uuid, "created cart");

        Ok(entry.session(uuid))
    }

    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError> {
        self.carts
            .read()
            .await
            .get(&uuid)
            .map(|entry| entry.session(uuid))
            .ok_or(CartsServiceError::NotFound)
    }

    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError> {
        self.carts
            .write()
            .await
            .remove(&uuid)
            .ok_or(CartsServiceError::NotFound)?;

        debug!(cart = %uuid, "deleted cart");

        Ok(())
    }

    async fn dispatch(
        &self,
        uuid: CartUuid,
        action: CartAction,
    ) -> Result<CartSession, CartsServiceError> {
        let mut carts = self.carts.write().await;
        let entry = carts.get_mut(&uuid).ok_or(CartsServiceError::NotFound)?;

        debug!(cart = %uuid, ?action, "dispatching cart action");

        entry.store.dispatch(action);
        entry.updated_at = Timestamp::now();

        Ok(entry.session(uuid))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Open a new, empty and closed cart session.
    async fn create_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError>;

    /// Retrieve a cart session.
    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError>;

    /// Discard a cart session.
    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError>;

    /// Apply one action to a cart session and return the resulting session.
    async fn dispatch(
        &self,
        uuid: CartUuid,
        action: CartAction,
    ) -> Result<CartSession, CartsServiceError>;
}

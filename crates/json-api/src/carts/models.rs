//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry::cart::CartLineItem;
use pantry_app::carts::CartSession;

use crate::catalog::models::ProductPayload;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// Cart lines in the order they were first added
    pub items: Vec<CartItemResponse>,

    /// Sum of all line quantities
    pub total_items: u64,

    /// Whether the cart panel is open
    pub is_open: bool,

    /// Cart button badge text (`"99+"` above 99), absent when the cart is empty
    pub badge: Option<String>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<CartSession> for CartResponse {
    fn from(session: CartSession) -> Self {
        CartResponse {
            uuid: session.uuid.into_uuid(),
            items: session
                .state
                .items()
                .iter()
                .map(CartItemResponse::from)
                .collect(),
            total_items: session.state.total_items(),
            is_open: session.state.is_open(),
            badge: session.state.badge_label(),
            created_at: session.created_at.to_string(),
            updated_at: session.updated_at.to_string(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// Product snapshot taken when the line was first added
    pub product: ProductPayload,

    /// Units of the product in the cart, at least 1
    pub quantity: u64,
}

impl From<&CartLineItem> for CartItemResponse {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product: line.product().clone().into(),
            quantity: line.quantity(),
        }
    }
}

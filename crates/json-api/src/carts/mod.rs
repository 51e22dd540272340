//! Carts
//!
//! Cart sessions over HTTP. Every transition answers with the full cart state it produced.

use salvo::prelude::*;
use uuid::Uuid;

use pantry::cart::CartAction;

use crate::{carts::errors::into_status_error, carts::models::CartResponse, extensions::*};

mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod models;

pub(crate) use handlers::*;

/// Apply `action` to the cart and render the resulting state.
async fn dispatch(
    depot: &Depot,
    cart: Uuid,
    action: CartAction,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let session = state
        .app
        .carts
        .dispatch(cart.into(), action)
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}

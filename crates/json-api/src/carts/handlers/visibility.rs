//! Cart Visibility Handlers

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use pantry::cart::CartAction;

use crate::carts::{dispatch, models::CartResponse};

/// Open Cart Handler
///
/// Shows the cart panel.
#[endpoint(
    tags("carts"),
    summary = "Open Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn open(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    dispatch(depot, cart.into_inner(), CartAction::Open).await
}

/// Close Cart Handler
///
/// Hides the cart panel.
#[endpoint(
    tags("carts"),
    summary = "Close Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn close(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    dispatch(depot, cart.into_inner(), CartAction::Close).await
}

/// Toggle Cart Handler
///
/// Flips the cart panel between shown and hidden.
#[endpoint(
    tags("carts"),
    summary = "Toggle Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn toggle(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    dispatch(depot, cart.into_inner(), CartAction::Toggle).await
}

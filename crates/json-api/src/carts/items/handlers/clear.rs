//! Clear Cart Items Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use pantry::cart::CartAction;

use crate::carts::{dispatch, models::CartResponse};

/// Clear Cart Items Handler
///
/// Removes every line from the cart. Visibility is unchanged.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    dispatch(depot, cart.into_inner(), CartAction::Clear).await
}

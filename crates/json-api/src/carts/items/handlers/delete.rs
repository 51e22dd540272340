//! Remove Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use pantry::{cart::CartAction, products::ProductCode};

use crate::{
    carts::{dispatch, models::CartResponse},
    extensions::*,
};

/// Remove Cart Item Handler
///
/// Removes a product's line from the cart. Unknown products are ignored.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let code = ProductCode::new(code.into_inner()).or_400("invalid product code")?;

    dispatch(depot, cart.into_inner(), CartAction::RemoveItem(code)).await
}

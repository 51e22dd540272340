//! Add Cart Item Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use pantry::{cart::CartAction, products::Product};

use crate::{
    carts::{dispatch, models::CartResponse},
    catalog::models::ProductPayload,
    extensions::*,
};

/// Add Cart Item Handler
///
/// Adds one of a product to the cart. A product already in the cart keeps its first snapshot
/// and has its quantity incremented.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let product = Product::try_from(json.into_inner()).or_400("invalid product code")?;

    dispatch(depot, cart.into_inner(), CartAction::AddItem(product)).await
}

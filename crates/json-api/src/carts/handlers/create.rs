//! Create Cart Handler

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::carts::CartUuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
};

/// Create Cart Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Client-chosen cart UUID; generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

/// Create Cart Handler
///
/// Opens an empty, closed cart session. The body is optional; without one, or without a
/// `uuid`, the server picks the identifier.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Cart already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let uuid = parse_request(req)
        .await?
        .uuid
        .map_or_else(CartUuid::new, CartUuid::from_uuid);

    let session = state
        .app
        .carts
        .create_cart(uuid)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}

async fn parse_request(req: &mut Request) -> Result<CreateCartRequest, StatusError> {
    let body = req.payload().await.or_400("could not read request body")?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateCartRequest::default());
    }

    serde_json::from_slice(body).or_400("could not parse create cart request")
}

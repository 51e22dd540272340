//! Errors

use salvo::http::StatusError;
use tracing::warn;

use pantry_app::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => {
            warn!("cart not found");

            StatusError::not_found().brief("Cart not found")
        }
    }
}

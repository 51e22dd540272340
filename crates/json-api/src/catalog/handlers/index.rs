//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    catalog::{handlers::sorted, models::ProductsPageResponse},
    extensions::*,
};

/// Product Index Handler
///
/// Returns a page of the general catalog listing.
#[endpoint(
    tags("catalog"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "A page of products, empty when the catalog is unavailable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort option"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    page_size: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let sort = sort.into_sort_option()?;
    let request = (page, page_size).into_page_request();

    let page = state.app.catalog.list(request).await;

    Ok(Json(sorted(page, sort)))
}

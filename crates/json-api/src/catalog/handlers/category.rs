//! Category Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    catalog::{handlers::sorted, models::ProductsPageResponse},
    extensions::*,
};

/// Category Handler
///
/// Returns a page of products tagged with the category.
#[endpoint(
    tags("catalog"),
    summary = "Browse Category",
    responses(
        (status_code = StatusCode::OK, description = "A page of products, empty when the catalog is unavailable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort option"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    page: QueryParam<String, false>,
    page_size: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let sort = sort.into_sort_option()?;
    let request = (page, page_size).into_page_request();

    let page = state
        .app
        .catalog
        .by_category(category.into_inner(), request)
        .await;

    Ok(Json(sorted(page, sort)))
}

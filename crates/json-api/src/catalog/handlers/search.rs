//! Product Search Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    catalog::{handlers::sorted, models::ProductsPageResponse},
    extensions::*,
};

/// Product Search Handler
///
/// Full-text search by product name. Missing terms are forwarded as an empty search.
#[endpoint(
    tags("catalog"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "A page of matches, empty when the catalog is unavailable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort option"),
    ),
)]
pub(crate) async fn handler(
    search_terms: QueryParam<String, false>,
    page: QueryParam<String, false>,
    page_size: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let sort = sort.into_sort_option()?;
    let request = (page, page_size).into_page_request();
    let terms = search_terms.into_inner().unwrap_or_default();

    let page = state.app.catalog.search(terms, request).await;

    Ok(Json(sorted(page, sort)))
}

//! Categories Handler

use pantry::catalog::popular_categories;
use salvo::prelude::*;

use crate::catalog::models::CategoriesResponse;

/// Categories Handler
///
/// Returns the categories offered for browsing.
#[endpoint(tags("catalog"), summary = "List Categories")]
pub(crate) async fn handler() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: popular_categories()
            .iter()
            .map(|category| (*category).to_owned())
            .collect(),
    })
}

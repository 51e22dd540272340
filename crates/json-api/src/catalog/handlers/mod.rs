//! Catalog Handlers

use pantry::catalog::{ProductsPage, SortOption};

use crate::catalog::models::ProductsPageResponse;

pub(crate) mod categories;
pub(crate) mod category;
pub(crate) mod index;
pub(crate) mod product;
pub(crate) mod search;

/// Reorder the page when a sort was requested and convert it for the response.
fn sorted(mut page: ProductsPage, sort: Option<SortOption>) -> ProductsPageResponse {
    if let Some(sort) = sort {
        page.sort(sort);
    }

    page.into()
}

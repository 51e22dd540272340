//! Catalog query parsing helpers.

use pantry::catalog::{PageRequest, SortOption};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait SortQueryExt {
    fn into_sort_option(self) -> Result<Option<SortOption>, StatusError>;
}

impl SortQueryExt for QueryParam<String, false> {
    fn into_sort_option(self) -> Result<Option<SortOption>, StatusError> {
        self.into_inner()
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<SortOption>())
            .transpose()
            .or_400("could not parse \"sort\" query parameter")
    }
}

pub(crate) trait PageQueryExt {
    /// Page request from the raw `page` and `page_size` values; unparsable or zero values fall back
    /// to the defaults.
    fn into_page_request(self) -> PageRequest;
}

impl PageQueryExt for (QueryParam<String, false>, QueryParam<String, false>) {
    fn into_page_request(self) -> PageRequest {
        let (page, page_size) = self;

        PageRequest::from_optional(parse_lenient(page), parse_lenient(page_size))
    }
}

fn parse_lenient(param: QueryParam<String, false>) -> Option<u32> {
    param.into_inner().and_then(|value| value.trim().parse().ok())
}

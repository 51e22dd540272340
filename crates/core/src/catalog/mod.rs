//! Catalog
//!
//! The data shapes handed out by the catalog gateway. Gateways never surface an error to their
//! callers: when the upstream catalog fails they hand back [`ProductsPage::empty`] or
//! [`ProductDetail::not_found`] instead, so consumers only ever distinguish "data" from
//! "no data".

use serde::{Deserialize, Serialize};

use crate::products::Product;

mod numbers;
mod sort;

pub use sort::{SortOption, UnknownSortOption, sort_products};

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Largest page size served; larger requests are clamped to it.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Detail `status` value for a product that was found.
pub const STATUS_FOUND: u32 = 1;

/// Detail `status_verbose` used when no product could be returned.
pub const NOT_FOUND_VERBOSE: &str = "product not found or API unavailable";

/// Categories offered for browsing.
pub const POPULAR_CATEGORIES: [&str; 15] = [
    "beverages",
    "snacks",
    "dairy",
    "breakfast",
    "cheese",
    "chocolates",
    "yogurts",
    "cookies",
    "cereals",
    "breads",
    "fruits",
    "vegetables",
    "meats",
    "seafood",
    "desserts",
];

/// Categories offered for browsing.
#[must_use]
pub fn popular_categories() -> &'static [&'static str] {
    &POPULAR_CATEGORIES
}

/// A one-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number
    pub page: u32,

    /// Products per page
    pub page_size: u32,
}

impl PageRequest {
    /// Build a page request, substituting defaults for zero values and capping the page size
    /// at [`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: match page_size {
                0 => DEFAULT_PAGE_SIZE,
                size => size.min(MAX_PAGE_SIZE),
            },
        }
    }

    /// Build a page request from optional values.
    #[must_use]
    pub fn from_optional(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self::new(page.unwrap_or(DEFAULT_PAGE), page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// A page of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsPage {
    /// Total matching products
    #[serde(default, deserialize_with = "numbers::lenient_u64")]
    pub count: u64,

    /// One-based page number
    #[serde(default = "default_page", deserialize_with = "numbers::lenient_u32")]
    pub page: u32,

    /// Number of pages (as reported upstream)
    #[serde(default, deserialize_with = "numbers::lenient_u64")]
    pub page_count: u64,

    /// Products per page
    #[serde(
        default = "default_page_size",
        deserialize_with = "numbers::lenient_u32"
    )]
    pub page_size: u32,

    /// Products on this page
    #[serde(default, deserialize_with = "numbers::valid_products")]
    pub products: Vec<Product>,

    /// Products skipped before this page
    #[serde(default, deserialize_with = "numbers::lenient_u64")]
    pub skip: u64,
}

impl ProductsPage {
    /// The empty, well-formed page substituted when the upstream catalog fails.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self {
            count: 0,
            page: request.page,
            page_count: 0,
            page_size: request.page_size,
            products: Vec::new(),
            skip: 0,
        }
    }

    /// Whether a later page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) < self.page_count
    }

    /// Whether the page holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Reorder this page's products.
    pub fn sort(&mut self, option: SortOption) {
        sort_products(&mut self.products, option);
    }
}

/// A single product lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// The code that was looked up
    #[serde(default)]
    pub code: String,

    /// The product, when found
    #[serde(default, deserialize_with = "numbers::valid_product")]
    pub product: Option<Product>,

    /// `1` when found, `0` otherwise
    #[serde(default, deserialize_with = "numbers::lenient_u32")]
    pub status: u32,

    /// Human readable status
    #[serde(default)]
    pub status_verbose: String,
}

impl ProductDetail {
    /// The detail substituted when a product is missing or the upstream catalog fails.
    #[must_use]
    pub fn not_found(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            product: None,
            status: 0,
            status_verbose: NOT_FOUND_VERBOSE.to_owned(),
        }
    }

    /// A detail for a product that was found.
    #[must_use]
    pub fn found(product: Product) -> Self {
        Self {
            code: product.code.to_string(),
            product: Some(product),
            status: STATUS_FOUND,
            status_verbose: "product found".to_owned(),
        }
    }

    /// The product, if the lookup succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product
            .as_ref()
            .filter(|_| self.status == STATUS_FOUND)
    }

    /// Take the product, if the lookup succeeded.
    #[must_use]
    pub fn into_product(self) -> Option<Product> {
        if self.status == STATUS_FOUND {
            self.product
        } else {
            None
        }
    }
}

//! Offline catalog backed by the bundled sample products.

use async_trait::async_trait;
use pantry::{
    catalog::{PageRequest, ProductDetail, ProductsPage},
    fixtures::{sample_products, sample_products_page},
    products::Product,
};

use crate::catalog::CatalogService;

/// Serves the sample products without touching the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogService for SampleCatalog {
    async fn list(&self, request: PageRequest) -> ProductsPage {
        sample_products_page(request)
    }

    async fn search(&self, terms: String, request: PageRequest) -> ProductsPage {
        let needle = terms.trim().to_lowercase();

        matching(request, |product| {
            product.display_name().to_lowercase().contains(&needle)
        })
    }

    async fn by_category(&self, category: String, request: PageRequest) -> ProductsPage {
        let needle = category.trim().to_lowercase();

        matching(request, |product| {
            product
                .categories
                .as_deref()
                .is_some_and(|categories| {
                    categories
                        .split(',')
                        .any(|tag| tag.trim().to_lowercase() == needle)
                })
        })
    }

    async fn by_barcode(&self, barcode: String) -> ProductDetail {
        let barcode = barcode.trim();

        sample_products()
            .into_iter()
            .find(|product| product.code == barcode)
            .map_or_else(|| ProductDetail::not_found(barcode), ProductDetail::found)
    }
}

/// The requested page of sample products accepted by `filter`.
fn matching(request: PageRequest, filter: impl Fn(&Product) -> bool) -> ProductsPage {
    let matches: Vec<Product> = sample_products().into_iter().filter(filter).collect();

    let count = u64::try_from(matches.len()).unwrap_or(u64::MAX);
    let page_size = u64::from(request.page_size.max(1));
    let skip = u64::from(request.page.saturating_sub(1)) * page_size;

    let products = matches
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(usize::MAX))
        .take(usize::try_from(page_size).unwrap_or(usize::MAX))
        .collect();

    ProductsPage {
        count,
        page: request.page,
        page_count: count.div_ceil(page_size),
        page_size: request.page_size,
        products,
        skip,
    }
}

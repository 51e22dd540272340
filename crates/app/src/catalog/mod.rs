//! Catalog
//!
//! Gateways to the product catalog. Every operation answers with data: upstream failures are
//! logged and replaced by an empty page or a not-found detail.

use async_trait::async_trait;
use mockall::automock;
use pantry::catalog::{PageRequest, ProductDetail, ProductsPage};

pub mod errors;
mod open_food_facts;
mod sample;

pub use errors::CatalogError;
pub use open_food_facts::*;
pub use sample::SampleCatalog;

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Browse the whole catalog.
    async fn list(&self, request: PageRequest) -> ProductsPage;

    /// Full-text search by product name.
    async fn search(&self, terms: String, request: PageRequest) -> ProductsPage;

    /// Products tagged with the given category.
    async fn by_category(&self, category: String, request: PageRequest) -> ProductsPage;

    /// Look up a single product by barcode.
    async fn by_barcode(&self, barcode: String) -> ProductDetail;
}

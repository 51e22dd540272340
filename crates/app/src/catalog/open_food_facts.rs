//! Reqwest-backed OpenFoodFacts gateway.

use std::time::Duration;

use async_trait::async_trait;
use pantry::catalog::{PageRequest, ProductDetail, ProductsPage};
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, CatalogService};

/// Public OpenFoodFacts instance.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// User agent sent upstream unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "FoodExplorer/1.0";

/// Upstream request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach OpenFoodFacts.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL of the instance; may carry a path prefix.
    pub base_url: Url,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Timeout applied to each upstream request.
    pub timeout: Duration,
}

impl OpenFoodFactsConfig {
    /// Configuration for `base_url` with the default identity and timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Pass-through gateway to an OpenFoodFacts instance.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsCatalog {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl OpenFoodFactsCatalog {
    /// Build a gateway using a reqwest client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: OpenFoodFactsConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            user_agent: config.user_agent,
        })
    }

    /// Fetch a page of the general listing.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure instead of substituting an empty page.
    pub async fn try_list(&self, request: PageRequest) -> Result<ProductsPage, CatalogError> {
        self.fetch(self.list_url(request)?).await
    }

    /// Fetch a page of search results.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure instead of substituting an empty page.
    pub async fn try_search(
        &self,
        terms: &str,
        request: PageRequest,
    ) -> Result<ProductsPage, CatalogError> {
        self.fetch(self.search_url(terms, request)?).await
    }

    /// Fetch a page of a category.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure instead of substituting an empty page.
    pub async fn try_by_category(
        &self,
        category: &str,
        request: PageRequest,
    ) -> Result<ProductsPage, CatalogError> {
        self.fetch(self.category_url(category, request)?).await
    }

    /// Look up a barcode.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure instead of substituting a not-found detail.
    pub async fn try_by_barcode(&self, barcode: &str) -> Result<ProductDetail, CatalogError> {
        let mut detail: ProductDetail = self.fetch(self.barcode_url(barcode)?).await?;

        if detail.code.is_empty() {
            barcode.clone_into(&mut detail.code);
        }

        Ok(detail)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(%url, "requesting catalog");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(CatalogError::Transport)?;

        decode_body(status, &body)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn search_endpoint(
        &self,
        params: &[(&str, &str)],
        request: PageRequest,
    ) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&["cgi", "search.pl"])?;

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("page", &request.page.to_string())
            .append_pair("page_size", &request.page_size.to_string())
            .append_pair("json", "true");

        Ok(url)
    }

    fn list_url(&self, request: PageRequest) -> Result<Url, CatalogError> {
        self.search_endpoint(&[("search_simple", "1"), ("action", "process")], request)
    }

    fn search_url(&self, terms: &str, request: PageRequest) -> Result<Url, CatalogError> {
        self.search_endpoint(&[("search_terms", terms)], request)
    }

    fn category_url(&self, category: &str, request: PageRequest) -> Result<Url, CatalogError> {
        self.search_endpoint(
            &[
                ("action", "process"),
                ("tagtype_0", "categories"),
                ("tag_contains_0", "contains"),
                ("tag_0", category),
            ],
            request,
        )
    }

    fn barcode_url(&self, barcode: &str) -> Result<Url, CatalogError> {
        self.endpoint(&["api", "v0", "product", &format!("{barcode}.json")])
    }
}

#[async_trait]
impl CatalogService for OpenFoodFactsCatalog {
    async fn list(&self, request: PageRequest) -> ProductsPage {
        self.try_list(request).await.unwrap_or_else(|error| {
            warn!(%error, page = request.page, "catalog listing failed");
            ProductsPage::empty(request)
        })
    }

    async fn search(&self, terms: String, request: PageRequest) -> ProductsPage {
        self.try_search(&terms, request)
            .await
            .unwrap_or_else(|error| {
                warn!(%error, %terms, page = request.page, "catalog search failed");
                ProductsPage::empty(request)
            })
    }

    async fn by_category(&self, category: String, request: PageRequest) -> ProductsPage {
        self.try_by_category(&category, request)
            .await
            .unwrap_or_else(|error| {
                warn!(%error, %category, page = request.page, "catalog category failed");
                ProductsPage::empty(request)
            })
    }

    async fn by_barcode(&self, barcode: String) -> ProductDetail {
        if barcode.trim().is_empty() {
            return ProductDetail::not_found(barcode);
        }

        self.try_by_barcode(&barcode)
            .await
            .unwrap_or_else(|error| {
                warn!(%error, %barcode, "catalog lookup failed");
                ProductDetail::not_found(barcode)
            })
    }
}

/// Classify an upstream response: status first, then HTML pages, then JSON.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, CatalogError> {
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    if is_html(body) {
        return Err(CatalogError::Html);
    }

    serde_json::from_str(body).map_err(CatalogError::Decode)
}

fn is_html(body: &str) -> bool {
    let body = body.trim_start();

    body.starts_with("<!") || body.starts_with("<html")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn catalog(base_url: &str) -> TestResult<OpenFoodFactsCatalog> {
        Ok(OpenFoodFactsCatalog::new(OpenFoodFactsConfig::new(
            Url::parse(base_url)?,
        ))?)
    }

    #[test]
    fn list_url_matches_upstream_listing() -> TestResult {
        let url = catalog(DEFAULT_BASE_URL)?.list_url(PageRequest::new(2, 24))?;

        assert_eq!(
            url.as_str(),
            "https://world.openfoodfacts.org/cgi/search.pl?search_simple=1&action=process&page=2&page_size=24&json=true"
        );

        Ok(())
    }

    #[test]
    fn search_url_encodes_terms() -> TestResult {
        let url = catalog(DEFAULT_BASE_URL)?.search_url("peanut butter & jam", PageRequest::default())?;

        assert_eq!(
            url.query(),
            Some("search_terms=peanut+butter+%26+jam&page=1&page_size=24&json=true")
        );

        Ok(())
    }

    #[test]
    fn category_url_uses_tag_filter() -> TestResult {
        let url = catalog(DEFAULT_BASE_URL)?.category_url("dairy", PageRequest::new(1, 10))?;

        assert_eq!(
            url.query(),
            Some(
                "action=process&tagtype_0=categories&tag_contains_0=contains&tag_0=dairy&page=1&page_size=10&json=true"
            )
        );

        Ok(())
    }

    #[test]
    fn barcode_url_keeps_base_path_prefix() -> TestResult {
        let url = catalog("http://localhost:8080/off/")?.barcode_url("737628064502")?;

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/off/api/v0/product/737628064502.json"
        );

        Ok(())
    }

    #[test]
    fn barcode_url_escapes_path_separators() -> TestResult {
        let url = catalog(DEFAULT_BASE_URL)?.barcode_url("../admin")?;

        assert_eq!(url.path(), "/api/v0/product/..%2Fadmin.json");

        Ok(())
    }

    #[test]
    fn non_success_status_is_rejected_before_body() {
        let result = decode_body::<ProductsPage>(StatusCode::SERVICE_UNAVAILABLE, "{}");

        assert!(matches!(
            result,
            Err(CatalogError::Status(status)) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[test]
    fn html_bodies_are_rejected() {
        for body in [
            "<!DOCTYPE html><html></html>",
            "  \n<html><body>Too many requests</body></html>",
        ] {
            assert!(
                matches!(
                    decode_body::<ProductsPage>(StatusCode::OK, body),
                    Err(CatalogError::Html)
                ),
                "{body} should be treated as HTML"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            decode_body::<ProductsPage>(StatusCode::OK, "{\"products\": ["),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn well_formed_page_decodes() -> TestResult {
        let page: ProductsPage = decode_body(
            StatusCode::OK,
            r#"{"count": 1, "page": 1, "page_count": 1, "page_size": 24, "skip": 0,
                "products": [{"code": "3017620422003", "product_name": "Nutella"}]}"#,
        )?;

        assert_eq!(page.products.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_upstream_falls_back_to_empty_page() -> TestResult {
        let mut config = OpenFoodFactsConfig::new(Url::parse("http://127.0.0.1:9")?);
        config.timeout = Duration::from_secs(2);

        let catalog = OpenFoodFactsCatalog::new(config)?;
        let request = PageRequest::new(3, 12);

        assert_eq!(catalog.list(request).await, ProductsPage::empty(request));
        assert_eq!(
            catalog.search("milk".to_owned(), request).await,
            ProductsPage::empty(request)
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_upstream_falls_back_to_not_found() -> TestResult {
        let mut config = OpenFoodFactsConfig::new(Url::parse("http://127.0.0.1:9")?);
        config.timeout = Duration::from_secs(2);

        let detail = OpenFoodFactsCatalog::new(config)?
            .by_barcode("737628064502".to_owned())
            .await;

        assert_eq!(detail, ProductDetail::not_found("737628064502"));

        Ok(())
    }
}

//! Product Detail Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{catalog::models::ProductDetailResponse, extensions::*};

/// Product Detail Handler
///
/// Looks up a single product. Unknown barcodes and upstream failures both answer 200 with
/// `status: 0` and `product: null`.
#[endpoint(
    tags("catalog"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product detail or the not-found fallback"),
    ),
)]
pub(crate) async fn handler(
    barcode: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let detail = state.app.catalog.by_barcode(barcode.into_inner()).await;

    Ok(Json(detail.into()))
}

#[cfg(test)]
mod tests {
    use pantry::{
        catalog::ProductDetail,
        products::{Product, ProductCode},
    };
    use pantry_app::catalog::MockCatalogService;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("api/product/{barcode}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_product_found() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let product = Product::new(ProductCode::new("737628064502")?).with_name("Organic Milk");

        catalog
            .expect_by_barcode()
            .once()
            .withf(|barcode| barcode == "737628064502")
            .return_once(move |_| ProductDetail::found(product));

        let mut res = TestClient::get("http://example.com/api/product/737628064502")
            .send(&make_service(catalog))
            .await;

        let body: ProductDetailResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, 1);
        assert_eq!(
            body.product.and_then(|p| p.product_name),
            Some("Organic Milk".to_owned())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_product_passes_through_unmodelled_upstream_fields() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let product: Product = serde_json::from_value(json!({
            "code": "3017620422003",
            "product_name": "Nutella",
            "nova_group": 4,
            "ecoscore_grade": "e"
        }))?;

        catalog
            .expect_by_barcode()
            .once()
            .return_once(move |_| ProductDetail::found(product));

        let mut res = TestClient::get("http://example.com/api/product/3017620422003")
            .send(&make_service(catalog))
            .await;

        let body: serde_json::Value = res.take_json().await?;
        let product = body.get("product").ok_or("missing product")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(product.get("nova_group"), Some(&json!(4)));
        assert_eq!(product.get("ecoscore_grade"), Some(&json!("e")));

        Ok(())
    }

    #[tokio::test]
    async fn test_product_missing_returns_fallback_with_200() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_by_barcode()
            .once()
            .return_once(ProductDetail::not_found);

        let mut res = TestClient::get("http://example.com/api/product/000")
            .send(&make_service(catalog))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "code": "000",
                "product": null,
                "status": 0,
                "status_verbose": "product not found or API unavailable"
            })
        );

        Ok(())
    }
}

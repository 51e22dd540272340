//! Set Cart Item Quantity Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry::{cart::CartAction, products::ProductCode};

use crate::{
    carts::{dispatch, models::CartResponse},
    extensions::*,
};

/// Set Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetQuantityRequest {
    /// New absolute quantity; zero or less removes the line
    pub quantity: i64,
}

/// Set Cart Item Quantity Handler
///
/// Sets the quantity of a line already in the cart. Unknown products are ignored.
#[endpoint(
    tags("carts"),
    summary = "Set Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart state"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    code: PathParam<String>,
    json: JsonBody<SetQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let code = ProductCode::new(code.into_inner()).or_400("invalid product code")?;

    let action = CartAction::SetQuantity {
        code,
        quantity: json.into_inner().quantity,
    };

    dispatch(depot, cart.into_inner(), action).await
}

#[cfg(test)]
mod tests {
    use pantry::cart::CartState;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pantry_app::carts::MockCartsService;

    use crate::test_helpers::{carts_service, make_product, make_session};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart}/items/{code}").put(handler),
        )
    }

    fn existing() -> TestResult<CartState> {
        Ok(CartState::new()
            .reduce(CartAction::AddItem(make_product("A")?))
            .reduce(CartAction::AddItem(make_product("B")?)))
    }

    #[tokio::test]
    async fn test_set_quantity() -> TestResult {
        let uuid = Uuid::now_v7();
        let existing = existing()?;

        let mut carts = MockCartsService::new();

        carts
            .expect_dispatch()
            .once()
            .withf(move |u, action| {
                *u == uuid
                    && matches!(
                        action,
                        CartAction::SetQuantity { code, quantity: 5 } if code.as_str() == "A"
                    )
            })
            .return_once(move |u, action| Ok(make_session(u, existing.reduce(action))));

        let mut res = TestClient::put(format!("http://example.com/carts/{uuid}/items/A"))
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total_items, 6);

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_quantity_removes_line() -> TestResult {
        let uuid = Uuid::now_v7();
        let existing = existing()?;

        let mut carts = MockCartsService::new();

        carts
            .expect_dispatch()
            .once()
            .return_once(move |u, action| Ok(make_session(u, existing.reduce(action))));

        let mut res = TestClient::put(format!("http://example.com/carts/{uuid}/items/A"))
            .json(&json!({ "quantity": -1 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;
        let codes: Vec<&str> = body
            .items
            .iter()
            .map(|line| line.product.code.as_str())
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(codes, vec!["B"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_dispatch().never();

        let res = TestClient::put(format!("http://example.com/carts/{}/items/A", Uuid::now_v7()))
            .json(&json!({}))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

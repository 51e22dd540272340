//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use pantry::{
    cart::CartState,
    products::{Product, ProductCode},
};
use pantry_app::{
    carts::{CartSession, CartUuid, MockCartsService},
    catalog::MockCatalogService,
    context::AppContext,
};
use salvo::{affix_state::inject, prelude::*};
use testresult::TestResult;

use crate::state::State;

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list().never();
    catalog.expect_search().never();
    catalog.expect_by_category().never();
    catalog.expect_by_barcode().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_dispatch().never();

    carts
}

fn state(catalog: MockCatalogService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
    })
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(catalog, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_catalog_mock(), carts)))
            .push(route),
    )
}

pub(crate) fn make_product(code: &str) -> TestResult<Product> {
    Ok(Product::new(ProductCode::new(code)?).with_name(format!("Product {code}")))
}

pub(crate) fn make_session(uuid: CartUuid, state: CartState) -> CartSession {
    CartSession {
        uuid,
        state,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

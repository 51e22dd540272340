//! App Router

use salvo::Router;

use crate::{carts, catalog};

/// Catalog and cart routes, without the operational endpoints.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("api")
                .push(Router::with_path("products").get(catalog::index::handler))
                .push(Router::with_path("search").get(catalog::search::handler))
                .push(Router::with_path("categories").get(catalog::categories::handler))
                .push(Router::with_path("category/{category}").get(catalog::category::handler))
                .push(Router::with_path("product/{barcode}").get(catalog::product::handler)),
        )
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("open").post(carts::visibility::open))
                        .push(Router::with_path("close").post(carts::visibility::close))
                        .push(Router::with_path("toggle").post(carts::visibility::toggle))
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .delete(carts::items::clear::handler)
                                .push(
                                    Router::with_path("{code}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
}

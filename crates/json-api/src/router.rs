//! App Router

use salvo::Router;

use crate::{auth, healthcheck, orders, products, stats, users};

/// Every API route. Catalog reads, registration and login are public;
/// everything else sits behind the bearer token middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::register::handler))
                .push(Router::with_path("login").post(auth::login::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("auth/me").get(auth::me::handler))
                .push(
                    Router::with_path("users")
                        .get(users::index::handler)
                        .push(Router::with_path("{user}").get(users::get::handler)),
                )
                .push(
                    Router::with_path("products")
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .post(orders::create::handler)
                        .push(
                            Router::with_path("{order}")
                                .get(orders::get::handler)
                                .push(
                                    Router::with_path("status").put(orders::update_status::handler),
                                ),
                        ),
                )
                .push(Router::with_path("stats/dashboard").get(stats::dashboard::handler)),
        )
}

//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    carts, headers, healthcheck,
    observability::{self, Metrics},
    state::State,
};

/// Every route the service answers, with its middleware.
pub(crate) fn app_router(state: Arc<State>, metrics: Arc<Metrics>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(metrics))
        .hoop(inject(state))
        .hoop(observability::request_logging)
        .hoop(headers::open_origin_headers)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("cart/{id}")
                .get(carts::get::handler)
                .delete(carts::delete::handler),
        )
        .push(Router::with_path("rename/{from}/{to}").get(carts::rename::handler))
        .push(Router::with_path("add/{id}/{sku}/{qty}").get(carts::add::handler))
        .push(Router::with_path("update/{id}/{sku}/{qty}").get(carts::update::handler))
        .push(Router::with_path("shipping/{id}").post(carts::shipping::handler))
}

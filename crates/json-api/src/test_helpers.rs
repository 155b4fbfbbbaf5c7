//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use trolley_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, LineItem},
    },
    store::MockCartStore,
};

use crate::state::State;

fn strict_store_mock() -> MockCartStore {
    let mut store = MockCartStore::new();

    store.expect_get().never();
    store.expect_set().never();
    store.expect_del().never();
    store.expect_ping().never();

    store
}

pub(crate) fn state_with(carts: MockCartsService, store: MockCartStore) -> Arc<State> {
    State::from_app_context(AppContext {
        carts: Arc::new(carts),
        store: Arc::new(store),
    })
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(carts, strict_store_mock())))
            .push(route),
    )
}

/// Cart holding two `TEE1` at 10.0.
pub(crate) fn make_cart() -> Cart {
    let mut cart = Cart::new();

    cart.add_item(LineItem::new("TEE1", "Tee", 2, 10.0));

    cart
}

//! Trolley Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"OK"` while the process serves requests
    pub app: String,

    /// Whether the cart store answered a ping
    pub redis: bool,
}

/// Healthcheck handler
///
/// Reports liveness and whether the cart store is reachable.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        app: "OK".to_owned(),
        redis: state.app.store.ping().await,
    }))
}

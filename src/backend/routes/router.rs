/**
 * Router Configuration
 *
 * This module combines the route groups into the application router and
 * applies the outer layers.
 *
 * # Layers
 *
 * From the outside in:
 * 1. `TraceLayer` - one span per request
 * 2. `CatchPanicLayer` - a panic in a handler becomes a logged 500 response
 *    and the connection task survives
 *
 * Unknown paths fall through to `route_not_found`.
 */

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::backend::error::{route_not_found, BackendError};
use crate::backend::routes::api_routes::configure_auth_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_chat_routes(router);

    with_outer_layers(router.fallback(route_not_found)).with_state(app_state)
}

/// Apply the tracing and panic-recovery layers
pub fn with_outer_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    BackendError::internal("server error", detail).into_response()
}

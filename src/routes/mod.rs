//! Application router: route table, fallbacks and the middleware stack.

mod category;
pub use category::category_routes;

use crate::handlers::route_not_found;
use crate::middleware::require_api_key;
use crate::response::error_body;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Full router. The API key check wraps every route and the 404 fallback.
pub fn app_router(state: AppState) -> Router {
    category_routes()
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(DefaultBodyLimit::max(BODY_LIMIT))
                .layer(from_fn_with_state(state.clone(), require_api_key)),
        )
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".into());
    tracing::error!(panic = %detail, "handler panicked");
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    error_body(status, serde_json::Value::String("Internal Server Error".into())).into_response()
}

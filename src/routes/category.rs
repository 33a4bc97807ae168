//! Category route table.

use crate::handlers::category::{create, delete, find_all, find_by_id, method_not_allowed, update};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// POST/GET `/api/categories` and GET/PUT/DELETE `/api/categories/:id`.
/// Other methods on these paths answer 405 in the envelope.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/categories",
            post(create).get(find_all).fallback(method_not_allowed),
        )
        .route(
            "/api/categories/:id",
            get(find_by_id)
                .put(update)
                .delete(delete)
                .fallback(method_not_allowed),
        )
}

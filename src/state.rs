//! Shared application state for all routes.

use crate::service::CategoryService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryService>,
    /// Shared secret every request must present in `X-API-KEY`.
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryService>, api_key: impl Into<Arc<str>>) -> Self {
        AppState {
            categories,
            api_key: api_key.into(),
        }
    }
}

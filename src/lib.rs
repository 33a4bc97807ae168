//! Category API: CRUD REST service over a PostgreSQL `category` table, guarded by a static API key.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::{AppConfig, PoolConfig};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_category_table, ensure_database_exists};
pub use model::{Category, CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest, NewCategory};
pub use repository::CategoryRepository;
pub use response::{error_body, success, WebResponse};
pub use routes::{app_router, category_routes};
pub use service::{CategoryService, PgCategoryService, RequestValidator};
pub use state::AppState;

//! Category service: validation, transaction boundary, domain/DTO translation.

mod category;
mod validation;
pub use category::{CategoryService, PgCategoryService};
pub use validation::{RequestValidator, Validate, ValidationRule, NAME_MAX_LENGTH};

//! Request validation from per-field rule tables.

use crate::error::AppError;
use crate::model::{CategoryCreateRequest, CategoryUpdateRequest};

/// Maximum length of a category name, in characters.
pub const NAME_MAX_LENGTH: usize = 200;

#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

const NAME_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: None,
    max_length: Some(NAME_MAX_LENGTH),
};

/// Implemented by request DTOs: yields `(field, value, rule)` for every checked field.
pub trait Validate {
    fn fields(&self) -> Vec<(&'static str, &str, ValidationRule)>;
}

impl Validate for CategoryCreateRequest {
    fn fields(&self) -> Vec<(&'static str, &str, ValidationRule)> {
        vec![("name", self.name.as_str(), NAME_RULE)]
    }
}

impl Validate for CategoryUpdateRequest {
    fn fields(&self) -> Vec<(&'static str, &str, ValidationRule)> {
        vec![("name", self.name.as_str(), NAME_RULE)]
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate every field of the request; the first violation is returned.
    pub fn validate<T: Validate>(request: &T) -> Result<(), AppError> {
        for (field, value, rule) in request.fields() {
            validate_field(field, value, &rule)?;
        }
        Ok(())
    }
}

fn validate_field(field: &str, value: &str, rule: &ValidationRule) -> Result<(), AppError> {
    let len = value.chars().count();
    if rule.required && len == 0 {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
    }
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(AppError::Validation(format!(
                "{} must be at least {} characters",
                field, min
            )));
        }
    }
    Ok(())
}

//! Category handlers: create, update, delete, find by id, list, plus route fallbacks.

use crate::error::AppError;
use crate::model::{CategoryCreateRequest, CategoryUpdateRequest};
use crate::response::success;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryCreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let category = state.categories.create(request).await?;
    Ok(success(category))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CategoryUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let category = state.categories.update(id, request).await?;
    Ok(success(category))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    state.categories.delete(id).await?;
    Ok(success(()))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let category = state.categories.find_by_id(id).await?;
    Ok(success(category))
}

pub async fn find_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = state.categories.find_all().await?;
    Ok(success(categories))
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".into())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

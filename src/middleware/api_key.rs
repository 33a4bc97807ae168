//! Static API key check on the `X-API-KEY` header.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Extractor for the optional API key header. Empty values count as absent.
#[derive(Clone, Debug)]
pub struct ApiKey(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(ApiKey(value))
    }
}

/// Rejects the request with 401 before routing unless the header equals the configured key.
pub async fn require_api_key(
    State(state): State<AppState>,
    ApiKey(offered): ApiKey,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if offered.as_deref() != Some(state.api_key.as_ref()) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            present = offered.is_some(),
            "rejected request with invalid API key"
        );
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}

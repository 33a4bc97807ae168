//! Standard response envelope: every response is `{code, status, data}`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        WebResponse {
            code: status.as_u16(),
            status: status_text(status),
            data,
        }
    }
}

/// Upper-cased canonical reason, e.g. `404` -> `"NOT FOUND"`.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_uppercase)
        .unwrap_or_else(|| status.as_str().to_string())
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<WebResponse<T>>) {
    (StatusCode::OK, Json(WebResponse::new(StatusCode::OK, data)))
}

pub fn error_body(
    status: StatusCode,
    data: serde_json::Value,
) -> (StatusCode, Json<WebResponse<serde_json::Value>>) {
    (status, Json(WebResponse::new(status, data)))
}

//! Request guards applied in front of the router.

pub mod api_key;
pub use api_key::{require_api_key, ApiKey, API_KEY_HEADER};

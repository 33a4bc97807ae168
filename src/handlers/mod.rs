//! HTTP handlers: request decoding and envelope encoding only.

pub mod category;
pub use category::*;

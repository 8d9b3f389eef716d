//! HTTP inbound adapter exposing the search endpoint.

pub mod auth;
pub mod error;
pub mod search;
pub mod state;

pub use error::{ApiResult, SearchApiError};

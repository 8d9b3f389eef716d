//! Driving port for evaluating user searches against the record store.
//!
//! The HTTP adapter depends on this port only, so handlers stay testable
//! with a mock and never see the snapshot directly.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{SearchQuery, User};

define_port_error! {
    /// Errors surfaced while evaluating a search.
    pub enum SearchQueryError {
        /// The order field is not one the evaluator sorts by.
        BadOrderField { order_field: String } =>
            "bad order field: {order_field}",
        /// A query parameter is missing or not a valid value.
        InvalidParameter { name: String, message: String } =>
            "invalid {name} parameter: {message}",
    }
}

/// Domain use-case port for searching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearchQuery: Send + Sync {
    /// Filter, sort and paginate the record store.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<User>, SearchQueryError>;
}

//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the search port and stay testable without the record store.

use std::sync::Arc;

use crate::domain::ports::UserSearchQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub search: Arc<dyn UserSearchQuery>,
}

impl HttpState {
    pub fn new(search: Arc<dyn UserSearchQuery>) -> Self {
        Self { search }
    }
}

//! In-memory implementation of the search query port.

use async_trait::async_trait;
use tracing::debug;

use super::{SearchQuery, evaluate};
use crate::domain::ports::{SearchQueryError, UserSearchQuery};
use crate::domain::{User, UserRecords};

/// Search service backed by an immutable record snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryUserSearch {
    records: UserRecords,
}

impl InMemoryUserSearch {
    pub fn new(records: UserRecords) -> Self {
        Self { records }
    }
}

#[async_trait]
impl UserSearchQuery for InMemoryUserSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<User>, SearchQueryError> {
        let users = evaluate(&self.records, query)?;
        debug!(
            query = %query.text,
            order_field = %query.order_field,
            returned = users.len(),
            "search evaluated"
        );
        Ok(users)
    }
}

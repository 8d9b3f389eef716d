//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_search_query;
mod user_search_source;

#[cfg(test)]
pub use user_search_query::MockUserSearchQuery;
pub use user_search_query::{SearchQueryError, UserSearchQuery};
pub use user_search_source::{UserSearchError, UserSearchSource};

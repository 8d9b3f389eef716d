//! Domain primitives, search semantics and ports.
//!
//! Purpose: define the user model, the caller-facing search request and
//! response, the evaluator that executes searches over the record store, and
//! the wire error contract shared by both sides of the endpoint.
//!
//! Public surface:
//! - User, UserRecord, UserRecords: user projection, stored row, snapshot.
//! - SearchRequest, SearchResponse, OrderBy: client request/response.
//! - SearchQuery, OrderField, evaluate: server-side evaluation.
//! - SearchErrorResponse, SearchErrorTag: 400 body codec.

pub mod ports;
pub mod search_error;
pub mod search_request;
pub mod user;
pub mod user_search;

pub use self::search_error::{ACCESS_TOKEN_HEADER, SearchErrorResponse, SearchErrorTag};
pub use self::search_request::{MAX_PAGE_SIZE, OrderBy, PagePlan, SearchRequest, SearchResponse};
pub use self::user::{Gender, User, UserRecord, UserRecords, UserValidationError};
pub use self::user_search::{InMemoryUserSearch, OrderField, SearchQuery, evaluate};

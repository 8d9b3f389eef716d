//! User search service: endpoint, evaluator and typed client.
//!
//! - [`domain`] holds the user model, the search contract and the evaluator.
//! - [`inbound::http`] exposes the evaluator as `GET /api/v1/users/search`.
//! - [`outbound`] loads the record store and implements the HTTP client.

pub mod domain;
pub mod inbound;
pub mod outbound;

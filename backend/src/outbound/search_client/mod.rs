//! HTTP client for the user search endpoint.
//!
//! This module provides the reqwest implementation of the
//! `UserSearchSource` port plus its layered configuration.

mod config;
mod dto;
mod http_source;

pub use config::{SearchClientBuildError, SearchClientSettings};
pub use http_source::HttpUserSearchClient;

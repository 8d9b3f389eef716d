//! Inbound adapters exposing the search endpoint.

pub mod http;

//! Driven port for calling a remote user search endpoint.
//!
//! The domain owns the request shape and the error taxonomy so callers can
//! branch on failure categories without knowing the transport.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{SearchRequest, SearchResponse};

define_port_error! {
    /// Errors surfaced by [`UserSearchSource::find_users`].
    pub enum UserSearchError {
        /// Request rejected locally; no call was made.
        InvalidLimit => "limit must be non-negative",
        /// Request rejected locally; no call was made.
        InvalidOffset => "offset must be non-negative",
        /// The server refused the access token (401).
        BadAccessToken => "bad access token",
        /// The server does not sort by the requested field (400 with the
        /// bad-order-field tag).
        BadOrderField { order_field: String } =>
            "order field invalid: {order_field}",
        /// The server rejected the request for a reason this client does not
        /// recognise, or sent an undecodable 400 body.
        UnknownBadRequest { message: String } =>
            "unknown bad request error: {message}",
        /// The server reported an internal fault (500).
        ServerFatal => "search server fatal error",
        /// Any other non-200 status.
        UnknownStatus { status: u16 } =>
            "unknown status code: {status}",
        /// No response was received: connection, DNS, scheme or body failure.
        Transport { message: String } =>
            "unknown error: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "timeout: {message}",
        /// A 200 response whose body is not a JSON user array.
        Decode { message: String } =>
            "cannot unpack result JSON: {message}",
    }
}

impl UserSearchError {
    /// Return whether the request was rejected before any network call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidLimit | Self::InvalidOffset)
    }

    /// Return whether the call failed at the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for searching users on a remote endpoint.
#[async_trait]
pub trait UserSearchSource: Send + Sync {
    /// Fetch one page of users matching `request`.
    ///
    /// Performs at most one outbound call and never retries.
    async fn find_users(&self, request: &SearchRequest)
    -> Result<SearchResponse, UserSearchError>;
}

//! Reqwest-backed user search client.
//!
//! This adapter owns transport details only: query-string serialisation,
//! the access token header, timeout and HTTP status mapping, and JSON
//! decoding. Validation, clamping and lookahead live in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::SearchParamsDto;
use crate::domain::ports::{UserSearchError, UserSearchSource};
use crate::domain::{
    ACCESS_TOKEN_HEADER, SearchErrorResponse, SearchErrorTag, SearchRequest, SearchResponse, User,
};

/// Search client that performs HTTP GET requests against one endpoint.
///
/// Holds only immutable configuration, so one instance can be shared by
/// concurrent callers.
#[derive(Clone)]
pub struct HttpUserSearchClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl std::fmt::Debug for HttpUserSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUserSearchClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpUserSearchClient {
    /// Build a client with an explicit per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: access_token.into(),
        })
    }

    /// Configured endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_page(&self, request: &SearchRequest) -> Result<SearchResponse, UserSearchError> {
        let plan = request.page_plan()?;
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&SearchParamsDto::new(request, &plan))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "user search responded");
        match status {
            StatusCode::OK => {
                let body = response.bytes().await.map_err(map_transport_error)?;
                let users = parse_users(body.as_ref())?;
                Ok(SearchResponse::from_lookahead(users, plan.limit()))
            }
            StatusCode::BAD_REQUEST => {
                let body = response.bytes().await.map_err(map_transport_error)?;
                Err(map_bad_request(body.as_ref(), &request.order_field))
            }
            other => Err(map_status_error(other)),
        }
    }
}

#[async_trait]
impl UserSearchSource for HttpUserSearchClient {
    async fn find_users(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, UserSearchError> {
        self.fetch_page(request).await.inspect_err(|error| {
            warn!(endpoint = %self.endpoint, error = %error, "user search failed");
        })
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserSearchError> {
    serde_json::from_slice(body).map_err(|error| UserSearchError::decode(error.to_string()))
}

fn map_bad_request(body: &[u8], order_field: &str) -> UserSearchError {
    match serde_json::from_slice::<SearchErrorResponse>(body) {
        Ok(SearchErrorResponse {
            error: SearchErrorTag::BadOrderField,
        }) => UserSearchError::bad_order_field(order_field),
        Ok(SearchErrorResponse {
            error: SearchErrorTag::Unknown(tag),
        }) => UserSearchError::unknown_bad_request(tag),
        Err(error) => UserSearchError::unknown_bad_request(format!(
            "cannot unpack error JSON: {error}"
        )),
    }
}

fn map_status_error(status: StatusCode) -> UserSearchError {
    match status {
        StatusCode::UNAUTHORIZED => UserSearchError::bad_access_token(),
        StatusCode::INTERNAL_SERVER_ERROR => UserSearchError::server_fatal(),
        other => UserSearchError::unknown_status(other.as_u16()),
    }
}

fn map_transport_error(error: reqwest::Error) -> UserSearchError {
    if error.is_timeout() {
        UserSearchError::timeout(error.to_string())
    } else {
        UserSearchError::transport(error.to_string())
    }
}

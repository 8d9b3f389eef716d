//! HTTP adapter mapping for search failures.
//!
//! A bad order field is the only failure with a symbolic body
//! (`{"Error":"ErrorBadOrderField"}`, status 400). Missing credentials map
//! to a plain 401. Every other evaluator fault is an opaque 500: the detail
//! is logged, never sent.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

use crate::domain::ports::SearchQueryError;
use crate::domain::{SearchErrorResponse, SearchErrorTag};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, SearchApiError>;

/// Failures returned by the search handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchApiError {
    #[error("missing access token")]
    Unauthorized,
    #[error(transparent)]
    Query(#[from] SearchQueryError),
}

impl ResponseError for SearchApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Query(SearchQueryError::BadOrderField { .. }) => StatusCode::BAD_REQUEST,
            Self::Query(SearchQueryError::InvalidParameter { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Unauthorized => builder.body("Unauthorized"),
            Self::Query(SearchQueryError::BadOrderField { .. }) => {
                builder.json(SearchErrorResponse::new(SearchErrorTag::BadOrderField))
            }
            Self::Query(err @ SearchQueryError::InvalidParameter { .. }) => {
                error!(error = %err, "search request failed");
                builder.body("Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_of(error: SearchApiError) -> (StatusCode, String) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn bad_order_field_maps_to_tagged_400() {
        let (status, body) = body_of(SearchQueryError::bad_order_field("Height").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"Error":"ErrorBadOrderField"}"#);
    }

    #[rstest]
    #[actix_web::test]
    async fn unauthorized_maps_to_401() {
        let (status, _) = body_of(SearchApiError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn invalid_parameters_are_redacted_500s() {
        let (status, body) =
            body_of(SearchQueryError::invalid_parameter("limit", "'abc': invalid digit").into())
                .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("abc"), "detail must not leak: {body}");
    }
}

//! Access token gate for the search endpoint.
//!
//! Only presence is checked: any non-empty `AccessToken` header is accepted.

use actix_web::HttpRequest;

use super::{ApiResult, SearchApiError};
use crate::domain::ACCESS_TOKEN_HEADER;

pub fn require_access_token(request: &HttpRequest) -> ApiResult<()> {
    match request.headers().get(ACCESS_TOKEN_HEADER) {
        Some(value) if !value.as_bytes().is_empty() => Ok(()),
        _ => Err(SearchApiError::Unauthorized),
    }
}

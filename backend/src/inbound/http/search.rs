//! User search handler.
//!
//! ```text
//! GET /api/v1/users/search?limit=26&offset=0&query=Hilda&order_field=Id&order_by=1
//! AccessToken: <token>
//! ```
//!
//! The access token is checked before the query string is even parsed.
//! `limit`, `offset` and `order_by` are required integers; a missing or
//! malformed value is an internal fault (500). `query` and `order_field`
//! default to the empty string.

use std::fmt::Display;
use std::str::FromStr;

use actix_web::{HttpRequest, get, web};
use serde::Deserialize;

use super::ApiResult;
use super::auth::require_access_token;
use super::state::HttpState;
use crate::domain::ports::SearchQueryError;
use crate::domain::{OrderBy, SearchQuery, User};

/// Raw query parameters; typed parsing happens in [`SearchParams::into_query`].
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    limit: Option<String>,
    offset: Option<String>,
    query: Option<String>,
    order_field: Option<String>,
    order_by: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> Result<SearchQuery, SearchQueryError> {
        Ok(SearchQuery {
            limit: parse_param("limit", self.limit.as_deref())?,
            offset: parse_param("offset", self.offset.as_deref())?,
            order_by: OrderBy::from_code(parse_param("order_by", self.order_by.as_deref())?),
            text: self.query.unwrap_or_default(),
            order_field: self.order_field.unwrap_or_default(),
        })
    }
}

fn parse_param<T>(name: &str, raw: Option<&str>) -> Result<T, SearchQueryError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw.unwrap_or_default();
    raw.parse()
        .map_err(|err| SearchQueryError::invalid_parameter(name, format!("'{raw}': {err}")))
}

/// Search users by display name with ordering and pagination.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_search::inbound::http::search::search_users;
///
/// let app = App::new().service(search_users);
/// ```
#[get("/users/search")]
pub async fn search_users(
    request: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<User>>> {
    require_access_token(&request)?;
    let params = web::Query::<SearchParams>::from_query(request.query_string())
        .map_err(|err| SearchQueryError::invalid_parameter("query string", err.to_string()))?
        .into_inner();
    let query = params.into_query()?;
    let users = state.search.search(&query).await?;
    Ok(web::Json(users))
}

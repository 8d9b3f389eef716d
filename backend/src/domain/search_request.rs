//! Caller-facing search request and paginated response.
//!
//! Requests are validated and clamped locally before any network call.
//! Pagination uses one record of lookahead: the client asks for
//! `limit + 1` records and infers the continuation flag from the count, so
//! no separate total-count query is needed.

use crate::domain::User;
use crate::domain::ports::UserSearchError;

/// Largest page the client will request.
pub const MAX_PAGE_SIZE: usize = 25;

/// Requested sort direction.
///
/// The wire carries an integer code. [`OrderBy::from_code`] maps any code
/// other than `1` and `-1` to [`OrderBy::Unordered`], so servers never
/// reject an unfamiliar direction; they simply keep filter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Ascending,
    Descending,
    #[default]
    Unordered,
}

impl OrderBy {
    /// Integer code sent in the `order_by` query parameter.
    pub const fn code(self) -> i64 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
            Self::Unordered => 0,
        }
    }

    /// Decode a wire code; unrecognised codes mean no reordering.
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Ascending,
            -1 => Self::Descending,
            _ => Self::Unordered,
        }
    }
}

/// One search call as constructed by the caller.
///
/// `limit == 0` means no explicit cap on the evaluator side; the client
/// still applies lookahead, so such a call returns an empty page whose
/// `next_page` flag reports whether any match exists past `offset`.
///
/// # Examples
/// ```
/// use user_search::domain::{OrderBy, SearchRequest};
///
/// let request = SearchRequest {
///     limit: 40,
///     query: "Hilda".into(),
///     order_field: "Id".into(),
///     order_by: OrderBy::Ascending,
///     ..SearchRequest::default()
/// };
/// let plan = request.page_plan().expect("valid request");
/// assert_eq!(plan.limit(), 25);
/// assert_eq!(plan.lookahead_limit(), 26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    /// Desired page size; negative is invalid.
    pub limit: i64,
    /// Number of matches to skip; negative is invalid.
    pub offset: i64,
    /// Substring to match; empty matches everything.
    pub query: String,
    /// Sort key as sent on the wire (`Id`, `Name`, `Age`, or empty).
    pub order_field: String,
    pub order_by: OrderBy,
}

/// Validated page bounds derived from a [`SearchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    limit: usize,
    offset: u64,
}

impl PagePlan {
    /// Page size after clamping to [`MAX_PAGE_SIZE`].
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Page size requested from the server: one past [`PagePlan::limit`].
    pub fn lookahead_limit(&self) -> usize {
        self.limit + 1
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl SearchRequest {
    /// Validate page bounds and clamp the limit.
    ///
    /// # Errors
    /// Returns [`UserSearchError::InvalidLimit`] for a negative limit (checked
    /// first) and [`UserSearchError::InvalidOffset`] for a negative offset.
    pub fn page_plan(&self) -> Result<PagePlan, UserSearchError> {
        if self.limit < 0 {
            return Err(UserSearchError::invalid_limit());
        }
        let Ok(offset) = u64::try_from(self.offset) else {
            return Err(UserSearchError::invalid_offset());
        };
        let limit =
            usize::try_from(self.limit).map_or(MAX_PAGE_SIZE, |limit| limit.min(MAX_PAGE_SIZE));
        Ok(PagePlan { limit, offset })
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// True iff more matches exist after this page.
    pub next_page: bool,
}

impl SearchResponse {
    /// Interpret a lookahead fetch of up to `limit + 1` users.
    ///
    /// Exactly `limit + 1` users means another page exists; the extra user is
    /// dropped. Any other count is returned unchanged.
    pub fn from_lookahead(mut users: Vec<User>, limit: usize) -> Self {
        if users.len() == limit + 1 {
            users.truncate(limit);
            Self {
                users,
                next_page: true,
            }
        } else {
            Self {
                users,
                next_page: false,
            }
        }
    }
}

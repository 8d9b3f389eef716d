//! Wire contract for search failures.
//!
//! A rejected query carries a single symbolic tag in a 400 body:
//! `{"Error": "ErrorBadOrderField"}`. Tags form a closed vocabulary; a tag
//! this build does not know decodes to [`SearchErrorTag::Unknown`] instead
//! of failing, so newer servers can add tags without breaking clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request header carrying the caller's access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

const BAD_ORDER_FIELD_TAG: &str = "ErrorBadOrderField";

/// Symbolic error tag carried in a search error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchErrorTag {
    /// The requested order field is not one the evaluator sorts by.
    BadOrderField,
    /// A tag outside the known vocabulary, preserved verbatim.
    Unknown(String),
}

impl SearchErrorTag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::BadOrderField => BAD_ORDER_FIELD_TAG,
            Self::Unknown(tag) => tag.as_str(),
        }
    }
}

impl From<String> for SearchErrorTag {
    fn from(value: String) -> Self {
        match value.as_str() {
            BAD_ORDER_FIELD_TAG => Self::BadOrderField,
            _ => Self::Unknown(value),
        }
    }
}

impl From<SearchErrorTag> for String {
    fn from(value: SearchErrorTag) -> Self {
        match value {
            SearchErrorTag::BadOrderField => BAD_ORDER_FIELD_TAG.to_owned(),
            SearchErrorTag::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for SearchErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a 400 search response.
///
/// # Examples
/// ```
/// use user_search::domain::{SearchErrorResponse, SearchErrorTag};
///
/// let body: SearchErrorResponse =
///     serde_json::from_str(r#"{"Error":"ErrorBadOrderField"}"#).expect("decode");
/// assert_eq!(body.error, SearchErrorTag::BadOrderField);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: SearchErrorTag,
}

impl SearchErrorResponse {
    pub fn new(error: SearchErrorTag) -> Self {
        Self { error }
    }
}

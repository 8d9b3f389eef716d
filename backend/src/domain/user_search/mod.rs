//! Server-side search evaluation over the record store.
//!
//! Evaluation runs in three steps:
//! 1. Filter: keep records whose display name contains the query text
//!    (case-sensitive; empty text keeps everything). Only the display name
//!    is matched, never the other record fields.
//! 2. Order: validate the order field, then stable-sort when a direction is
//!    requested. Ties keep record store order.
//! 3. Paginate: clamp the offset to the match count and take at most
//!    `limit` records, or all remaining ones when `limit` is zero.

mod service;

pub use service::InMemoryUserSearch;

use std::cmp::Ordering;

use crate::domain::ports::SearchQueryError;
use crate::domain::{OrderBy, User, UserRecords};

/// Sort keys the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Name,
    Age,
}

impl OrderField {
    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Age => "Age",
        }
    }

    /// Parse a wire field name; the empty string selects [`OrderField::Name`].
    ///
    /// # Errors
    /// Returns [`SearchQueryError::BadOrderField`] for any other value.
    pub fn parse(raw: &str) -> Result<Self, SearchQueryError> {
        match raw {
            "Id" => Ok(Self::Id),
            "Name" | "" => Ok(Self::Name),
            "Age" => Ok(Self::Age),
            other => Err(SearchQueryError::bad_order_field(other)),
        }
    }

    fn comparator(self) -> fn(&User, &User) -> Ordering {
        match self {
            Self::Id => |a, b| a.id().cmp(&b.id()),
            Self::Name => |a, b| a.name().cmp(b.name()),
            Self::Age => |a, b| a.age().cmp(&b.age()),
        }
    }
}

/// Parsed evaluator input, as decoded from the endpoint's query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub text: String,
    /// Raw order field; validated during evaluation.
    pub order_field: String,
    pub order_by: OrderBy,
    /// Maximum page size; zero returns every remaining match.
    pub limit: usize,
    pub offset: usize,
}

/// Filter, sort and paginate `records` for `query`.
///
/// The record store is only read.
///
/// # Errors
/// Returns [`SearchQueryError::BadOrderField`] when the order field is not
/// recognised; no sorting or pagination happens in that case.
///
/// # Examples
/// ```
/// use user_search::domain::{
///     evaluate, Gender, OrderBy, SearchQuery, UserRecord, UserRecords,
/// };
///
/// let records = UserRecords::new(vec![
///     UserRecord::new(2, "Hilda", "Mayer", 21, "", Gender::Female),
///     UserRecord::new(1, "Boyd", "Wolf", 22, "", Gender::Male),
/// ]);
/// let query = SearchQuery {
///     order_field: "Id".into(),
///     order_by: OrderBy::Ascending,
///     ..SearchQuery::default()
/// };
/// let users = evaluate(&records, &query).expect("valid query");
/// assert_eq!(users[0].name(), "Boyd Wolf");
/// ```
pub fn evaluate(records: &UserRecords, query: &SearchQuery) -> Result<Vec<User>, SearchQueryError> {
    let mut matched: Vec<User> = records
        .iter()
        .filter(|record| query.text.is_empty() || record.display_name().contains(&query.text))
        .map(|record| record.to_user())
        .collect();

    let field = OrderField::parse(&query.order_field)?;
    sort_users(&mut matched, field, query.order_by);

    Ok(paginate(matched, query.offset, query.limit))
}

fn sort_users(users: &mut [User], field: OrderField, order_by: OrderBy) {
    let compare = field.comparator();
    match order_by {
        // `sort_by` is stable, so equal keys keep filter order both ways.
        OrderBy::Ascending => users.sort_by(compare),
        OrderBy::Descending => users.sort_by(|a, b| compare(b, a)),
        OrderBy::Unordered => {}
    }
}

fn paginate(users: Vec<User>, offset: usize, limit: usize) -> Vec<User> {
    let offset = offset.min(users.len());
    let remaining = users.len() - offset;
    let take = if limit == 0 {
        remaining
    } else {
        limit.min(remaining)
    };
    users.into_iter().skip(offset).take(take).collect()
}

//! Query-string DTO for search requests.

use serde::Serialize;

use crate::domain::{PagePlan, SearchRequest};

/// Query parameters sent with every search call.
///
/// `limit` is the lookahead limit, one past the page size.
#[derive(Debug, Serialize)]
pub(super) struct SearchParamsDto<'a> {
    limit: usize,
    offset: u64,
    query: &'a str,
    order_field: &'a str,
    order_by: i64,
}

impl<'a> SearchParamsDto<'a> {
    pub(super) fn new(request: &'a SearchRequest, plan: &PagePlan) -> Self {
        Self {
            limit: plan.lookahead_limit(),
            offset: plan.offset(),
            query: request.query.as_str(),
            order_field: request.order_field.as_str(),
            order_by: request.order_by.code(),
        }
    }
}

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use cardfolio_core::domain::listing::value_objects::QueryParams;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of a request with every value of repeated keys kept.
///
/// ```rust,ignore
/// async fn handler(QueryParamsExtractor(params): QueryParamsExtractor) {
///     let tags = params.get("tags");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryParamsExtractor(pairs.into_iter().collect()))
    }
}

/// Query parameters understood by every list endpoint. Any other key filters
/// on the document field of that name, e.g. `status=pending` or
/// `createdAt[gte]=2025-01-01`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Comma-separated fields to return, e.g. `name,email`
    pub select: Option<String>,
    /// Comma-separated sort fields, `-` prefix for descending
    pub sort: Option<String>,
    /// 1-based page number
    pub page: Option<u64>,
    /// Page size
    pub limit: Option<u64>,
    /// Case-insensitive text matched against the searchable fields
    pub search: Option<String>,
}

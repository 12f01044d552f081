use axum::Extension;
use cardfolio_core::domain::listing::value_objects::ResultEnvelope;

use crate::application::http::{
    query_extractor::ListQuery,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "card",
    summary = "List cards",
    description = "Lists business cards. `search` matches name, title, company, email and tags. Filters use the field name as key with an optional operator, e.g. `tags[in]=design,rust` or `createdAt[gte]=2025-01-01`.",
    params(ListQuery),
    responses(
        (status = 200, body = ResultEnvelope),
        (status = 400, body = ApiErrorResponse),
    )
)]
pub async fn get_cards(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}

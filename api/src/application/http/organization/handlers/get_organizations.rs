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
    tag = "organization",
    summary = "List organizations",
    description = "Lists organizations, searchable by name and description, with their owner's name and email.",
    params(ListQuery),
    responses(
        (status = 200, body = ResultEnvelope),
        (status = 400, body = ApiErrorResponse),
    )
)]
pub async fn get_organizations(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}

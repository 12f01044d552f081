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
    tag = "user",
    summary = "List users",
    description = "Lists users with filtering, search on name and email, sorting, field selection and pagination. Each user's organization is populated with its name.",
    params(ListQuery),
    responses(
        (status = 200, body = ResultEnvelope),
        (status = 400, body = ApiErrorResponse),
    )
)]
pub async fn get_users(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}

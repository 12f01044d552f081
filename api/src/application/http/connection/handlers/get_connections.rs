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
    tag = "connection",
    summary = "List connections",
    description = "Lists connection requests, e.g. `status=pending&recipient=<user id>`. Requester and recipient are populated with name and email.",
    params(ListQuery),
    responses(
        (status = 200, body = ResultEnvelope),
        (status = 400, body = ApiErrorResponse),
    )
)]
pub async fn get_connections(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}

use axum::extract::{Path, State};
use cardfolio_core::domain::{
    document::entities::Document, organization::ports::OrganizationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrganizationResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Document,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "organization",
    summary = "Get organization",
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
    ),
    responses(
        (status = 200, body = GetOrganizationResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn get_organization(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetOrganizationResponse>, ApiError> {
    let organization = state
        .service
        .get_organization(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOrganizationResponse {
        success: true,
        data: organization,
    }))
}

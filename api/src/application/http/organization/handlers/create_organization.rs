use axum::extract::State;
use cardfolio_core::domain::organization::{
    entities::Organization, ports::OrganizationService, value_objects::CreateOrganizationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    organization::validators::CreateOrganizationValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateOrganizationResponse {
    pub success: bool,
    pub data: Organization,
}

#[utoipa::path(
    post,
    path = "",
    tag = "organization",
    summary = "Create organization",
    description = "Creates an organization owned by an existing user.",
    request_body = CreateOrganizationValidator,
    responses(
        (status = 201, body = CreateOrganizationResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    )
)]
pub async fn create_organization(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateOrganizationValidator>,
) -> Result<Response<CreateOrganizationResponse>, ApiError> {
    let organization = state
        .service
        .create_organization(CreateOrganizationInput {
            name: payload.name,
            description: payload.description,
            website: payload.website,
            owner: payload.owner,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateOrganizationResponse {
        success: true,
        data: organization,
    }))
}

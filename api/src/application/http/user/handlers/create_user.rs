use axum::extract::State;
use cardfolio_core::domain::user::{
    entities::User, ports::UserService, value_objects::CreateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::CreateUserValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    description = "Registers a user. Emails are unique regardless of case.",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = CreateUserResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<CreateUserResponse>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            name: payload.name,
            email: payload.email,
            role: payload.role,
            organization: payload.organization,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateUserResponse {
        success: true,
        data: user,
    }))
}

use axum::extract::State;
use cardfolio_core::domain::connection::{
    entities::Connection, ports::ConnectionService, value_objects::CreateConnectionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    connection::validators::CreateConnectionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateConnectionResponse {
    pub success: bool,
    pub data: Connection,
}

#[utoipa::path(
    post,
    path = "",
    tag = "connection",
    summary = "Request connection",
    description = "Opens a pending connection between two users. Only one connection may exist per pair of users.",
    request_body = CreateConnectionValidator,
    responses(
        (status = 201, body = CreateConnectionResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    )
)]
pub async fn create_connection(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateConnectionValidator>,
) -> Result<Response<CreateConnectionResponse>, ApiError> {
    let connection = state
        .service
        .create_connection(CreateConnectionInput {
            requester: payload.requester,
            recipient: payload.recipient,
            message: payload.message,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateConnectionResponse {
        success: true,
        data: connection,
    }))
}

use axum::extract::{Path, State};
use cardfolio_core::domain::{connection::ports::ConnectionService, document::entities::Document};
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
pub struct GetConnectionResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Document,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "connection",
    summary = "Get connection",
    params(
        ("id" = Uuid, Path, description = "Connection ID"),
    ),
    responses(
        (status = 200, body = GetConnectionResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn get_connection(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetConnectionResponse>, ApiError> {
    let connection = state
        .service
        .get_connection(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConnectionResponse {
        success: true,
        data: connection,
    }))
}

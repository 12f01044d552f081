use axum::extract::{Path, State};
use cardfolio_core::domain::{document::entities::Document, user::ports::UserService};
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
pub struct GetUserResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Document,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "user",
    summary = "Get user",
    params(
        ("id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetUserResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn get_user(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state.service.get_user(id).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse {
        success: true,
        data: user,
    }))
}

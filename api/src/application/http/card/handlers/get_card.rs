use axum::extract::{Path, State};
use cardfolio_core::domain::{card::ports::CardService, document::entities::Document};
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
pub struct GetCardResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Document,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "card",
    summary = "Get card",
    description = "Retrieves one card with its owner and organization populated.",
    params(
        ("id" = Uuid, Path, description = "Card ID"),
    ),
    responses(
        (status = 200, body = GetCardResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn get_card(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCardResponse>, ApiError> {
    let card = state.service.get_card(id).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetCardResponse {
        success: true,
        data: card,
    }))
}

use axum::extract::State;
use cardfolio_core::domain::card::{
    entities::Card, ports::CardService, value_objects::CreateCardInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    card::validators::CreateCardValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCardResponse {
    pub success: bool,
    pub data: Card,
}

#[utoipa::path(
    post,
    path = "",
    tag = "card",
    summary = "Create card",
    description = "Creates a card for an existing user, optionally under one of the organizations.",
    request_body = CreateCardValidator,
    responses(
        (status = 201, body = CreateCardResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    )
)]
pub async fn create_card(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCardValidator>,
) -> Result<Response<CreateCardResponse>, ApiError> {
    let card = state
        .service
        .create_card(CreateCardInput {
            owner: payload.owner,
            organization: payload.organization,
            name: payload.name,
            title: payload.title,
            company: payload.company,
            email: payload.email,
            phone: payload.phone,
            website: payload.website,
            address: payload.address,
            tags: payload.tags,
            is_public: payload.is_public,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCardResponse {
        success: true,
        data: card,
    }))
}

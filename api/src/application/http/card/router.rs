use super::handlers::create_card::{__path_create_card, create_card};
use super::handlers::get_card::{__path_get_card, get_card};
use super::handlers::get_cards::{__path_get_cards, get_cards};
use crate::application::{
    http::server::app_state::AppState,
    listing_middleware::{advanced_results, listing},
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use cardfolio_core::domain::card::{CARDS, list_options};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_cards, get_card, create_card))]
pub struct CardApiDoc;

pub fn card_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/cards", state.args.server.root_path),
            get(get_cards).layer(middleware::from_fn_with_state(
                listing(&state, &CARDS, list_options()),
                advanced_results,
            )),
        )
        .route(
            &format!("{}/cards", state.args.server.root_path),
            post(create_card),
        )
        .route(
            &format!("{}/cards/{{id}}", state.args.server.root_path),
            get(get_card),
        )
}

use super::handlers::create_connection::{__path_create_connection, create_connection};
use super::handlers::get_connection::{__path_get_connection, get_connection};
use super::handlers::get_connections::{__path_get_connections, get_connections};
use crate::application::{
    http::server::app_state::AppState,
    listing_middleware::{advanced_results, listing},
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use cardfolio_core::domain::connection::{CONNECTIONS, list_options};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_connections, get_connection, create_connection))]
pub struct ConnectionApiDoc;

pub fn connection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/connections", state.args.server.root_path),
            get(get_connections).layer(middleware::from_fn_with_state(
                listing(&state, &CONNECTIONS, list_options()),
                advanced_results,
            )),
        )
        .route(
            &format!("{}/connections", state.args.server.root_path),
            post(create_connection),
        )
        .route(
            &format!("{}/connections/{{id}}", state.args.server.root_path),
            get(get_connection),
        )
}

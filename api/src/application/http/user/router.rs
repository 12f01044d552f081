use super::handlers::create_user::{__path_create_user, create_user};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_users::{__path_get_users, get_users};
use crate::application::{
    http::server::app_state::AppState,
    listing_middleware::{advanced_results, listing},
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use cardfolio_core::domain::user::{USERS, list_options};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, create_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            get(get_users).layer(middleware::from_fn_with_state(
                listing(&state, &USERS, list_options()),
                advanced_results,
            )),
        )
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(create_user),
        )
        .route(
            &format!("{}/users/{{id}}", state.args.server.root_path),
            get(get_user),
        )
}

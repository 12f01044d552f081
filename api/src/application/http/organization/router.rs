use super::handlers::create_organization::{__path_create_organization, create_organization};
use super::handlers::get_organization::{__path_get_organization, get_organization};
use super::handlers::get_organizations::{__path_get_organizations, get_organizations};
use crate::application::{
    http::server::app_state::AppState,
    listing_middleware::{advanced_results, listing},
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use cardfolio_core::domain::organization::{ORGANIZATIONS, list_options};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_organizations, get_organization, create_organization))]
pub struct OrganizationApiDoc;

pub fn organization_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/organizations", state.args.server.root_path),
            get(get_organizations).layer(middleware::from_fn_with_state(
                listing(&state, &ORGANIZATIONS, list_options()),
                advanced_results,
            )),
        )
        .route(
            &format!("{}/organizations", state.args.server.root_path),
            post(create_organization),
        )
        .route(
            &format!("{}/organizations/{{id}}", state.args.server.root_path),
            get(get_organization),
        )
}

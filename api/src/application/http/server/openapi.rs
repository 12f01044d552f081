use crate::application::http::{
    card::router::CardApiDoc, connection::router::ConnectionApiDoc, health::HealthApiDoc,
    organization::router::OrganizationApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cardfolio API"
    ),
    nest(
        (path = "/users", api = UserApiDoc),
        (path = "/organizations", api = OrganizationApiDoc),
        (path = "/cards", api = CardApiDoc),
        (path = "/connections", api = ConnectionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationValidator {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "description is limited to 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,

    pub owner: Uuid,
}

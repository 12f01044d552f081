use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_is_public() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardValidator {
    pub owner: Uuid,

    #[serde(default)]
    pub organization: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub company: Option<String>,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "a card holds at most 20 tags"))]
    pub tags: Vec<String>,

    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

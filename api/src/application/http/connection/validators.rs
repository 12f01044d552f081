use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionValidator {
    pub requester: Uuid,

    pub recipient: Uuid,

    #[serde(default)]
    #[validate(length(max = 500, message = "message is limited to 500 characters"))]
    pub message: Option<String>,
}

use cardfolio_core::domain::user::entities::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserValidator {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub role: Option<UserRole>,

    #[serde(default)]
    pub organization: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_malformed_email() {
        let payload: CreateUserValidator =
            serde_json::from_value(json!({ "name": "Ada", "email": "not-an-email" })).unwrap();

        let errors = payload.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn role_and_organization_are_optional() {
        let payload: CreateUserValidator =
            serde_json::from_value(json!({ "name": "Ada", "email": "ada@example.com" })).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.role, None);
        assert_eq!(payload.organization, None);
    }
}

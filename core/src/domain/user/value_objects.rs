use uuid::Uuid;

use super::entities::UserRole;

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub organization: Option<Uuid>,
}

use uuid::Uuid;

pub struct CreateOrganizationInput {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub owner: Uuid,
}

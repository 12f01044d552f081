use uuid::Uuid;

pub struct CreateCardInput {
    pub owner: Uuid,
    pub organization: Option<Uuid>,
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
}

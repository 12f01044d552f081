use uuid::Uuid;

pub struct CreateConnectionInput {
    pub requester: Uuid,
    pub recipient: Uuid,
    pub message: Option<String>,
}

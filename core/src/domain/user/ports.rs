use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::entities::Document,
    user::{entities::User, value_objects::CreateUserInput},
};

pub trait UserService: Send + Sync {
    /// The stored user with its organization populated.
    fn get_user(&self, id: Uuid) -> impl Future<Output = Result<Document, CoreError>> + Send;

    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

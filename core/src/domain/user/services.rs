use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    document::{
        entities::{Document, into_document},
        ports::DocumentRepository,
        value_objects::{FieldCondition, Filter},
    },
    organization::ORGANIZATIONS,
    user::{
        USERS,
        entities::User,
        list_options,
        ports::UserService,
        value_objects::CreateUserInput,
    },
};

impl<D> UserService for Service<D>
where
    D: DocumentRepository,
{
    async fn get_user(&self, id: Uuid) -> Result<Document, CoreError> {
        self.document_repository
            .find_by_id(&USERS, id, list_options().populate)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        if let Some(organization) = input.organization {
            self.ensure_reference(&ORGANIZATIONS, organization).await?;
        }

        let user = User::new(
            input.name.trim().to_string(),
            input.email.trim().to_lowercase(),
            input.role.unwrap_or_default(),
            input.organization,
        );
        let email_taken = Filter::new().with(FieldCondition::equals("email", &user.email));

        self.document_repository
            .insert_unique(&USERS, into_document(&user)?, vec![email_taken])
            .await
            .map_err(|e| match e {
                CoreError::Conflict(_) => {
                    CoreError::Conflict(format!("email {} is already registered", user.email))
                }
                other => other,
            })?;
        info!(user_id = %user.id, "User created");

        Ok(user)
    }
}

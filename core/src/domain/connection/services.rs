use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    connection::{
        CONNECTIONS, entities::Connection, list_options, ports::ConnectionService,
        value_objects::CreateConnectionInput,
    },
    document::{
        entities::{Document, into_document},
        ports::DocumentRepository,
        value_objects::{FieldCondition, Filter},
    },
    user::USERS,
};

fn between(requester: Uuid, recipient: Uuid) -> Filter {
    Filter::new()
        .with(FieldCondition::equals("requester", requester.to_string()))
        .with(FieldCondition::equals("recipient", recipient.to_string()))
}

impl<D> ConnectionService for Service<D>
where
    D: DocumentRepository,
{
    async fn get_connection(&self, id: Uuid) -> Result<Document, CoreError> {
        self.document_repository
            .find_by_id(&CONNECTIONS, id, list_options().populate)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_connection(
        &self,
        input: CreateConnectionInput,
    ) -> Result<Connection, CoreError> {
        if input.requester == input.recipient {
            return Err(CoreError::InvalidInput(
                "a user cannot connect with themselves".to_string(),
            ));
        }

        self.ensure_reference(&USERS, input.requester).await?;
        self.ensure_reference(&USERS, input.recipient).await?;

        let connection = Connection::new(input.requester, input.recipient, input.message);
        let existing_pair = vec![
            between(connection.requester, connection.recipient),
            between(connection.recipient, connection.requester),
        ];

        self.document_repository
            .insert_unique(&CONNECTIONS, into_document(&connection)?, existing_pair)
            .await
            .map_err(|e| match e {
                CoreError::Conflict(_) => {
                    CoreError::Conflict("these users already have a connection".to_string())
                }
                other => other,
            })?;
        info!(connection_id = %connection.id, "Connection requested");

        Ok(connection)
    }
}

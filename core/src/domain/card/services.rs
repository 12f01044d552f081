use tracing::info;
use uuid::Uuid;

use crate::domain::{
    card::{
        CARDS, entities::Card, list_options, ports::CardService, value_objects::CreateCardInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    document::{
        entities::{Document, into_document},
        ports::DocumentRepository,
    },
    organization::ORGANIZATIONS,
    user::USERS,
};

impl<D> CardService for Service<D>
where
    D: DocumentRepository,
{
    async fn get_card(&self, id: Uuid) -> Result<Document, CoreError> {
        self.document_repository
            .find_by_id(&CARDS, id, list_options().populate)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_card(&self, input: CreateCardInput) -> Result<Card, CoreError> {
        self.ensure_reference(&USERS, input.owner).await?;
        if let Some(organization) = input.organization {
            self.ensure_reference(&ORGANIZATIONS, organization).await?;
        }

        let card = Card::new(input);

        self.document_repository
            .insert(&CARDS, into_document(&card)?)
            .await?;
        info!(card_id = %card.id, owner = %card.owner, "Card created");

        Ok(card)
    }
}

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    document::{
        entities::{Document, into_document},
        ports::DocumentRepository,
    },
    organization::{
        ORGANIZATIONS, entities::Organization, list_options, ports::OrganizationService,
        value_objects::CreateOrganizationInput,
    },
    user::USERS,
};

impl<D> OrganizationService for Service<D>
where
    D: DocumentRepository,
{
    async fn get_organization(&self, id: Uuid) -> Result<Document, CoreError> {
        self.document_repository
            .find_by_id(&ORGANIZATIONS, id, list_options().populate)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_organization(
        &self,
        input: CreateOrganizationInput,
    ) -> Result<Organization, CoreError> {
        self.ensure_reference(&USERS, input.owner).await?;

        let organization = Organization::new(
            input.name.trim().to_string(),
            input.description,
            input.website,
            input.owner,
        );

        self.document_repository
            .insert(&ORGANIZATIONS, into_document(&organization)?)
            .await?;
        info!(organization_id = %organization.id, "Organization created");

        Ok(organization)
    }
}

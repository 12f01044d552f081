use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::entities::Document,
    organization::{entities::Organization, value_objects::CreateOrganizationInput},
};

pub trait OrganizationService: Send + Sync {
    fn get_organization(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Document, CoreError>> + Send;

    fn create_organization(
        &self,
        input: CreateOrganizationInput,
    ) -> impl Future<Output = Result<Organization, CoreError>> + Send;
}

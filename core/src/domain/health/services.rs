use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    document::ports::DocumentRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
};

impl<D> HealthCheckService for Service<D>
where
    D: DocumentRepository + HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.document_repository.health().await
    }
}

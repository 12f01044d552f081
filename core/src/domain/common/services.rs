use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{entities::Collection, ports::DocumentRepository},
};

pub struct Service<D> {
    pub(crate) document_repository: Arc<D>,
}

impl<D> Clone for Service<D> {
    fn clone(&self) -> Self {
        Self {
            document_repository: Arc::clone(&self.document_repository),
        }
    }
}

impl<D> Service<D> {
    pub fn new(document_repository: D) -> Self {
        Self {
            document_repository: Arc::new(document_repository),
        }
    }
}

impl<D> Service<D>
where
    D: DocumentRepository,
{
    /// Fails with `InvalidReference` unless `id` names a document of `collection`.
    pub(crate) async fn ensure_reference(
        &self,
        collection: &'static Collection,
        id: Uuid,
    ) -> Result<(), CoreError> {
        self.document_repository
            .find_by_id(collection, id, Vec::new())
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                CoreError::InvalidReference(format!("{} {id} does not exist", collection.name))
            })
    }
}

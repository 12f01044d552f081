use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        entities::{Collection, Document},
        ports::DocumentRepository,
        value_objects::{Filter, FindQuery, PopulateSpec},
    },
    health::ports::HealthCheckRepository,
};
use crate::infrastructure::document::{InMemoryDocumentRepository, PostgresDocumentRepository};

/// The document backend selected at startup.
#[derive(Debug, Clone)]
pub enum DocumentStore {
    Postgres(PostgresDocumentRepository),
    Memory(InMemoryDocumentRepository),
}

impl DocumentRepository for DocumentStore {
    async fn find(
        &self,
        collection: &'static Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => repository.find(collection, query).await,
            DocumentStore::Memory(repository) => repository.find(collection, query).await,
        }
    }

    async fn count(
        &self,
        collection: &'static Collection,
        filter: Filter,
    ) -> Result<u64, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => repository.count(collection, filter).await,
            DocumentStore::Memory(repository) => repository.count(collection, filter).await,
        }
    }

    async fn find_by_id(
        &self,
        collection: &'static Collection,
        id: Uuid,
        populate: Vec<PopulateSpec>,
    ) -> Result<Option<Document>, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => {
                repository.find_by_id(collection, id, populate).await
            }
            DocumentStore::Memory(repository) => {
                repository.find_by_id(collection, id, populate).await
            }
        }
    }

    async fn insert(
        &self,
        collection: &'static Collection,
        document: Document,
    ) -> Result<Document, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => repository.insert(collection, document).await,
            DocumentStore::Memory(repository) => repository.insert(collection, document).await,
        }
    }

    async fn insert_unique(
        &self,
        collection: &'static Collection,
        document: Document,
        conflicts: Vec<Filter>,
    ) -> Result<Document, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => {
                repository.insert_unique(collection, document, conflicts).await
            }
            DocumentStore::Memory(repository) => {
                repository.insert_unique(collection, document, conflicts).await
            }
        }
    }
}

impl HealthCheckRepository for DocumentStore {
    async fn health(&self) -> Result<u64, CoreError> {
        match self {
            DocumentStore::Postgres(repository) => repository.health().await,
            DocumentStore::Memory(repository) => repository.health().await,
        }
    }
}

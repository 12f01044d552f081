use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        entities::{Collection, Document, document_id},
        ports::DocumentRepository,
        value_objects::{Filter, FindQuery, PopulateSpec, Projection},
    },
    health::ports::HealthCheckRepository,
};
use crate::infrastructure::document::{
    matcher::{compare_documents, matches},
    populate,
};

type Collections = HashMap<&'static str, Vec<Document>>;

/// Process-local document store, kept in insertion order per collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks and appends under one write lock.
    async fn push(
        &self,
        collection: &'static Collection,
        document: Document,
        conflicts: &[Filter],
    ) -> Result<Document, CoreError> {
        let Some(id) = document_id(&document) else {
            error!("Failed to insert document: missing id");
            return Err(CoreError::InternalServerError);
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.name).or_default();

        if documents.iter().any(|existing| document_id(existing) == Some(id)) {
            return Err(CoreError::Conflict(format!(
                "{} {id} already exists",
                collection.name
            )));
        }
        if documents
            .iter()
            .any(|existing| conflicts.iter().any(|filter| matches(filter, existing)))
        {
            return Err(CoreError::Conflict(format!(
                "{} already holds a conflicting document",
                collection.name
            )));
        }

        documents.push(document.clone());
        Ok(document)
    }
}

fn find_in(collections: &Collections, collection: &Collection, id: Uuid) -> Option<Document> {
    collections
        .get(collection.name)?
        .iter()
        .find(|document| document_id(document) == Some(id))
        .cloned()
}

fn populate_from(
    collections: &Collections,
    collection: &'static Collection,
    specs: &[PopulateSpec],
    documents: &mut [Document],
) {
    for (spec, reference) in populate::resolve(collection, specs) {
        let related = populate::referenced_ids(documents, spec.path())
            .into_iter()
            .filter_map(|id| find_in(collections, reference.collection, id))
            .collect();
        populate::substitute(documents, spec, reference, related);
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    async fn find(
        &self,
        collection: &'static Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, CoreError> {
        let collections = self.collections.read().await;

        let mut documents: Vec<&Document> = collections
            .get(collection.name)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(&query.filter, document))
                    .collect()
            })
            .unwrap_or_default();
        documents.sort_by(|a, b| compare_documents(a, b, &query.sort));

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        let mut page: Vec<Document> = documents
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|document| populate::shape(collection, &query.projection, document.clone()))
            .collect();

        populate_from(&collections, collection, &query.populate, &mut page);

        Ok(page)
    }

    async fn count(
        &self,
        collection: &'static Collection,
        filter: Filter,
    ) -> Result<u64, CoreError> {
        let collections = self.collections.read().await;

        let count = collections
            .get(collection.name)
            .map(|documents| documents.iter().filter(|d| matches(&filter, d)).count())
            .unwrap_or(0);

        Ok(count as u64)
    }

    async fn find_by_id(
        &self,
        collection: &'static Collection,
        id: Uuid,
        populate: Vec<PopulateSpec>,
    ) -> Result<Option<Document>, CoreError> {
        let collections = self.collections.read().await;

        let Some(document) = find_in(&collections, collection, id) else {
            return Ok(None);
        };

        let mut found = [populate::shape(collection, &Projection::default(), document)];
        populate_from(&collections, collection, &populate, &mut found);
        let [document] = found;

        Ok(Some(document))
    }

    async fn insert(
        &self,
        collection: &'static Collection,
        document: Document,
    ) -> Result<Document, CoreError> {
        self.push(collection, document, &[]).await
    }

    async fn insert_unique(
        &self,
        collection: &'static Collection,
        document: Document,
        conflicts: Vec<Filter>,
    ) -> Result<Document, CoreError> {
        self.push(collection, document, &conflicts).await
    }
}

impl HealthCheckRepository for InMemoryDocumentRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }
}

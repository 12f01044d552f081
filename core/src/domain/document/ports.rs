use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        entities::{Collection, Document},
        value_objects::{Filter, FindQuery, PopulateSpec},
    },
};

/// Storage-layer access to document collections
#[cfg_attr(test, mockall::automock)]
pub trait DocumentRepository: Send + Sync {
    /// Documents matching the query, sorted, windowed, projected and populated.
    /// Hidden fields of the collection are never returned.
    fn find(
        &self,
        collection: &'static Collection,
        query: FindQuery,
    ) -> impl Future<Output = Result<Vec<Document>, CoreError>> + Send;

    /// Number of documents matching the filter, regardless of any window.
    fn count(
        &self,
        collection: &'static Collection,
        filter: Filter,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_by_id(
        &self,
        collection: &'static Collection,
        id: Uuid,
        populate: Vec<PopulateSpec>,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    /// Stores a document that already carries its `id` field.
    fn insert(
        &self,
        collection: &'static Collection,
        document: Document,
    ) -> impl Future<Output = Result<Document, CoreError>> + Send;

    /// Stores a document unless the collection already holds one matching any
    /// of `conflicts`, in which case it fails with `Conflict`. The check and
    /// the write are atomic with respect to other writers of the collection.
    fn insert_unique(
        &self,
        collection: &'static Collection,
        document: Document,
        conflicts: Vec<Filter>,
    ) -> impl Future<Output = Result<Document, CoreError>> + Send;
}

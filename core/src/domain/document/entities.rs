use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub type Document = Map<String, Value>;

pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "createdAt";

/// A document collection and the storage conventions attached to it.
pub struct Collection {
    pub name: &'static str,
    /// Never returned to callers, whatever the projection asks for.
    pub hidden_fields: &'static [&'static str],
    /// Fields holding ids of documents in another collection.
    pub references: &'static [Reference],
}

pub struct Reference {
    pub path: &'static str,
    pub collection: &'static Collection,
}

impl Collection {
    pub fn reference(&self, path: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.path == path)
    }

    pub fn strip_hidden(&self, document: &mut Document) {
        for field in self.hidden_fields {
            document.remove(*field);
        }
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("hidden_fields", &self.hidden_fields)
            .field("references", &self.references)
            .finish()
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("path", &self.path)
            .field("collection", &self.collection.name)
            .finish()
    }
}

/// Resolves a dotted path (`address.city`) inside a document.
pub fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

pub fn document_id(document: &Document) -> Option<Uuid> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

pub fn into_document<T: Serialize>(entity: &T) -> Result<Document, CoreError> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CoreError::InvalidInput(
            "entity does not serialize to an object".to_string(),
        )),
        Err(e) => {
            tracing::error!("Failed to serialize document: {}", e);
            Err(CoreError::InternalServerError)
        }
    }
}

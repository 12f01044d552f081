//! Replacement of reference ids with the documents they name.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::domain::document::{
    entities::{Collection, Document, Reference, document_id},
    value_objects::{PopulateSpec, Projection},
};

/// Pairs each populate entry with the reference it expands. Entries naming a
/// path the collection does not reference are dropped with a warning.
pub fn resolve<'a>(
    collection: &'static Collection,
    specs: &'a [PopulateSpec],
) -> Vec<(&'a PopulateSpec, &'static Reference)> {
    specs
        .iter()
        .filter_map(|spec| match collection.reference(spec.path()) {
            Some(reference) => Some((spec, reference)),
            None => {
                warn!(
                    collection = collection.name,
                    path = spec.path(),
                    "Ignoring populate path without a reference"
                );
                None
            }
        })
        .collect()
}

/// Distinct ids stored under `path`, whether it holds one id or a list.
pub fn referenced_ids(documents: &[Document], path: &str) -> Vec<Uuid> {
    let mut ids = Vec::new();
    for document in documents {
        let raw: Vec<&Value> = match document.get(path) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(value) => vec![value],
            None => continue,
        };
        for id in raw.into_iter().filter_map(parse_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Swaps the ids under `spec.path()` for the matching `related` documents,
/// shaped by the target collection's hidden fields and the entry's own
/// selection. A single id with no match becomes `null`; unmatched ids inside
/// a list are dropped.
pub fn substitute(
    documents: &mut [Document],
    spec: &PopulateSpec,
    reference: &Reference,
    related: Vec<Document>,
) {
    let projection = spec.projection();
    let related: HashMap<Uuid, Document> = related
        .into_iter()
        .filter_map(|document| {
            let id = document_id(&document)?;
            Some((id, shape(reference.collection, &projection, document)))
        })
        .collect();

    let expand = |value: &Value| {
        parse_id(value)
            .and_then(|id| related.get(&id))
            .map(|document| Value::Object(document.clone()))
    };

    for document in documents.iter_mut() {
        match document.get_mut(spec.path()) {
            Some(Value::Array(items)) => {
                *items = items.iter().filter_map(expand).collect();
            }
            Some(value @ Value::String(_)) => {
                *value = expand(value).unwrap_or(Value::Null);
            }
            _ => {}
        }
    }
}

/// Removes hidden fields, then applies the projection.
pub fn shape(collection: &Collection, projection: &Projection, mut document: Document) -> Document {
    collection.strip_hidden(&mut document);
    projection.apply(&mut document);
    document
}

fn parse_id(value: &Value) -> Option<Uuid> {
    value.as_str().and_then(|raw| Uuid::parse_str(raw).ok())
}

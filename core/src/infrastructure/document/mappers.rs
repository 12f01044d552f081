use serde_json::Value;

use crate::domain::document::entities::{Document, ID_FIELD};
use crate::entity::documents::Model as DocumentModel;

impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Self {
        let mut document = match model.data {
            Value::Object(map) => map,
            _ => Document::new(),
        };
        document
            .entry(ID_FIELD)
            .or_insert_with(|| Value::String(model.id.to_string()));
        document
    }
}

pub mod mappers;
pub mod matcher;
pub mod populate;
pub mod repositories;
pub mod sql;
pub mod store;

pub use repositories::{
    in_memory_document_repository::InMemoryDocumentRepository,
    postgres_document_repository::PostgresDocumentRepository,
};
pub use store::DocumentStore;

pub mod in_memory_document_repository;
pub mod postgres_document_repository;

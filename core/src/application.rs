use tracing::{error, info};

use crate::{
    domain::common::{
        CardfolioConfig, StorageBackend, entities::app_errors::CoreError, services::Service,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        document::{DocumentStore, InMemoryDocumentRepository, PostgresDocumentRepository},
    },
};

pub type CardfolioService = Service<DocumentStore>;

pub async fn create_service(config: CardfolioConfig) -> Result<CardfolioService, CoreError> {
    let store = match config.storage {
        StorageBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.url(),
            })
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                CoreError::ServiceUnavailable(e.to_string())
            })?;

            DocumentStore::Postgres(PostgresDocumentRepository::new(postgres.get_db()))
        }
        StorageBackend::Memory => {
            info!("Using in-memory document store");
            DocumentStore::Memory(InMemoryDocumentRepository::new())
        }
    };

    Ok(Service::new(store))
}

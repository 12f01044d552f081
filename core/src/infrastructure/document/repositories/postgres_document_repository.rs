use std::time::Instant;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, Statement, TransactionTrait,
};
use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        entities::{CREATED_AT_FIELD, Collection, Document, document_id},
        ports::DocumentRepository,
        value_objects::{Filter, FindQuery, PopulateSpec, Projection},
    },
    health::ports::HealthCheckRepository,
};
use crate::entity::documents::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
};
use crate::infrastructure::document::{populate, sql};

fn active_model(
    collection: &Collection,
    document: Document,
) -> Result<DocumentActiveModel, CoreError> {
    let Some(id) = document_id(&document) else {
        error!("Failed to insert document: missing id");
        return Err(CoreError::InternalServerError);
    };

    let created_at = document
        .get(CREATED_AT_FIELD)
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .unwrap_or_else(|| Utc::now().fixed_offset());

    Ok(DocumentActiveModel {
        id: Set(id),
        collection: Set(collection.name.to_string()),
        data: Set(Value::Object(document)),
        created_at: Set(created_at),
    })
}

fn conflict(collection: &Collection) -> CoreError {
    CoreError::Conflict(format!(
        "{} already holds a conflicting document",
        collection.name
    ))
}

/// Unique index violations become `Conflict`, anything else is logged.
fn insert_error(collection: &Collection, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        warn!("Unique constraint rejected insert into {}: {}", collection.name, detail);
        return conflict(collection);
    }
    error!("Failed to insert document into {}: {}", collection.name, e);
    CoreError::InternalServerError
}

fn transaction_error(e: DbErr) -> CoreError {
    error!("Failed to run insert transaction: {}", e);
    CoreError::InternalServerError
}

#[derive(Debug, Clone)]
pub struct PostgresDocumentRepository {
    pub db: DatabaseConnection,
}

impl PostgresDocumentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_by_ids(
        &self,
        collection: &Collection,
        ids: Vec<Uuid>,
    ) -> Result<Vec<Document>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let documents = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.name))
            .filter(DocumentColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch referenced documents: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Document::from)
            .collect();

        Ok(documents)
    }

    async fn populate(
        &self,
        collection: &'static Collection,
        specs: &[PopulateSpec],
        documents: &mut [Document],
    ) -> Result<(), CoreError> {
        for (spec, reference) in populate::resolve(collection, specs) {
            let ids = populate::referenced_ids(documents, spec.path());
            let related = self.fetch_by_ids(reference.collection, ids).await?;
            populate::substitute(documents, spec, reference, related);
        }
        Ok(())
    }
}

impl DocumentRepository for PostgresDocumentRepository {
    async fn find(
        &self,
        collection: &'static Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, CoreError> {
        let mut select = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.name))
            .filter(sql::filter_condition(&query.filter));

        for (expr, order) in sql::order_by(&query.sort) {
            select = select.order_by(expr, order);
        }
        select = select
            .order_by_asc(DocumentColumn::CreatedAt)
            .order_by_asc(DocumentColumn::Id)
            .offset(query.skip.min(i64::MAX as u64));

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let mut documents: Vec<Document> = select
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find documents in {}: {}", collection.name, e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|model| populate::shape(collection, &query.projection, Document::from(model)))
            .collect();

        self.populate(collection, &query.populate, &mut documents).await?;

        Ok(documents)
    }

    async fn count(
        &self,
        collection: &'static Collection,
        filter: Filter,
    ) -> Result<u64, CoreError> {
        DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.name))
            .filter(sql::filter_condition(&filter))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count documents in {}: {}", collection.name, e);
                CoreError::InternalServerError
            })
    }

    async fn find_by_id(
        &self,
        collection: &'static Collection,
        id: Uuid,
        populate: Vec<PopulateSpec>,
    ) -> Result<Option<Document>, CoreError> {
        let model = DocumentEntity::find_by_id(id)
            .filter(DocumentColumn::Collection.eq(collection.name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get document by id: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut found = [populate::shape(
            collection,
            &Projection::default(),
            Document::from(model),
        )];
        self.populate(collection, &populate, &mut found).await?;
        let [document] = found;

        Ok(Some(document))
    }

    async fn insert(
        &self,
        collection: &'static Collection,
        document: Document,
    ) -> Result<Document, CoreError> {
        let model = active_model(collection, document)?;

        DocumentEntity::insert(model)
            .exec_with_returning(&self.db)
            .await
            .map(Document::from)
            .map_err(|e| insert_error(collection, e))
    }

    async fn insert_unique(
        &self,
        collection: &'static Collection,
        document: Document,
        conflicts: Vec<Filter>,
    ) -> Result<Document, CoreError> {
        let model = active_model(collection, document)?;
        let txn = self.db.begin().await.map_err(transaction_error)?;

        // Held until commit or rollback, one lock per collection
        txn.execute(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT pg_advisory_xact_lock(hashtext($1))",
            [collection.name.into()],
        ))
        .await
        .map_err(transaction_error)?;

        for filter in &conflicts {
            let existing = DocumentEntity::find()
                .filter(DocumentColumn::Collection.eq(collection.name))
                .filter(sql::filter_condition(filter))
                .count(&txn)
                .await
                .map_err(transaction_error)?;

            if existing > 0 {
                return Err(conflict(collection));
            }
        }

        let created = DocumentEntity::insert(model)
            .exec_with_returning(&txn)
            .await
            .map(Document::from)
            .map_err(|e| insert_error(collection, e))?;

        txn.commit().await.map_err(transaction_error)?;

        Ok(created)
    }
}

impl HealthCheckRepository for PostgresDocumentRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db.ping().await.map_err(|e| {
            error!("Failed to ping database: {}", e);
            CoreError::ServiceUnavailable(e.to_string())
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        document::value_objects::{FieldCondition, SearchPredicate, SortParams},
        user::USERS,
    };
    use crate::infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        document::InMemoryDocumentRepository,
    };

    static PEOPLE: Collection = Collection {
        name: "people_parity",
        hidden_fields: &[],
        references: &[],
    };

    async fn database() -> Option<DatabaseConnection> {
        let database_url = std::env::var("DATABASE_URL").ok()?;
        let postgres = Postgres::new(PostgresConfig { database_url }).await.unwrap();
        Some(postgres.get_db())
    }

    fn people() -> Vec<Document> {
        [
            json!({ "name": "Ada", "age": 36, "tags": ["math", "logic"], "active": true, "address": { "city": "London" } }),
            json!({ "name": "bob", "age": "41", "tags": ["sales"], "active": false, "address": { "city": "Paris" } }),
            json!({ "name": "Carol", "age": 19.5, "tags": [], "active": "true", "address": { "city": "Paris" } }),
            json!({ "name": null, "age": null, "tags": "math", "active": true }),
            json!({ "name": "Dave", "age": 36, "tags": ["Math", 3] }),
            json!({ "name": "Éva", "age": 25, "address": "Paris" }),
            json!({ "age": 3, "tags": ["logic"], "active": false }),
        ]
        .into_iter()
        .enumerate()
        .map(|(n, mut value)| {
            value["id"] = json!(Uuid::now_v7().to_string());
            value["createdAt"] = json!(format!("2025-01-01T00:00:{n:02}Z"));
            value.as_object().cloned().unwrap()
        })
        .collect()
    }

    fn ids(documents: Vec<Document>) -> Vec<String> {
        documents
            .into_iter()
            .map(|document| document["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn condition(key: &str, value: &str) -> Filter {
        Filter::new().with(FieldCondition::parse(key, vec![value.to_string()]).unwrap())
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database in DATABASE_URL"]
    async fn postgres_and_memory_agree_on_filters_and_sorts() {
        let Some(db) = database().await else {
            return;
        };
        DocumentEntity::delete_many()
            .filter(DocumentColumn::Collection.eq(PEOPLE.name))
            .exec(&db)
            .await
            .unwrap();

        let postgres = PostgresDocumentRepository::new(db);
        let memory = InMemoryDocumentRepository::new();
        for person in people() {
            postgres.insert(&PEOPLE, person.clone()).await.unwrap();
            memory.insert(&PEOPLE, person).await.unwrap();
        }

        let search = Filter {
            search: SearchPredicate::new(&["name".to_string(), "tags".to_string()], "A"),
            ..Filter::new()
        };
        let filters = [
            condition("age[ne]", "36"),
            condition("age[gt]", "20"),
            condition("age[lte]", "19.5"),
            condition("tags", "math"),
            condition("tags", "3"),
            condition("tags[nin]", "math,sales"),
            condition("tags[in]", "logic,sales"),
            condition("active", "true"),
            condition("active[ne]", "false"),
            condition("address.city", "Paris"),
            condition("name[gte]", "a"),
            condition("name", "null"),
            search,
        ];
        for filter in filters {
            let query = FindQuery {
                filter: filter.clone(),
                ..FindQuery::default()
            };
            assert_eq!(
                ids(postgres.find(&PEOPLE, query.clone()).await.unwrap()),
                ids(memory.find(&PEOPLE, query).await.unwrap()),
                "filter {filter:?}"
            );
            assert_eq!(
                postgres.count(&PEOPLE, filter.clone()).await,
                memory.count(&PEOPLE, filter).await
            );
        }

        for sort in ["age", "-age", "name", "-name", "tags", "active,-age"] {
            let query = FindQuery {
                sort: SortParams::from_string(sort),
                ..FindQuery::default()
            };
            assert_eq!(
                ids(postgres.find(&PEOPLE, query.clone()).await.unwrap()),
                ids(memory.find(&PEOPLE, query).await.unwrap()),
                "sort {sort}"
            );
        }
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database in DATABASE_URL"]
    async fn unique_index_rejects_a_second_email() {
        let Some(db) = database().await else {
            return;
        };
        let repository = PostgresDocumentRepository::new(db);
        let email = format!("{}@example.com", Uuid::now_v7());
        let user = || {
            json!({ "id": Uuid::now_v7().to_string(), "name": "Ada", "email": email })
                .as_object()
                .cloned()
                .unwrap()
        };

        repository.insert(&USERS, user()).await.unwrap();
        let duplicate = repository.insert(&USERS, user()).await;
        let guarded = repository
            .insert_unique(
                &USERS,
                user(),
                vec![Filter::new().with(FieldCondition::equals("email", &email))],
            )
            .await;

        assert!(matches!(duplicate, Err(CoreError::Conflict(_))));
        assert!(matches!(guarded, Err(CoreError::Conflict(_))));
    }
}

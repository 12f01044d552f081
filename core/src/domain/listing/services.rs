use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::Collection, ports::DocumentRepository},
    listing::{
        ports::ListingService,
        value_objects::{ListOptions, ListRequest, QueryParams, ResultEnvelope},
    },
};

impl<D> ListingService for Service<D>
where
    D: DocumentRepository,
{
    #[instrument(skip(self, options, params), fields(collection = collection.name))]
    async fn list_documents(
        &self,
        collection: &'static Collection,
        options: &ListOptions,
        params: &QueryParams,
    ) -> Result<ResultEnvelope, CoreError> {
        let ListRequest { query, window } = ListRequest::parse(params, options)?;
        let filter = query.filter.clone();

        // Two independent reads; the pair is not snapshot-consistent.
        let (total_matching, documents) = futures::try_join!(
            self.document_repository.count(collection, filter),
            self.document_repository.find(collection, query),
        )?;

        debug!(
            total_matching,
            page = window.page,
            limit = window.limit,
            returned = documents.len(),
            "Listed documents"
        );

        Ok(ResultEnvelope::new(
            documents,
            window.pagination(total_matching),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        domain::{
            document::{
                entities::{Document, Reference},
                ports::MockDocumentRepository,
                value_objects::PopulateSpec,
            },
            listing::value_objects::{PageLink, Pagination},
        },
        infrastructure::document::InMemoryDocumentRepository,
    };

    static TEAMS: Collection = Collection {
        name: "teams",
        hidden_fields: &[],
        references: &[],
    };

    static PEOPLE: Collection = Collection {
        name: "people",
        hidden_fields: &["password"],
        references: &[Reference {
            path: "team",
            collection: &TEAMS,
        }],
    };

    const TEAM_ID: &str = "0191d3a0-0000-7000-8000-000000000001";

    fn document(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    async fn service_with_people(count: usize) -> Service<InMemoryDocumentRepository> {
        let repository = InMemoryDocumentRepository::default();
        repository
            .insert(
                &TEAMS,
                document(json!({ "id": TEAM_ID, "name": "Platform", "budget": 10 })),
            )
            .await
            .unwrap();

        for i in 0..count {
            repository
                .insert(
                    &PEOPLE,
                    document(json!({
                        "id": uuid::Uuid::now_v7().to_string(),
                        "name": format!("Person {i:02}"),
                        "email": format!("person{i:02}@example.com"),
                        "age": 20 + i,
                        "team": TEAM_ID,
                        "password": "secret",
                        "createdAt": format!("2025-01-01T00:00:{i:02}.000000Z"),
                    })),
                )
                .await
                .unwrap();
        }

        Service::new(repository)
    }

    async fn list(
        service: &Service<InMemoryDocumentRepository>,
        options: &ListOptions,
        pairs: &[(&str, &str)],
    ) -> ResultEnvelope {
        service
            .list_documents(&PEOPLE, options, &params(pairs))
            .await
            .unwrap()
    }

    fn names(envelope: &ResultEnvelope) -> Vec<&str> {
        envelope
            .data
            .iter()
            .filter_map(|d| d.get("name").and_then(Value::as_str))
            .collect()
    }

    #[tokio::test]
    async fn default_pagination_returns_first_page_newest_first() {
        let service = service_with_people(30).await;

        let envelope = list(&service, &ListOptions::new(), &[]).await;

        assert!(envelope.success);
        assert_eq!(envelope.count, 25);
        assert_eq!(envelope.pagination.prev, None);
        assert_eq!(envelope.pagination.next, Some(PageLink { page: 2, limit: 25 }));
        assert_eq!(names(&envelope)[0], "Person 29");
    }

    #[tokio::test]
    async fn last_page_has_only_prev_link() {
        let service = service_with_people(30).await;

        let envelope = list(&service, &ListOptions::new(), &[("page", "2")]).await;

        assert_eq!(envelope.count, 5);
        assert_eq!(envelope.pagination.prev, Some(PageLink { page: 1, limit: 25 }));
        assert_eq!(envelope.pagination.next, None);
        assert_eq!(names(&envelope).last(), Some(&"Person 00"));
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let service = service_with_people(30).await;

        let envelope = list(&service, &ListOptions::new(), &[("page", "5")]).await;

        assert_eq!(envelope.count, 0);
        assert_eq!(envelope.pagination.prev, Some(PageLink { page: 4, limit: 25 }));
        assert_eq!(envelope.pagination.next, None);
    }

    #[tokio::test]
    async fn reserved_keys_do_not_filter() {
        let service = service_with_people(30).await;
        let options = ListOptions::new().searchable(["name"]);

        let envelope = list(
            &service,
            &options,
            &[
                ("page", "2"),
                ("limit", "10"),
                ("sort", "-createdAt"),
                ("select", "name"),
                ("search", "person"),
            ],
        )
        .await;

        assert_eq!(envelope.count, 10);
        assert_eq!(
            envelope.pagination,
            Pagination {
                prev: Some(PageLink { page: 1, limit: 10 }),
                next: Some(PageLink { page: 3, limit: 10 }),
            }
        );
        assert_eq!(names(&envelope)[0], "Person 19");
    }

    #[tokio::test]
    async fn search_needs_searchable_fields() {
        let service = service_with_people(5).await;

        let with_search = list(&service, &ListOptions::new(), &[("search", "nobody")]).await;
        let without = list(&service, &ListOptions::new(), &[]).await;

        assert_eq!(with_search, without);
        assert_eq!(with_search.count, 5);
    }

    #[tokio::test]
    async fn search_matches_any_field_case_insensitively() {
        let repository = InMemoryDocumentRepository::default();
        for (name, email) in [
            ("Alice", "a@example.com"),
            ("Bob", "bob@ALbion.org"),
            ("Carol", "carol@example.com"),
        ] {
            repository
                .insert(
                    &PEOPLE,
                    document(json!({
                        "id": uuid::Uuid::now_v7().to_string(),
                        "name": name,
                        "email": email,
                    })),
                )
                .await
                .unwrap();
        }
        let service = Service::new(repository);
        let options = ListOptions::new().searchable(["name", "email"]).default_sort("name");

        let envelope = list(&service, &options, &[("search", " al ")]).await;

        assert_eq!(names(&envelope), vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn search_term_is_literal() {
        let service = service_with_people(3).await;
        let options = ListOptions::new().searchable(["email"]);

        let envelope = list(&service, &options, &[("search", "person0.")]).await;

        assert_eq!(envelope.count, 0);
    }

    #[tokio::test]
    async fn select_projects_fields_and_keeps_id() {
        let service = service_with_people(2).await;

        let envelope = list(&service, &ListOptions::new(), &[("select", "name,email")]).await;

        for document in &envelope.data {
            let mut keys: Vec<&str> = document.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, vec!["email", "id", "name"]);
        }
    }

    #[tokio::test]
    async fn hidden_fields_are_never_returned() {
        let service = service_with_people(2).await;

        let envelope = list(&service, &ListOptions::new(), &[("select", "name,password")]).await;

        assert!(envelope.data.iter().all(|d| !d.contains_key("password")));
    }

    #[tokio::test]
    async fn invalid_page_and_limit_use_defaults() {
        let service = service_with_people(30).await;
        let options = ListOptions::new();

        let absent = list(&service, &options, &[]).await;
        let garbage = list(&service, &options, &[("page", "abc")]).await;
        let zero_limit = list(&service, &options, &[("limit", "0")]).await;
        let negative_limit = list(&service, &options, &[("limit", "-5")]).await;

        assert_eq!(absent, garbage);
        assert_eq!(absent, zero_limit);
        assert_eq!(absent, negative_limit);
    }

    #[tokio::test]
    async fn filters_combine_with_search() {
        let service = service_with_people(30).await;
        let options = ListOptions::new().searchable(["name"]);

        let envelope = list(
            &service,
            &options,
            &[("age[gte]", "40"), ("search", "person 2"), ("sort", "age")],
        )
        .await;

        let ages: Vec<u64> = envelope
            .data
            .iter()
            .filter_map(|d| d.get("age").and_then(Value::as_u64))
            .collect();
        assert_eq!(ages, vec![40, 41, 42, 43, 44, 45, 46, 47, 48, 49]);
    }

    #[tokio::test]
    async fn populate_expands_references() {
        let service = service_with_people(1).await;
        let options = ListOptions::new().populate(PopulateSpec::detailed("team", "name"));

        let envelope = list(&service, &options, &[]).await;

        assert_eq!(
            envelope.data[0].get("team"),
            Some(&json!({ "id": TEAM_ID, "name": "Platform" }))
        );
    }

    #[tokio::test]
    async fn populate_without_reference_is_skipped() {
        let service = service_with_people(1).await;
        let options = ListOptions::new().populate("manager");

        let envelope = list(&service, &options, &[]).await;

        assert_eq!(envelope.count, 1);
        assert_eq!(envelope.data[0].get("team"), Some(&json!(TEAM_ID)));
    }

    #[tokio::test]
    async fn invalid_filter_produces_no_envelope() {
        let service = service_with_people(1).await;

        let result = service
            .list_documents(&PEOPLE, &ListOptions::new(), &params(&[("age[near]", "3")]))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidFilter(_))));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let mut repository = MockDocumentRepository::new();
        repository
            .expect_count()
            .withf(|collection, _| collection.name == "people")
            .returning(|_, _| {
                Box::pin(async {
                    Err(CoreError::ServiceUnavailable("connection refused".to_string()))
                })
            });
        repository
            .expect_find()
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));
        let service = Service::new(repository);

        let result = service
            .list_documents(&PEOPLE, &ListOptions::new(), &QueryParams::new())
            .await;

        assert_eq!(
            result,
            Err(CoreError::ServiceUnavailable("connection refused".to_string()))
        );
    }
}

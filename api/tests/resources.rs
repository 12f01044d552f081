mod common;

use axum::http::StatusCode;
use common::{TestApp, id_of};
use serde_json::{Value, json};
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestApp)]
#[tokio::test]
async fn create_user_returns_created(app: &mut TestApp) {
    let response = app
        .server
        .post(&app.path("/users"))
        .json(&json!({ "name": "Ada", "email": "Ada@Example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["email"], json!("ada@example.com"));
    assert_eq!(body["data"]["role"], json!("user"));
    assert!(body["data"]["createdAt"].is_string());
}

#[test_context(TestApp)]
#[tokio::test]
async fn duplicate_email_conflicts(app: &mut TestApp) {
    app.create_user("Ada", "ada@example.com").await;

    let response = app
        .server
        .post(&app.path("/users"))
        .json(&json!({ "name": "Imposter", "email": "ADA@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], json!("E_CONFLICT"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn invalid_payload_is_unprocessable(app: &mut TestApp) {
    let response = app
        .server
        .post(&app.path("/users"))
        .json(&json!({ "name": "", "email": "nope" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], json!("E_VALIDATION"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn malformed_json_is_a_bad_request(app: &mut TestApp) {
    let response = app
        .server
        .post(&app.path("/cards"))
        .json(&json!({ "name": "No owner" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestApp)]
#[tokio::test]
async fn card_with_unknown_owner_is_rejected(app: &mut TestApp) {
    let response = app
        .server
        .post(&app.path("/cards"))
        .json(&json!({ "owner": Uuid::now_v7(), "name": "Orphan" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], json!("E_BAD_REQUEST"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn get_card_populates_owner_and_organization(app: &mut TestApp) {
    let owner = app.create_user("Ada", "ada@example.com").await;
    let organization = app
        .server
        .post(&app.path("/organizations"))
        .json(&json!({ "name": "Analytical Engines", "owner": owner }))
        .await;
    organization.assert_status(StatusCode::CREATED);
    let organization = id_of(&organization.json::<Value>());
    let card = app
        .server
        .post(&app.path("/cards"))
        .json(&json!({
            "owner": owner,
            "organization": organization,
            "name": "Ada Lovelace",
            "tags": ["Math", "math", " poetry "],
        }))
        .await;
    card.assert_status(StatusCode::CREATED);
    let card = card.json::<Value>();
    assert_eq!(card["data"]["tags"], json!(["math", "poetry"]));
    assert_eq!(card["data"]["isPublic"], json!(true));

    let response = app
        .server
        .get(&app.path(&format!("/cards/{}", id_of(&card))))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        body["data"]["owner"],
        json!({ "id": owner, "name": "Ada", "email": "ada@example.com" })
    );
    assert_eq!(
        body["data"]["organization"],
        json!({ "id": organization, "name": "Analytical Engines" })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn missing_documents_are_not_found(app: &mut TestApp) {
    for collection in ["users", "organizations", "cards", "connections"] {
        let response = app
            .server
            .get(&app.path(&format!("/{collection}/{}", Uuid::now_v7())))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], json!("E_NOT_FOUND"));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn connections_are_unique_per_pair(app: &mut TestApp) {
    let ada = app.create_user("Ada", "ada@example.com").await;
    let charles = app.create_user("Charles", "charles@example.com").await;

    let first = app
        .server
        .post(&app.path("/connections"))
        .json(&json!({ "requester": ada, "recipient": charles, "message": "Hello" }))
        .await;
    let reverse = app
        .server
        .post(&app.path("/connections"))
        .json(&json!({ "requester": charles, "recipient": ada }))
        .await;
    let to_self = app
        .server
        .post(&app.path("/connections"))
        .json(&json!({ "requester": ada, "recipient": ada }))
        .await;

    first.assert_status(StatusCode::CREATED);
    assert_eq!(first.json::<Value>()["data"]["status"], json!("pending"));
    reverse.assert_status(StatusCode::CONFLICT);
    to_self.assert_status(StatusCode::BAD_REQUEST);

    let pending = app
        .server
        .get(&app.path("/connections"))
        .add_query_param("status", "pending")
        .add_query_param("recipient", &charles)
        .await
        .json::<Value>();
    assert_eq!(pending["count"], json!(1));
    assert_eq!(pending["data"][0]["requester"]["name"], json!("Ada"));

    // connections declare no searchable fields, so `search` constrains nothing
    let searched = app
        .server
        .get(&app.path("/connections"))
        .add_query_param("search", "no such text")
        .await
        .json::<Value>();
    assert_eq!(searched["count"], json!(1));
}

#[test_context(TestApp)]
#[tokio::test]
async fn health_reports_store_latency(app: &mut TestApp) {
    let response = app.server.get(&app.path("/health")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "healthy": true, "databaseLatencyMs": 0 })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn serves_openapi_document(app: &mut TestApp) {
    let response = app.server.get(&app.path("/api-docs/openapi.json")).await;

    response.assert_status_ok();
    let paths = response.json::<Value>()["paths"].clone();
    assert!(paths.get("/api/v1/cards").is_some());
    assert!(paths.get("/api/v1/cards/{id}").is_some());
}

use std::sync::Arc;

use axum_test::TestServer;
use cardfolio_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;

/// The full router on a fresh in-memory store.
pub struct TestApp {
    pub server: TestServer,
    root_path: String,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        let args = Arc::new(Args::in_memory());
        let root_path = args.server.root_path.clone();
        let state = state(args).await.expect("in-memory state");
        let router = router(state).expect("router");

        TestApp {
            server: TestServer::new(router).expect("test server"),
            root_path,
        }
    }
}

impl TestApp {
    pub fn path(&self, path: &str) -> String {
        format!("{}{path}", self.root_path)
    }

    pub async fn create_user(&self, name: &str, email: &str) -> String {
        let response = self
            .server
            .post(&self.path("/users"))
            .json(&json!({ "name": name, "email": email }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        id_of(&response.json::<Value>())
    }

    pub async fn create_card(&self, owner: &str, name: &str, tags: &[&str]) -> String {
        let response = self
            .server
            .post(&self.path("/cards"))
            .json(&json!({ "owner": owner, "name": name, "tags": tags }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        id_of(&response.json::<Value>())
    }
}

pub fn id_of(body: &Value) -> String {
    body["data"]["id"]
        .as_str()
        .expect("created document has an id")
        .to_string()
}

mod common;

use client_api::api::identity::{TENANT_HEADER, USER_HEADER};
use client_api::build_app;
use client_api::downstream::{methods, proto};
use common::*;
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tonic::Code;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn with_identity(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(TENANT_HEADER, TENANT_ID)
            .header(USER_HEADER, USER_ID)
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Result<reqwest::Response> {
        self.with_identity(self.client.post(&format!("{}{}", self.base_url, path)))
            .json(&json)
            .send()
            .await
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.with_identity(self.client.get(&format!("{}{}", self.base_url, path)))
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.with_identity(self.client.delete(&format!("{}{}", self.base_url, path)))
            .send()
            .await
    }
}

/// Serve the gateway over the given stub on an ephemeral port.
async fn spawn_gateway(stub: StubCore) -> TestClient {
    let app = build_app(state_with(stub));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn test_repo_and_branch_workflow() {
    let stub = StubCore::new();
    stub.respond::<methods::AddRepo>(proto::AddRepoResponse {
        outcome: None,
        repo: Some(proto::Repo {
            repo_id: "repo_1".to_string(),
            repo_name: "orders-repo".to_string(),
            default_branch_name: "main".to_string(),
            owner_id: USER_ID.to_string(),
            branches: vec![proto::Branch {
                branch_id: "br_1".to_string(),
                branch_name: "main".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }),
    })
    .respond::<methods::AttachBranch>(proto::AttachBranchResponse {
        outcome: None,
        branch: Some(proto::Branch {
            branch_id: "br_1".to_string(),
            branch_name: "main".to_string(),
            connected: true,
            connected_database_name: "orders".to_string(),
            ..Default::default()
        }),
    })
    .respond::<methods::DeleteBranch>(proto::DeleteBranchResponse { outcome: None });
    let client = spawn_gateway(stub).await;

    println!("1. Creating repo...");
    let res = client
        .post(
            "/acme/api/v1/workspaces/sales/repos",
            json!({"repo_name": "orders-repo"}),
        )
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["repo"]["default_branch"], "main");
    assert_eq!(body["repo"]["branches"][0]["branch_name"], "main");

    println!("2. Attaching branch to database...");
    let res = client
        .post(
            "/acme/api/v1/workspaces/sales/repos/orders-repo/branches/main/attach",
            json!({"database_name": "orders"}),
        )
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["branch"]["connected"], true);
    assert_eq!(body["branch"]["database_name"], "orders");

    println!("3. Attaching without database name...");
    let res = client
        .post(
            "/acme/api/v1/workspaces/sales/repos/orders-repo/branches/main/attach",
            json!({}),
        )
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);

    println!("4. Deleting branch...");
    let res = client
        .delete("/acme/api/v1/workspaces/sales/repos/orders-repo/branches/feature")
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "Branch deleted successfully", "success": true, "status": "success"})
    );
}

#[tokio::test]
async fn test_transformation_conflict_over_http() {
    let stub = StubCore::new();
    stub.fail::<methods::AddTransformation>(
        Code::AlreadyExists,
        "transformation 'upper' already exists",
    );
    let client = spawn_gateway(stub).await;

    let res = client
        .post(
            "/acme/api/v1/transformations",
            json!({
                "transformation_name": "upper",
                "transformation_type": "scalar",
                "transformation_version": "1.0.0",
                "function_name": "upper_case"
            }),
        )
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 409);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "transformation 'upper' already exists");
    assert_eq!(body["message"], "Failed to add transformation");
}

#[tokio::test]
async fn test_health_needs_no_identity() {
    let client = spawn_gateway(StubCore::new()).await;

    let res = client
        .client
        .get(&format!("{}/health", client.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let res = client
        .client
        .get(&format!("{}/acme/api/v1/tenants", client.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = client.get("/acme/api/v1/transformations").await.unwrap();
    // No canned reply for ListTransformations
    assert_eq!(res.status().as_u16(), 503);
}

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Extension;
use client_api::api::database_handlers::show_database;
use client_api::api::identity::{TENANT_HEADER, USER_HEADER};
use client_api::api::request::PathParams;
use client_api::downstream::{methods, proto, CallTimeouts};
use client_api::routes::api_routes;
use client_api::{AppState, Identity};
use common::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tonic::Code;
use tower::ServiceExt;

fn wire_outcome(message: &str, status: proto::OperationStatus) -> Option<proto::Outcome> {
    Some(proto::Outcome {
        message: message.to_string(),
        success: status != proto::OperationStatus::Failure,
        status: status as i32,
    })
}

fn wire_workspace(name: &str) -> proto::Workspace {
    proto::Workspace {
        workspace_id: format!("ws_{}", name),
        workspace_name: name.to_string(),
        workspace_description: "analytics".to_string(),
        instance_count: 1,
        database_count: 2,
        repo_count: 3,
        mapping_count: 4,
        owner_id: USER_ID.to_string(),
    }
}

fn wire_database(name: &str) -> proto::Database {
    proto::Database {
        database_id: format!("db_{}", name),
        database_name: name.to_string(),
        database_description: String::new(),
        database_type: "postgres".to_string(),
        database_vendor: "custom".to_string(),
        database_version: "16".to_string(),
        database_host: "db.internal".to_string(),
        database_port: 5432,
        database_username: "app".to_string(),
        database_db_name: "orders".to_string(),
        database_enabled: true,
        database_ssl: true,
        instance_id: "inst_1".to_string(),
        owner_id: USER_ID.to_string(),
        connection_status: "connected".to_string(),
    }
}

#[tokio::test]
async fn test_health_reports_idle_gateway() {
    let state = state_with(StubCore::new());
    let (status, body) = send(app(&state), request("GET", "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["in_flight_operations"], 0);
}

#[tokio::test]
async fn test_missing_identity_headers_rejected() {
    let state = state_with(StubCore::new());
    let req = axum::http::Request::builder()
        .uri("/acme/api/v1/workspaces")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = send(app(&state), req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["status"], "error");
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_unresolved_identity_is_internal_error() {
    let state = state_with(StubCore::new());
    // Routes mounted without the identity resolver
    let router = api_routes::<StubCore>().with_state(state.clone());
    let (status, body) = send(router, request("GET", "/acme/api/v1/workspaces", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Identity not resolved");
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_blank_path_parameter_rejected_before_call() {
    let state = state_with(StubCore::new());
    let result = show_database(
        State(state.clone()),
        Some(Extension(Identity::new(TENANT_ID, USER_ID))),
        PathParams(("acme".to_string(), " ".to_string(), "orders".to_string())),
    )
    .await;

    let err = result.err().expect("blank workspace name must fail");
    let (status, envelope) = err.to_envelope();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope.error, "Missing path parameter");
    assert_eq!(
        envelope.message,
        "Missing required path parameters: workspace_name"
    );
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_show_database_reply_carries_converted_resource() {
    let stub = StubCore::new();
    stub.respond::<methods::ShowDatabase>(proto::ShowDatabaseResponse {
        outcome: None,
        database: Some(wire_database("orders")),
    });
    let state = state_with(stub);

    let reply = show_database(
        State(state.clone()),
        Some(Extension(Identity::new(TENANT_ID, USER_ID))),
        PathParams(("acme".to_string(), "sales".to_string(), "orders".to_string())),
    )
    .await
    .expect("stubbed lookup succeeds");

    assert_eq!(reply.status(), StatusCode::OK);
    assert_eq!(reply.body().outcome.message, "Database retrieved successfully");
    let response = reply.into_body();
    assert_eq!(response.database.database_name, "orders");
    assert_eq!(response.database.port, 5432);
    assert_eq!(state.core.calls_to::<methods::ShowDatabase>(), 1);
    assert_eq!(state.operations.in_flight(), 0);
}

#[tokio::test]
async fn test_undecodable_path_segment_gets_json_envelope() {
    let state = state_with(StubCore::new());
    let res = app(&state)
        .oneshot(request(
            "GET",
            "/acme/api/v1/workspaces/%FF/databases/orders",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid path parameter");
    assert_eq!(body["status"], "error");
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_oversized_body_gets_json_envelope() {
    let state = state_with(StubCore::new());
    let padding = "x".repeat(3 * 1024 * 1024);
    let payload = json!({ "workspace_name": "sales", "workspace_description": padding });
    let req = Request::builder()
        .method("POST")
        .uri("/acme/api/v1/workspaces")
        .header(TENANT_HEADER, TENANT_ID)
        .header(USER_HEADER, USER_ID)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let res = app(&state).oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(body["status"], "error");
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_connect_database_missing_password() {
    let state = state_with(StubCore::new());
    let body = json!({
        "database_name": "orders",
        "database_type": "postgres",
        "database_vendor": "custom",
        "host": "db.internal",
        "username": "app",
        "db_name": "orders"
    });
    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/databases/connect",
            Some(body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": "Required fields missing",
            "message": "Missing required fields: password",
            "status": "error"
        })
    );
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_show_database_not_found() {
    let stub = StubCore::new();
    stub.fail::<methods::ShowDatabase>(Code::NotFound, "database not found");
    let state = state_with(stub);

    let (status, body) = send(
        app(&state),
        request("GET", "/acme/api/v1/workspaces/sales/databases/orders", None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": "database not found",
            "message": "Failed to show database",
            "status": "error"
        })
    );
    assert_eq!(state.core.calls_to::<methods::ShowDatabase>(), 1);
}

#[tokio::test]
async fn test_connect_database_round_trip() {
    let stub = StubCore::new();
    stub.respond::<methods::ConnectDatabase>(proto::ConnectDatabaseResponse {
        outcome: wire_outcome("Database connected", proto::OperationStatus::Success),
        database: Some(wire_database("orders")),
    });
    let state = state_with(stub);

    let body = json!({
        "database_name": "orders",
        "database_type": "postgres",
        "database_vendor": "custom",
        "host": "db.internal",
        "port": 5432,
        "username": "app",
        "password": "s3cret",
        "db_name": "orders",
        "ssl": true
    });
    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/databases/connect",
            Some(body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Database connected");
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "success");
    assert_eq!(body["database"]["database_name"], "orders");
    assert_eq!(body["database"]["host"], "db.internal");
    assert_eq!(body["database"]["port"], 5432);
    assert_eq!(body["database"]["ssl"], true);

    let sent = state
        .core
        .last_request::<methods::ConnectDatabase>()
        .unwrap();
    assert_eq!(sent.tenant_id, TENANT_ID);
    assert_eq!(sent.owner_id, USER_ID);
    assert_eq!(sent.workspace_name, "sales");
    assert_eq!(sent.password, "s3cret");
    assert_eq!(sent.port, Some(5432));
    assert_eq!(sent.ssl, Some(true));
    assert_eq!(sent.enabled, None);
}

#[tokio::test]
async fn test_required_body_must_be_valid_json() {
    let state = state_with(StubCore::new());

    let (status, body) = send(
        app(&state),
        raw_request("POST", "/acme/api/v1/workspaces", "{not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let (status, _) = send(
        app(&state),
        request("POST", "/acme/api/v1/workspaces", None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_best_effort_body_ignores_garbage() {
    let stub = StubCore::new();
    stub.respond::<methods::DisconnectDatabase>(proto::DisconnectDatabaseResponse {
        outcome: wire_outcome("Database disconnected", proto::OperationStatus::Success),
    });
    let state = state_with(stub);
    let uri = "/acme/api/v1/workspaces/sales/databases/orders/disconnect";

    let (status, body) = send(app(&state), raw_request("POST", uri, "{oops")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Database disconnected", "success": true, "status": "success"})
    );
    let sent = state
        .core
        .last_request::<methods::DisconnectDatabase>()
        .unwrap();
    assert_eq!(sent.delete_database_object, None);

    let (status, _) = send(
        app(&state),
        request("POST", uri, Some(json!({"delete_repo": true}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let sent = state
        .core
        .last_request::<methods::DisconnectDatabase>()
        .unwrap();
    assert_eq!(sent.delete_repo, Some(true));
}

#[tokio::test]
async fn test_optional_body_rejects_garbage_but_allows_absence() {
    let stub = StubCore::new();
    stub.respond::<methods::DeleteRepo>(proto::DeleteRepoResponse { outcome: None });
    let state = state_with(stub);
    let uri = "/acme/api/v1/workspaces/sales/repos/main-repo";

    let (status, body) = send(app(&state), raw_request("DELETE", uri, "[1,")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(state.core.call_count(), 0);

    let (status, body) = send(app(&state), request("DELETE", uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Repo deleted successfully");
    assert_eq!(body["success"], true);
    let sent = state.core.last_request::<methods::DeleteRepo>().unwrap();
    assert_eq!(sent.force, None);
    assert_eq!(sent.repo_name, "main-repo");
}

#[tokio::test]
async fn test_transform_mode_validation() {
    let state = state_with(StubCore::new());
    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/databases/transform",
            Some(json!({"mapping_name": "orders-to-dw", "mode": "merge"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid field value");
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_transform_passes_mode_through() {
    let stub = StubCore::new();
    stub.respond::<methods::TransformData>(proto::TransformDataResponse {
        outcome: wire_outcome("Transformation queued", proto::OperationStatus::Pending),
        source_database_name: "orders".to_string(),
        target_database_name: "warehouse".to_string(),
        mode: "replace".to_string(),
        tables_affected: 3,
        rows_transformed: 1200,
    });
    let state = state_with(stub);
    let uri = "/acme/api/v1/workspaces/sales/databases/transform";

    for mode in ["append", "replace", "update"] {
        let (status, _) = send(
            app(&state),
            request(
                "POST",
                uri,
                Some(json!({"mapping_name": "orders-to-dw", "mode": mode})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let sent = state.core.last_request::<methods::TransformData>().unwrap();
        assert_eq!(sent.mode, mode);
    }

    let (status, body) = send(
        app(&state),
        request(
            "POST",
            uri,
            Some(json!({
                "mapping_name": "orders-to-dw",
                "dry_run": true,
                "options": {"batch_size": "500"}
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["rows_transformed"], 1200);
    let sent = state.core.last_request::<methods::TransformData>().unwrap();
    assert_eq!(sent.mode, "append");
    assert_eq!(sent.dry_run, Some(true));
    assert_eq!(sent.options.get("batch_size").map(String::as_str), Some("500"));
}

#[tokio::test]
async fn test_downstream_codes_map_to_http() {
    let cases = [
        (Code::NotFound, StatusCode::NOT_FOUND, "workspace missing"),
        (Code::AlreadyExists, StatusCode::CONFLICT, "workspace missing"),
        (Code::InvalidArgument, StatusCode::BAD_REQUEST, "workspace missing"),
        (Code::PermissionDenied, StatusCode::FORBIDDEN, "workspace missing"),
        (Code::Unauthenticated, StatusCode::UNAUTHORIZED, "workspace missing"),
        (Code::Unavailable, StatusCode::SERVICE_UNAVAILABLE, "Service unavailable"),
        (
            Code::Unimplemented,
            StatusCode::SERVICE_UNAVAILABLE,
            "Operation not available",
        ),
        (Code::DeadlineExceeded, StatusCode::REQUEST_TIMEOUT, "Request timeout"),
        (
            Code::ResourceExhausted,
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests",
        ),
        (
            Code::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        ),
        (
            Code::Aborted,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        ),
    ];

    for (code, expected_status, expected_error) in cases {
        let stub = StubCore::new();
        stub.fail::<methods::ShowWorkspace>(code, "workspace missing");
        let state = state_with(stub);

        let (status, body) = send(
            app(&state),
            request("GET", "/acme/api/v1/workspaces/sales", None),
        )
        .await;

        assert_eq!(status, expected_status, "code {:?}", code);
        assert_eq!(body["error"], expected_error, "code {:?}", code);
        assert_eq!(body["message"], "Failed to show workspace");
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn test_slow_core_times_out() {
    let state = AppState::new(
        StubCore::with_delay(Duration::from_millis(500)),
        CallTimeouts {
            standard: Duration::from_millis(50),
            extended: Duration::from_millis(50),
        },
    );

    let (status, body) = send(
        app(&state),
        request("GET", "/acme/api/v1/workspaces/sales", None),
    )
    .await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["error"], "Request timeout");
    assert_eq!(body["message"], "Failed to show workspace");
    assert_eq!(state.operations.in_flight(), 0);
}

#[tokio::test]
async fn test_in_flight_counter_drains_after_concurrent_batch() {
    let stub = StubCore::with_delay(Duration::from_millis(200));
    stub.respond::<methods::ShowWorkspace>(proto::ShowWorkspaceResponse {
        outcome: None,
        workspace: Some(wire_workspace("sales")),
    });
    let state = state_with(stub);

    let mut tasks = JoinSet::new();
    for i in 0..24 {
        let router = app(&state);
        let req = match i % 3 {
            0 => request("GET", "/acme/api/v1/workspaces/%20", None),
            1 => request(
                "POST",
                "/acme/api/v1/workspaces/sales/databases/connect",
                Some(json!({ "database_name": "orders" })),
            ),
            _ => request("GET", "/acme/api/v1/workspaces/sales", None),
        };
        tasks.spawn(async move { (i % 3, send(router, req).await) });
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(state.operations.in_flight() > 0);

    while let Some(joined) = tasks.join_next().await {
        let (kind, (status, body)) = joined.unwrap();
        match kind {
            0 => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body["error"], "Missing path parameter");
            }
            1 => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body["error"], "Required fields missing");
            }
            _ => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body["workspace"]["workspace_name"], "sales");
            }
        }
    }

    assert_eq!(state.operations.in_flight(), 0);
    assert_eq!(state.core.calls_to::<methods::ShowWorkspace>(), 8);
    assert_eq!(state.core.call_count(), 8);
    assert!(state.operations.drain(Duration::from_millis(10)).await);
}

#[tokio::test]
async fn test_outcome_status_and_fallback() {
    let stub = StubCore::new();
    stub.respond::<methods::ModifyWorkspace>(proto::ModifyWorkspaceResponse {
        outcome: wire_outcome("Renamed with warnings", proto::OperationStatus::Warning),
        workspace: Some(wire_workspace("sales-eu")),
    });
    stub.respond::<methods::ShowWorkspace>(proto::ShowWorkspaceResponse {
        outcome: None,
        workspace: Some(wire_workspace("sales")),
    });
    let state = state_with(stub);

    let (status, body) = send(
        app(&state),
        request(
            "PUT",
            "/acme/api/v1/workspaces/sales",
            Some(json!({"workspace_name_new": "sales-eu"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["message"], "Renamed with warnings");
    let sent = state
        .core
        .last_request::<methods::ModifyWorkspace>()
        .unwrap();
    assert_eq!(sent.workspace_name_new.as_deref(), Some("sales-eu"));
    assert_eq!(sent.workspace_description, None);

    let (status, body) = send(
        app(&state),
        request("GET", "/acme/api/v1/workspaces/sales", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workspace retrieved successfully");
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "success");
    assert_eq!(body["workspace"]["repo_count"], 3);
}

#[tokio::test]
async fn test_success_without_resource_is_internal_error() {
    let stub = StubCore::new();
    stub.respond::<methods::ShowDatabase>(proto::ShowDatabaseResponse {
        outcome: wire_outcome("ok", proto::OperationStatus::Success),
        database: None,
    });
    let state = state_with(stub);

    let (status, body) = send(
        app(&state),
        request("GET", "/acme/api/v1/workspaces/sales/databases/orders", None),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "Failed to show database");
}

#[tokio::test]
async fn test_tenant_requests_carry_caller() {
    let stub = StubCore::new();
    stub.respond::<methods::ListTenants>(proto::ListTenantsResponse {
        outcome: None,
        tenants: vec![proto::Tenant {
            tenant_id: TENANT_ID.to_string(),
            tenant_name: "Acme".to_string(),
            tenant_description: String::new(),
            tenant_url: "acme".to_string(),
        }],
    });
    let state = state_with(stub);

    let (status, body) = send(app(&state), request("GET", "/acme/api/v1/tenants", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenants"][0]["tenant_url"], "acme");
    let sent = state.core.last_request::<methods::ListTenants>().unwrap();
    assert_eq!(sent.caller_id, USER_ID);
}

#[tokio::test]
async fn test_add_mapping_defaults_scope() {
    let stub = StubCore::new();
    stub.respond::<methods::AddMapping>(proto::AddMappingResponse {
        outcome: None,
        mapping: Some(proto::Mapping {
            mapping_id: "map_1".to_string(),
            mapping_name: "orders-to-dw".to_string(),
            mapping_type: "table".to_string(),
            mapping_source: "orders.public.orders".to_string(),
            mapping_target: "warehouse.public.orders".to_string(),
            mapping_rule_names: vec!["rename_id".to_string()],
            ..Default::default()
        }),
    });
    let state = state_with(stub);

    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/mappings",
            Some(json!({
                "mapping_name": "orders-to-dw",
                "source": "orders.public.orders",
                "target": "warehouse.public.orders"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mapping"]["scope"], "table");
    assert_eq!(body["mapping"]["mapping_rules"], json!(["rename_id"]));
    let sent = state.core.last_request::<methods::AddMapping>().unwrap();
    assert_eq!(sent.scope, "table");
    assert_eq!(sent.owner_id, USER_ID);

    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/mappings",
            Some(json!({
                "mapping_name": "orders-to-dw",
                "scope": "schema",
                "source": "orders",
                "target": "warehouse"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid field value");
    assert_eq!(state.core.calls_to::<methods::AddMapping>(), 1);
}

#[tokio::test]
async fn test_add_relationship_validates_type() {
    let state = state_with(StubCore::new());
    let mut body = json!({
        "relationship_name": "orders-sync",
        "relationship_type": "mirroring",
        "source_database_name": "orders",
        "source_table_name": "orders",
        "target_database_name": "warehouse",
        "target_table_name": "orders",
        "mapping_name": "orders-to-dw"
    });
    let uri = "/acme/api/v1/workspaces/sales/relationships";

    let (status, response) = send(app(&state), request("POST", uri, Some(body.clone()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid field value");

    body["relationship_type"] = json!("replication");
    body["target_table_name"] = json!("");
    let (status, response) = send(app(&state), request("POST", uri, Some(body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Missing required fields: target_table_name");
    assert_eq!(state.core.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_method_reports_unavailable() {
    // No canned reply: the stub answers Unimplemented
    let state = state_with(StubCore::new());
    let (status, body) = send(
        app(&state),
        request(
            "POST",
            "/acme/api/v1/workspaces/sales/relationships/orders-sync/start",
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Operation not available");
    assert_eq!(body["message"], "Failed to start relationship");
}

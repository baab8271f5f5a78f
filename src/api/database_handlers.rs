use std::collections::HashMap;

use axum::{extract::State, Extension};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::handlers::required_resource;
use crate::api::request::{
    require_choice, require_fields, require_identity, require_params, BodyPolicy, PathParams,
    RawBody,
};
use crate::api::respond::Reply;
use crate::api::state::AppState;
use crate::downstream::{methods, proto, CoreClient};
use crate::model::{
    Database, DatabaseListResponse, DatabaseResponse, Identity, Outcome, TransformDataResponse,
};

/// Accepted values for `TransformDataRequest::mode`.
pub const TRANSFORM_MODES: [&str; 3] = ["append", "replace", "update"];
const DEFAULT_TRANSFORM_MODE: &str = "append";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConnectDatabaseRequest {
    pub database_name: String,
    pub database_description: Option<String>,
    pub database_type: String,
    pub database_vendor: String,
    pub host: String,
    pub port: Option<u32>,
    pub username: String,
    pub password: String,
    pub db_name: String,
    pub enabled: Option<bool>,
    pub ssl: Option<bool>,
    pub environment_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyDatabaseRequest {
    pub database_name_new: Option<String>,
    pub database_description: Option<String>,
    pub host: Option<String>,
    pub port: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub db_name: Option<String>,
    pub enabled: Option<bool>,
    pub ssl: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisconnectDatabaseRequest {
    pub delete_database_object: Option<bool>,
    pub delete_repo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransformDataRequest {
    pub mapping_name: String,
    pub mode: Option<String>,
    pub dry_run: Option<bool>,
    pub options: HashMap<String, String>,
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/databases
pub async fn list_databases<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<DatabaseListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListDatabases>(
            "Failed to list databases",
            proto::ListDatabasesRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(DatabaseListResponse {
        outcome: Outcome::resolve(response.outcome, "Databases retrieved successfully"),
        databases: response.databases.into_iter().map(Database::from).collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name
pub async fn show_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
) -> Result<Reply<DatabaseResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show database";
    let response = state
        .call::<methods::ShowDatabase>(
            operation,
            proto::ShowDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
            },
        )
        .await?;

    Ok(Reply::ok(DatabaseResponse {
        outcome: Outcome::resolve(response.outcome, "Database retrieved successfully"),
        database: required_resource(response.database, operation, "database")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/connect
pub async fn connect_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<DatabaseResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ConnectDatabaseRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("database_name", req.database_name.as_str()),
        ("database_type", req.database_type.as_str()),
        ("database_vendor", req.database_vendor.as_str()),
        ("host", req.host.as_str()),
        ("username", req.username.as_str()),
        ("password", req.password.as_str()),
        ("db_name", req.db_name.as_str()),
    ])?;

    let operation = "Failed to connect database";
    let response = state
        .call::<methods::ConnectDatabase>(
            operation,
            proto::ConnectDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name: req.database_name,
                database_description: req.database_description,
                database_type: req.database_type,
                database_vendor: req.database_vendor,
                host: req.host,
                port: req.port,
                username: req.username,
                password: req.password,
                db_name: req.db_name,
                enabled: req.enabled,
                ssl: req.ssl,
                environment_id: req.environment_id,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(DatabaseResponse {
        outcome: Outcome::resolve(response.outcome, "Database connected successfully"),
        database: required_resource(response.database, operation, "database")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name
pub async fn modify_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<DatabaseResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyDatabaseRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify database";
    let response = state
        .call::<methods::ModifyDatabase>(
            operation,
            proto::ModifyDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
                database_name_new: req.database_name_new,
                database_description: req.database_description,
                host: req.host,
                port: req.port,
                username: req.username,
                password: req.password,
                db_name: req.db_name,
                enabled: req.enabled,
                ssl: req.ssl,
            },
        )
        .await?;

    Ok(Reply::ok(DatabaseResponse {
        outcome: Outcome::resolve(response.outcome, "Database updated successfully"),
        database: required_resource(response.database, operation, "database")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/disconnect
///
/// The body only carries cleanup flags; an unreadable one disconnects with
/// defaults.
pub async fn disconnect_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DisconnectDatabaseRequest = BodyPolicy::BestEffort.decode(&body)?;

    let response = state
        .call::<methods::DisconnectDatabase>(
            "Failed to disconnect database",
            proto::DisconnectDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
                delete_database_object: req.delete_database_object,
                delete_repo: req.delete_repo,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Database disconnected successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/reconnect
pub async fn reconnect_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
) -> Result<Reply<DatabaseResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to reconnect database";
    let response = state
        .call::<methods::ReconnectDatabase>(
            operation,
            proto::ReconnectDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
            },
        )
        .await?;

    Ok(Reply::ok(DatabaseResponse {
        outcome: Outcome::resolve(response.outcome, "Database reconnected successfully"),
        database: required_resource(response.database, operation, "database")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/wipe
///
/// Removes all data but keeps the schema and the connection.
pub async fn wipe_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::WipeDatabase>(
            "Failed to wipe database",
            proto::WipeDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Database wiped successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/drop
pub async fn drop_database<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, database_name)): PathParams<(String, String, String)>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("database_name", database_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::DropDatabase>(
            "Failed to drop database",
            proto::DropDatabaseRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                database_name,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Database dropped successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/databases/transform
///
/// Moves data between the databases a mapping connects. Runs under the
/// extended call budget.
pub async fn transform_data<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<TransformDataResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: TransformDataRequest = BodyPolicy::Required.decode(&body)?;
    let mode = req
        .mode
        .unwrap_or_else(|| DEFAULT_TRANSFORM_MODE.to_string());
    require_choice("mode", &mode, &TRANSFORM_MODES)?;
    require_fields(&[("mapping_name", req.mapping_name.as_str())])?;

    let response = state
        .call::<methods::TransformData>(
            "Failed to transform data",
            proto::TransformDataRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name: req.mapping_name,
                mode,
                dry_run: req.dry_run,
                options: req.options,
            },
        )
        .await?;

    Ok(Reply::ok(TransformDataResponse::from(response)))
}

use axum::{extract::State, Extension};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::handlers::required_resource;
use crate::api::request::{
    require_fields, require_identity, require_params, BodyPolicy, PathParams, RawBody,
};
use crate::api::respond::Reply;
use crate::api::state::AppState;
use crate::downstream::{methods, proto, CoreClient};
use crate::model::{Identity, Outcome, Workspace, WorkspaceListResponse, WorkspaceResponse};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddWorkspaceRequest {
    pub workspace_name: String,
    pub workspace_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyWorkspaceRequest {
    pub workspace_name_new: Option<String>,
    pub workspace_description: Option<String>,
}

/// GET /:tenant_url/api/v1/workspaces
pub async fn list_workspaces<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
) -> Result<Reply<WorkspaceListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListWorkspaces>(
            "Failed to list workspaces",
            proto::ListWorkspacesRequest {
                tenant_id: identity.tenant_id,
            },
        )
        .await?;

    Ok(Reply::ok(WorkspaceListResponse {
        outcome: Outcome::resolve(response.outcome, "Workspaces retrieved successfully"),
        workspaces: response
            .workspaces
            .into_iter()
            .map(Workspace::from)
            .collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name
pub async fn show_workspace<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<WorkspaceResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show workspace";
    let response = state
        .call::<methods::ShowWorkspace>(
            operation,
            proto::ShowWorkspaceRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(WorkspaceResponse {
        outcome: Outcome::resolve(response.outcome, "Workspace retrieved successfully"),
        workspace: required_resource(response.workspace, operation, "workspace")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces
pub async fn add_workspace<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
    RawBody(body): RawBody,
) -> Result<Reply<WorkspaceResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;
    let req: AddWorkspaceRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("workspace_name", req.workspace_name.as_str())])?;

    let operation = "Failed to add workspace";
    let response = state
        .call::<methods::AddWorkspace>(
            operation,
            proto::AddWorkspaceRequest {
                tenant_id: identity.tenant_id,
                workspace_name: req.workspace_name,
                workspace_description: req.workspace_description,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(WorkspaceResponse {
        outcome: Outcome::resolve(response.outcome, "Workspace created successfully"),
        workspace: required_resource(response.workspace, operation, "workspace")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name
pub async fn modify_workspace<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<WorkspaceResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyWorkspaceRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify workspace";
    let response = state
        .call::<methods::ModifyWorkspace>(
            operation,
            proto::ModifyWorkspaceRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                workspace_name_new: req.workspace_name_new,
                workspace_description: req.workspace_description,
            },
        )
        .await?;

    Ok(Reply::ok(WorkspaceResponse {
        outcome: Outcome::resolve(response.outcome, "Workspace updated successfully"),
        workspace: required_resource(response.workspace, operation, "workspace")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name
pub async fn delete_workspace<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::DeleteWorkspace>(
            "Failed to delete workspace",
            proto::DeleteWorkspaceRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Workspace deleted successfully",
    )))
}

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
use crate::model::{BranchResponse, Identity, Outcome, Repo, RepoListResponse, RepoResponse};

// Repo request structures
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddRepoRequest {
    pub repo_name: String,
    pub repo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyRepoRequest {
    pub repo_name_new: Option<String>,
    pub repo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteRepoRequest {
    pub force: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CloneRepoRequest {
    pub clone_repo_name: String,
    pub clone_repo_description: Option<String>,
    pub clone_database_name: Option<String>,
}

// Branch request structures
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyBranchRequest {
    pub branch_name_new: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AttachBranchRequest {
    pub database_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteBranchRequest {
    pub force: Option<bool>,
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/repos
pub async fn list_repos<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<RepoListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListRepos>(
            "Failed to list repos",
            proto::ListReposRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(RepoListResponse {
        outcome: Outcome::resolve(response.outcome, "Repos retrieved successfully"),
        repos: response.repos.into_iter().map(Repo::from).collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name
pub async fn show_repo<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name)): PathParams<(String, String, String)>,
) -> Result<Reply<RepoResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show repo";
    let response = state
        .call::<methods::ShowRepo>(
            operation,
            proto::ShowRepoRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
            },
        )
        .await?;

    Ok(Reply::ok(RepoResponse {
        outcome: Outcome::resolve(response.outcome, "Repo retrieved successfully"),
        repo: required_resource(response.repo, operation, "repo")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/repos
pub async fn add_repo<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<RepoResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AddRepoRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("repo_name", req.repo_name.as_str())])?;

    let operation = "Failed to add repo";
    let response = state
        .call::<methods::AddRepo>(
            operation,
            proto::AddRepoRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name: req.repo_name,
                repo_description: req.repo_description,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(RepoResponse {
        outcome: Outcome::resolve(response.outcome, "Repo created successfully"),
        repo: required_resource(response.repo, operation, "repo")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name
pub async fn modify_repo<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<RepoResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyRepoRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify repo";
    let response = state
        .call::<methods::ModifyRepo>(
            operation,
            proto::ModifyRepoRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                repo_name_new: req.repo_name_new,
                repo_description: req.repo_description,
            },
        )
        .await?;

    Ok(Reply::ok(RepoResponse {
        outcome: Outcome::resolve(response.outcome, "Repo updated successfully"),
        repo: required_resource(response.repo, operation, "repo")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name
pub async fn delete_repo<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DeleteRepoRequest = BodyPolicy::Optional.decode(&body)?;

    let response = state
        .call::<methods::DeleteRepo>(
            "Failed to delete repo",
            proto::DeleteRepoRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                force: req.force,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Repo deleted successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/clone
pub async fn clone_repo<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<RepoResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: CloneRepoRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("clone_repo_name", req.clone_repo_name.as_str())])?;

    let operation = "Failed to clone repo";
    let response = state
        .call::<methods::CloneRepo>(
            operation,
            proto::CloneRepoRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                clone_repo_name: req.clone_repo_name,
                clone_repo_description: req.clone_repo_description,
                clone_database_name: req.clone_database_name,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(RepoResponse {
        outcome: Outcome::resolve(response.outcome, "Repo cloned successfully"),
        repo: required_resource(response.repo, operation, "repo")?.into(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name
pub async fn show_branch<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name, branch_name)): PathParams<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Reply<BranchResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
        ("branch_name", branch_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show branch";
    let response = state
        .call::<methods::ShowBranch>(
            operation,
            proto::ShowBranchRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                branch_name,
            },
        )
        .await?;

    Ok(Reply::ok(BranchResponse {
        outcome: Outcome::resolve(response.outcome, "Branch retrieved successfully"),
        branch: required_resource(response.branch, operation, "branch")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name
pub async fn modify_branch<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name, branch_name)): PathParams<(
        String,
        String,
        String,
        String,
    )>,
    RawBody(body): RawBody,
) -> Result<Reply<BranchResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
        ("branch_name", branch_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyBranchRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify branch";
    let response = state
        .call::<methods::ModifyBranch>(
            operation,
            proto::ModifyBranchRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                branch_name,
                branch_name_new: req.branch_name_new,
            },
        )
        .await?;

    Ok(Reply::ok(BranchResponse {
        outcome: Outcome::resolve(response.outcome, "Branch updated successfully"),
        branch: required_resource(response.branch, operation, "branch")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name/attach
pub async fn attach_branch<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name, branch_name)): PathParams<(
        String,
        String,
        String,
        String,
    )>,
    RawBody(body): RawBody,
) -> Result<Reply<BranchResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
        ("branch_name", branch_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AttachBranchRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("database_name", req.database_name.as_str())])?;

    let operation = "Failed to attach branch";
    let response = state
        .call::<methods::AttachBranch>(
            operation,
            proto::AttachBranchRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                branch_name,
                database_name: req.database_name,
            },
        )
        .await?;

    Ok(Reply::ok(BranchResponse {
        outcome: Outcome::resolve(response.outcome, "Branch attached successfully"),
        branch: required_resource(response.branch, operation, "branch")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name/detach
pub async fn detach_branch<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name, branch_name)): PathParams<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Reply<BranchResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
        ("branch_name", branch_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to detach branch";
    let response = state
        .call::<methods::DetachBranch>(
            operation,
            proto::DetachBranchRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                branch_name,
            },
        )
        .await?;

    Ok(Reply::ok(BranchResponse {
        outcome: Outcome::resolve(response.outcome, "Branch detached successfully"),
        branch: required_resource(response.branch, operation, "branch")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name
pub async fn delete_branch<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, repo_name, branch_name)): PathParams<(
        String,
        String,
        String,
        String,
    )>,
    RawBody(body): RawBody,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("repo_name", repo_name.as_str()),
        ("branch_name", branch_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DeleteBranchRequest = BodyPolicy::Optional.decode(&body)?;

    let response = state
        .call::<methods::DeleteBranch>(
            "Failed to delete branch",
            proto::DeleteBranchRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                repo_name,
                branch_name,
                force: req.force,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Branch deleted successfully",
    )))
}

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
    Identity, Outcome, Relationship, RelationshipListResponse, RelationshipResponse,
};

pub const RELATIONSHIP_TYPES: [&str; 2] = ["replication", "migration"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddRelationshipRequest {
    pub relationship_name: String,
    pub relationship_description: Option<String>,
    pub relationship_type: String,
    pub source_database_name: String,
    pub source_table_name: String,
    pub target_database_name: String,
    pub target_table_name: String,
    pub mapping_name: String,
    pub policy_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyRelationshipRequest {
    pub relationship_name_new: Option<String>,
    pub relationship_description: Option<String>,
    pub policy_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteRelationshipRequest {
    pub force: Option<bool>,
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/relationships
pub async fn list_relationships<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<RelationshipListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListRelationships>(
            "Failed to list relationships",
            proto::ListRelationshipsRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(RelationshipListResponse {
        outcome: Outcome::resolve(response.outcome, "Relationships retrieved successfully"),
        relationships: response
            .relationships
            .into_iter()
            .map(Relationship::from)
            .collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name
pub async fn show_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, relationship_name)): PathParams<(
        String,
        String,
        String,
    )>,
) -> Result<Reply<RelationshipResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("relationship_name", relationship_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show relationship";
    let response = state
        .call::<methods::ShowRelationship>(
            operation,
            proto::ShowRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name,
            },
        )
        .await?;

    Ok(Reply::ok(RelationshipResponse {
        outcome: Outcome::resolve(response.outcome, "Relationship retrieved successfully"),
        relationship: required_resource(response.relationship, operation, "relationship")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/relationships
pub async fn add_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<RelationshipResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AddRelationshipRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("relationship_name", req.relationship_name.as_str()),
        ("relationship_type", req.relationship_type.as_str()),
        ("source_database_name", req.source_database_name.as_str()),
        ("source_table_name", req.source_table_name.as_str()),
        ("target_database_name", req.target_database_name.as_str()),
        ("target_table_name", req.target_table_name.as_str()),
        ("mapping_name", req.mapping_name.as_str()),
    ])?;
    require_choice(
        "relationship_type",
        &req.relationship_type,
        &RELATIONSHIP_TYPES,
    )?;

    let operation = "Failed to add relationship";
    let response = state
        .call::<methods::AddRelationship>(
            operation,
            proto::AddRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name: req.relationship_name,
                relationship_description: req.relationship_description,
                relationship_type: req.relationship_type,
                relationship_source_database_name: req.source_database_name,
                relationship_source_table_name: req.source_table_name,
                relationship_target_database_name: req.target_database_name,
                relationship_target_table_name: req.target_table_name,
                mapping_name: req.mapping_name,
                policy_id: req.policy_id,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(RelationshipResponse {
        outcome: Outcome::resolve(response.outcome, "Relationship created successfully"),
        relationship: required_resource(response.relationship, operation, "relationship")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name
pub async fn modify_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, relationship_name)): PathParams<(
        String,
        String,
        String,
    )>,
    RawBody(body): RawBody,
) -> Result<Reply<RelationshipResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("relationship_name", relationship_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyRelationshipRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify relationship";
    let response = state
        .call::<methods::ModifyRelationship>(
            operation,
            proto::ModifyRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name,
                relationship_name_new: req.relationship_name_new,
                relationship_description: req.relationship_description,
                policy_id: req.policy_id,
            },
        )
        .await?;

    Ok(Reply::ok(RelationshipResponse {
        outcome: Outcome::resolve(response.outcome, "Relationship updated successfully"),
        relationship: required_resource(response.relationship, operation, "relationship")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name
pub async fn delete_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, relationship_name)): PathParams<(
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
        ("relationship_name", relationship_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DeleteRelationshipRequest = BodyPolicy::BestEffort.decode(&body)?;

    let response = state
        .call::<methods::DeleteRelationship>(
            "Failed to delete relationship",
            proto::DeleteRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name,
                force: req.force,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Relationship deleted successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name/start
pub async fn start_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, relationship_name)): PathParams<(
        String,
        String,
        String,
    )>,
) -> Result<Reply<RelationshipResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("relationship_name", relationship_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to start relationship";
    let response = state
        .call::<methods::StartRelationship>(
            operation,
            proto::StartRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name,
            },
        )
        .await?;

    Ok(Reply::ok(RelationshipResponse {
        outcome: Outcome::resolve(response.outcome, "Relationship started successfully"),
        relationship: required_resource(response.relationship, operation, "relationship")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name/stop
pub async fn stop_relationship<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, relationship_name)): PathParams<(
        String,
        String,
        String,
    )>,
) -> Result<Reply<RelationshipResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("relationship_name", relationship_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to stop relationship";
    let response = state
        .call::<methods::StopRelationship>(
            operation,
            proto::StopRelationshipRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                relationship_name,
            },
        )
        .await?;

    Ok(Reply::ok(RelationshipResponse {
        outcome: Outcome::resolve(response.outcome, "Relationship stopped successfully"),
        relationship: required_resource(response.relationship, operation, "relationship")?.into(),
    }))
}

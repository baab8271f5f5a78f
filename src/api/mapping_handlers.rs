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
    Identity, Mapping, MappingListResponse, MappingResponse, MappingRule, MappingRuleListResponse,
    MappingRuleResponse, Outcome,
};

/// Accepted values for `AddMappingRequest::scope`.
pub const MAPPING_SCOPES: [&str; 2] = ["database", "table"];
const DEFAULT_MAPPING_SCOPE: &str = "table";

// Mapping request structures
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddMappingRequest {
    pub mapping_name: String,
    pub mapping_description: Option<String>,
    pub scope: Option<String>,
    pub source: String,
    pub target: String,
    pub policy_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyMappingRequest {
    pub mapping_name_new: Option<String>,
    pub mapping_description: Option<String>,
    pub policy_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteMappingRequest {
    /// Leave the attached rules in place instead of removing them with the mapping.
    pub keep_rules: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AttachMappingRuleRequest {
    pub mapping_rule_name: String,
    pub mapping_rule_order: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetachMappingRuleRequest {
    pub mapping_rule_name: String,
}

// Mapping rule request structures
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddMappingRuleRequest {
    pub mapping_rule_name: String,
    pub mapping_rule_description: Option<String>,
    pub source: String,
    pub target: String,
    pub transformation_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyMappingRuleRequest {
    pub mapping_rule_name_new: Option<String>,
    pub mapping_rule_description: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub transformation_name: Option<String>,
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/mappings
pub async fn list_mappings<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<MappingListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListMappings>(
            "Failed to list mappings",
            proto::ListMappingsRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingListResponse {
        outcome: Outcome::resolve(response.outcome, "Mappings retrieved successfully"),
        mappings: response.mappings.into_iter().map(Mapping::from).collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name
pub async fn show_mapping<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_name)): PathParams<(String, String, String)>,
) -> Result<Reply<MappingResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_name", mapping_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show mapping";
    let response = state
        .call::<methods::ShowMapping>(
            operation,
            proto::ShowMappingRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping retrieved successfully"),
        mapping: required_resource(response.mapping, operation, "mapping")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/mappings
pub async fn add_mapping<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AddMappingRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("mapping_name", req.mapping_name.as_str()),
        ("source", req.source.as_str()),
        ("target", req.target.as_str()),
    ])?;
    let scope = req
        .scope
        .unwrap_or_else(|| DEFAULT_MAPPING_SCOPE.to_string());
    require_choice("scope", &scope, &MAPPING_SCOPES)?;

    let operation = "Failed to add mapping";
    let response = state
        .call::<methods::AddMapping>(
            operation,
            proto::AddMappingRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name: req.mapping_name,
                mapping_description: req.mapping_description,
                scope,
                source: req.source,
                target: req.target,
                policy_id: req.policy_id,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(MappingResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping created successfully"),
        mapping: required_resource(response.mapping, operation, "mapping")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name
pub async fn modify_mapping<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_name", mapping_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyMappingRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify mapping";
    let response = state
        .call::<methods::ModifyMapping>(
            operation,
            proto::ModifyMappingRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name,
                mapping_name_new: req.mapping_name_new,
                mapping_description: req.mapping_description,
                policy_id: req.policy_id,
            },
        )
        .await?;

    Ok(Reply::ok(MappingResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping updated successfully"),
        mapping: required_resource(response.mapping, operation, "mapping")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name
pub async fn delete_mapping<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_name", mapping_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DeleteMappingRequest = BodyPolicy::BestEffort.decode(&body)?;

    let response = state
        .call::<methods::DeleteMapping>(
            "Failed to delete mapping",
            proto::DeleteMappingRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name,
                keep_rules: req.keep_rules,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Mapping deleted successfully",
    )))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name/attach-rule
pub async fn attach_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_name", mapping_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AttachMappingRuleRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("mapping_rule_name", req.mapping_rule_name.as_str())])?;

    let operation = "Failed to attach mapping rule";
    let response = state
        .call::<methods::AttachMappingRule>(
            operation,
            proto::AttachMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name,
                mapping_rule_name: req.mapping_rule_name,
                mapping_rule_order: req.mapping_rule_order,
            },
        )
        .await?;

    Ok(Reply::ok(MappingResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rule attached successfully"),
        mapping: required_resource(response.mapping, operation, "mapping")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name/detach-rule
pub async fn detach_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_name)): PathParams<(String, String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_name", mapping_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: DetachMappingRuleRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[("mapping_rule_name", req.mapping_rule_name.as_str())])?;

    let operation = "Failed to detach mapping rule";
    let response = state
        .call::<methods::DetachMappingRule>(
            operation,
            proto::DetachMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_name,
                mapping_rule_name: req.mapping_rule_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rule detached successfully"),
        mapping: required_resource(response.mapping, operation, "mapping")?.into(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules
pub async fn list_mapping_rules<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
) -> Result<Reply<MappingRuleListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListMappingRules>(
            "Failed to list mapping rules",
            proto::ListMappingRulesRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingRuleListResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rules retrieved successfully"),
        mapping_rules: response
            .mapping_rules
            .into_iter()
            .map(MappingRule::from)
            .collect(),
    }))
}

/// GET /:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules/:mapping_rule_name
pub async fn show_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_rule_name)): PathParams<(
        String,
        String,
        String,
    )>,
) -> Result<Reply<MappingRuleResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_rule_name", mapping_rule_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show mapping rule";
    let response = state
        .call::<methods::ShowMappingRule>(
            operation,
            proto::ShowMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_rule_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingRuleResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rule retrieved successfully"),
        mapping_rule: required_resource(response.mapping_rule, operation, "mapping rule")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules
pub async fn add_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingRuleResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: AddMappingRuleRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("mapping_rule_name", req.mapping_rule_name.as_str()),
        ("source", req.source.as_str()),
        ("target", req.target.as_str()),
        ("transformation_name", req.transformation_name.as_str()),
    ])?;

    let operation = "Failed to add mapping rule";
    let response = state
        .call::<methods::AddMappingRule>(
            operation,
            proto::AddMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_rule_name: req.mapping_rule_name,
                mapping_rule_description: req.mapping_rule_description,
                mapping_rule_source: req.source,
                mapping_rule_target: req.target,
                mapping_rule_transformation_name: req.transformation_name,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(MappingRuleResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rule created successfully"),
        mapping_rule: required_resource(response.mapping_rule, operation, "mapping rule")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules/:mapping_rule_name
pub async fn modify_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_rule_name)): PathParams<(
        String,
        String,
        String,
    )>,
    RawBody(body): RawBody,
) -> Result<Reply<MappingRuleResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_rule_name", mapping_rule_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyMappingRuleRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify mapping rule";
    let response = state
        .call::<methods::ModifyMappingRule>(
            operation,
            proto::ModifyMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_rule_name,
                mapping_rule_name_new: req.mapping_rule_name_new,
                mapping_rule_description: req.mapping_rule_description,
                mapping_rule_source: req.source,
                mapping_rule_target: req.target,
                mapping_rule_transformation_name: req.transformation_name,
            },
        )
        .await?;

    Ok(Reply::ok(MappingRuleResponse {
        outcome: Outcome::resolve(response.outcome, "Mapping rule updated successfully"),
        mapping_rule: required_resource(response.mapping_rule, operation, "mapping rule")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules/:mapping_rule_name
pub async fn delete_mapping_rule<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, workspace_name, mapping_rule_name)): PathParams<(
        String,
        String,
        String,
    )>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("workspace_name", workspace_name.as_str()),
        ("mapping_rule_name", mapping_rule_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::DeleteMappingRule>(
            "Failed to delete mapping rule",
            proto::DeleteMappingRuleRequest {
                tenant_id: identity.tenant_id,
                workspace_name,
                mapping_rule_name,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Mapping rule deleted successfully",
    )))
}

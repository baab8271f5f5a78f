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
use crate::model::{Identity, Outcome, Tenant, TenantListResponse, TenantResponse};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddTenantRequest {
    pub tenant_name: String,
    pub tenant_url: String,
    pub tenant_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyTenantRequest {
    pub tenant_name: Option<String>,
    pub tenant_description: Option<String>,
}

/// GET /:tenant_url/api/v1/tenants
pub async fn list_tenants<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
) -> Result<Reply<TenantListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListTenants>(
            "Failed to list tenants",
            proto::ListTenantsRequest {
                caller_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::ok(TenantListResponse {
        outcome: Outcome::resolve(response.outcome, "Tenants retrieved successfully"),
        tenants: response.tenants.into_iter().map(Tenant::from).collect(),
    }))
}

/// GET /:tenant_url/api/v1/tenants/:tenant_id
pub async fn show_tenant<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, tenant_id)): PathParams<(String, String)>,
) -> Result<Reply<TenantResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("tenant_id", tenant_id.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show tenant";
    let response = state
        .call::<methods::ShowTenant>(
            operation,
            proto::ShowTenantRequest {
                caller_id: identity.user_id,
                tenant_id,
            },
        )
        .await?;

    Ok(Reply::ok(TenantResponse {
        outcome: Outcome::resolve(response.outcome, "Tenant retrieved successfully"),
        tenant: required_resource(response.tenant, operation, "tenant")?.into(),
    }))
}

/// POST /:tenant_url/api/v1/tenants
pub async fn add_tenant<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
    RawBody(body): RawBody,
) -> Result<Reply<TenantResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;
    let req: AddTenantRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("tenant_name", req.tenant_name.as_str()),
        ("tenant_url", req.tenant_url.as_str()),
    ])?;

    let operation = "Failed to add tenant";
    let response = state
        .call::<methods::AddTenant>(
            operation,
            proto::AddTenantRequest {
                caller_id: identity.user_id,
                tenant_name: req.tenant_name,
                tenant_url: req.tenant_url,
                tenant_description: req.tenant_description,
            },
        )
        .await?;

    Ok(Reply::created(TenantResponse {
        outcome: Outcome::resolve(response.outcome, "Tenant created successfully"),
        tenant: required_resource(response.tenant, operation, "tenant")?.into(),
    }))
}

/// PUT /:tenant_url/api/v1/tenants/:tenant_id
pub async fn modify_tenant<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, tenant_id)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<TenantResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("tenant_id", tenant_id.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyTenantRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify tenant";
    let response = state
        .call::<methods::ModifyTenant>(
            operation,
            proto::ModifyTenantRequest {
                caller_id: identity.user_id,
                tenant_id,
                tenant_name: req.tenant_name,
                tenant_description: req.tenant_description,
            },
        )
        .await?;

    Ok(Reply::ok(TenantResponse {
        outcome: Outcome::resolve(response.outcome, "Tenant updated successfully"),
        tenant: required_resource(response.tenant, operation, "tenant")?.into(),
    }))
}

/// DELETE /:tenant_url/api/v1/tenants/:tenant_id
pub async fn delete_tenant<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, tenant_id)): PathParams<(String, String)>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("tenant_id", tenant_id.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::DeleteTenant>(
            "Failed to delete tenant",
            proto::DeleteTenantRequest {
                caller_id: identity.user_id,
                tenant_id,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Tenant deleted successfully",
    )))
}

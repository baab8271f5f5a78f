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
use crate::model::{
    Identity, Outcome, Transformation, TransformationListResponse, TransformationResponse,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddTransformationRequest {
    pub transformation_name: String,
    pub transformation_description: Option<String>,
    pub transformation_type: String,
    pub transformation_version: String,
    pub function_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModifyTransformationRequest {
    pub transformation_name_new: Option<String>,
    pub transformation_description: Option<String>,
    pub transformation_version: Option<String>,
    pub function_name: Option<String>,
}

/// GET /:tenant_url/api/v1/transformations
pub async fn list_transformations<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
) -> Result<Reply<TransformationListResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::ListTransformations>(
            "Failed to list transformations",
            proto::ListTransformationsRequest {
                tenant_id: identity.tenant_id,
            },
        )
        .await?;

    Ok(Reply::ok(TransformationListResponse {
        outcome: Outcome::resolve(response.outcome, "Transformations retrieved successfully"),
        transformations: response
            .transformations
            .into_iter()
            .map(Transformation::from)
            .collect(),
    }))
}

/// GET /:tenant_url/api/v1/transformations/:transformation_name
pub async fn show_transformation<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, transformation_name)): PathParams<(String, String)>,
) -> Result<Reply<TransformationResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("transformation_name", transformation_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let operation = "Failed to show transformation";
    let response = state
        .call::<methods::ShowTransformation>(
            operation,
            proto::ShowTransformationRequest {
                tenant_id: identity.tenant_id,
                transformation_name,
            },
        )
        .await?;

    Ok(Reply::ok(TransformationResponse {
        outcome: Outcome::resolve(response.outcome, "Transformation retrieved successfully"),
        transformation: required_resource(response.transformation, operation, "transformation")?
            .into(),
    }))
}

/// POST /:tenant_url/api/v1/transformations
pub async fn add_transformation<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams(tenant_url): PathParams<String>,
    RawBody(body): RawBody,
) -> Result<Reply<TransformationResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[("tenant_url", tenant_url.as_str())])?;
    let identity = require_identity(identity)?;
    let req: AddTransformationRequest = BodyPolicy::Required.decode(&body)?;
    require_fields(&[
        ("transformation_name", req.transformation_name.as_str()),
        ("transformation_type", req.transformation_type.as_str()),
        ("transformation_version", req.transformation_version.as_str()),
        ("function_name", req.function_name.as_str()),
    ])?;

    let operation = "Failed to add transformation";
    let response = state
        .call::<methods::AddTransformation>(
            operation,
            proto::AddTransformationRequest {
                tenant_id: identity.tenant_id,
                transformation_name: req.transformation_name,
                transformation_description: req.transformation_description,
                transformation_type: req.transformation_type,
                transformation_version: req.transformation_version,
                transformation_function: req.function_name,
                owner_id: identity.user_id,
            },
        )
        .await?;

    Ok(Reply::created(TransformationResponse {
        outcome: Outcome::resolve(response.outcome, "Transformation created successfully"),
        transformation: required_resource(response.transformation, operation, "transformation")?
            .into(),
    }))
}

/// PUT /:tenant_url/api/v1/transformations/:transformation_name
pub async fn modify_transformation<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, transformation_name)): PathParams<(String, String)>,
    RawBody(body): RawBody,
) -> Result<Reply<TransformationResponse>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("transformation_name", transformation_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;
    let req: ModifyTransformationRequest = BodyPolicy::Required.decode(&body)?;

    let operation = "Failed to modify transformation";
    let response = state
        .call::<methods::ModifyTransformation>(
            operation,
            proto::ModifyTransformationRequest {
                tenant_id: identity.tenant_id,
                transformation_name,
                transformation_name_new: req.transformation_name_new,
                transformation_description: req.transformation_description,
                transformation_version: req.transformation_version,
                transformation_function: req.function_name,
            },
        )
        .await?;

    Ok(Reply::ok(TransformationResponse {
        outcome: Outcome::resolve(response.outcome, "Transformation updated successfully"),
        transformation: required_resource(response.transformation, operation, "transformation")?
            .into(),
    }))
}

/// DELETE /:tenant_url/api/v1/transformations/:transformation_name
pub async fn delete_transformation<C: CoreClient>(
    State(state): State<AppState<C>>,
    identity: Option<Extension<Identity>>,
    PathParams((tenant_url, transformation_name)): PathParams<(String, String)>,
) -> Result<Reply<Outcome>, ApiError> {
    let _operation = state.operations.begin();
    require_params(&[
        ("tenant_url", tenant_url.as_str()),
        ("transformation_name", transformation_name.as_str()),
    ])?;
    let identity = require_identity(identity)?;

    let response = state
        .call::<methods::DeleteTransformation>(
            "Failed to delete transformation",
            proto::DeleteTransformationRequest {
                tenant_id: identity.tenant_id,
                transformation_name,
            },
        )
        .await?;

    Ok(Reply::ok(Outcome::resolve(
        response.outcome,
        "Transformation deleted successfully",
    )))
}

//! Input checks run by every handler before its downstream call.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Extension,
};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::model::Identity;

/// How an operation treats its request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    /// An absent or malformed body is rejected.
    Required,
    /// An absent body means defaults; a malformed one is rejected.
    Optional,
    /// Absent or malformed bodies both mean defaults.
    BestEffort,
}

impl BodyPolicy {
    pub fn decode<T: DeserializeOwned + Default>(self, body: &[u8]) -> Result<T, ApiError> {
        let absent = body.iter().all(u8::is_ascii_whitespace);
        match self {
            Self::Required if absent => {
                Err(ApiError::MalformedBody("request body is required".to_string()))
            }
            Self::Optional | Self::BestEffort if absent => Ok(T::default()),
            Self::Required | Self::Optional => {
                serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
            }
            Self::BestEffort => match serde_json::from_slice(body) {
                Ok(value) => Ok(value),
                Err(err) => {
                    log::debug!("ignoring undecodable optional body: {}", err);
                    Ok(T::default())
                }
            },
        }
    }
}

/// [`Path`] whose rejection renders as a validation envelope.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(params)) => Ok(Self(params)),
            Err(rejection) => Err(ApiError::Validation {
                summary: "Invalid path parameter",
                detail: rejection.body_text(),
            }),
        }
    }
}

/// Raw request body. Read failures, including an exceeded size limit,
/// render as a malformed-body envelope.
#[derive(Debug)]
pub struct RawBody(pub Bytes);

#[async_trait]
impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(request, state)
            .await
            .map(Self)
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject the request if any named path parameter is empty.
pub fn require_params(params: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::missing_parameters(&missing))
    }
}

/// Reject the request if any named body field is empty.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::missing_fields(&missing))
    }
}

/// Check an enumerated field against its allowed values (exact match).
pub fn require_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), ApiError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::invalid_choice(field, value, allowed))
    }
}

pub fn require_identity(identity: Option<Extension<Identity>>) -> Result<Identity, ApiError> {
    identity
        .map(|Extension(identity)| identity)
        .ok_or(ApiError::AuthContext)
}

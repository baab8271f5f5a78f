use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::api::respond::{write_json, ErrorResponse};
use crate::model::Identity;

pub const TENANT_HEADER: &str = "x-tenant-id";
pub const USER_HEADER: &str = "x-user-id";

/// Attach the caller's [`Identity`] to the request extensions.
///
/// Credentials are verified upstream by the session layer, which forwards the
/// resolved identity in headers:
/// - X-Tenant-Id: tenant the caller belongs to
/// - X-User-Id: authenticated user
///
/// Requests without both headers are rejected before reaching a handler.
pub async fn resolve_identity(mut request: Request, next: Next) -> Response {
    match identity_from_headers(request.headers()) {
        Some(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        None => {
            log::debug!(
                "rejecting {} {}: no identity headers",
                request.method(),
                request.uri().path()
            );
            write_json(
                StatusCode::UNAUTHORIZED,
                &ErrorResponse::new("Unauthorized", "Missing tenant or user identity"),
            )
        }
    }
}

fn identity_from_headers(headers: &HeaderMap) -> Option<Identity> {
    let tenant_id = extract_header_value(headers, TENANT_HEADER)?;
    let user_id = extract_header_value(headers, USER_HEADER)?;
    Some(Identity::new(tenant_id, user_id))
}

/// Extract a non-empty header value as string
fn extract_header_value(headers: &HeaderMap, header_name: &str) -> Option<String> {
    headers
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    #[test]
    fn test_identity_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(TENANT_HEADER),
            HeaderValue::from_static("tenant_acme"),
        );
        headers.insert(
            HeaderName::from_static(USER_HEADER),
            HeaderValue::from_static("user_123"),
        );

        assert_eq!(
            identity_from_headers(&headers),
            Some(Identity::new("tenant_acme", "user_123"))
        );
    }

    #[test]
    fn test_partial_identity_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(USER_HEADER),
            HeaderValue::from_static("user_123"),
        );
        assert_eq!(identity_from_headers(&headers), None);

        headers.insert(
            HeaderName::from_static(TENANT_HEADER),
            HeaderValue::from_static("  "),
        );
        assert_eq!(identity_from_headers(&headers), None);
    }
}

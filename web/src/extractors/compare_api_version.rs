use crate::extractors::RejectionType;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use log::*;
use semver::Version;
use service::config::ApiVersion;

/// Extractor that validates the `x-version` request header against the list
/// of API versions this server supports.
///
/// A request without the header is accepted and treated as targeting the
/// default (current) version. A request that names a version explicitly must
/// name a supported one, otherwise it is rejected with a 400.
#[derive(Debug)]
pub(crate) struct CompareApiVersion(pub Version);

#[async_trait]
impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header_value) = parts.headers.get(ApiVersion::field_name()) else {
            trace!(
                "No {} header provided, defaulting to version {}",
                ApiVersion::field_name(),
                ApiVersion::default_version()
            );
            return Ok(CompareApiVersion(ApiVersion::default().version));
        };

        let version_str = header_value.to_str().map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid {} header value", ApiVersion::field_name()),
            )
        })?;

        if !ApiVersion::versions().contains(&version_str) {
            warn!("Rejecting request for unsupported API version: {version_str}");
            return Err((
                StatusCode::BAD_REQUEST,
                format!("Unsupported API version: {version_str}"),
            ));
        }

        let version = Version::parse(version_str).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unparseable API version: {version_str}"),
            )
        })?;

        Ok(CompareApiVersion(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<CompareApiVersion, RejectionType> {
        let (mut parts, _body) = request.into_parts();
        CompareApiVersion::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_header_defaults_to_current_version() {
        let request = Request::builder().uri("/add").body(()).unwrap();

        let CompareApiVersion(version) = extract(request).await.unwrap();
        assert_eq!(version.to_string(), ApiVersion::default_version());
    }

    #[tokio::test]
    async fn test_supported_version_is_accepted() {
        let request = Request::builder()
            .uri("/add")
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .body(())
            .unwrap();

        assert!(extract(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_version_is_rejected() {
        let request = Request::builder()
            .uri("/add")
            .header(ApiVersion::field_name(), "9.9.9")
            .body(())
            .unwrap();

        let (status, message) = extract(request).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("9.9.9"));
    }
}

//! Error response formatting
//!
//! Turns a [`ConfigError`] into a status and an [`ErrorResponse`] body.
//! Codes come from the [`ErrorMessage`](crate::error::ErrorMessage) catalog
//! and are prefixed with the configured error code prefix. Upstream failures
//! that carry their own code keep it, and their message becomes the
//! description.

use crate::config::ServiceConfig;
use crate::error::ConfigError;
use crate::handler::core::ConfigOperationResponse;
use crate::management::ManagementErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an operation, using HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl HttpStatus {
    pub fn code(&self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::BadRequest => 400,
            HttpStatus::NotFound => 404,
            HttpStatus::InternalServerError => 500,
        }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            HttpStatus::Ok => "OK",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::InternalServerError => "Internal Server Error",
        };
        write!(f, "{} {}", self.code(), reason)
    }
}

/// Error body returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub description: String,
    /// Request id of the failed request
    pub trace_id: String,
}

/// Create an error response from a ConfigError.
pub fn create_error_response(
    error: &ConfigError,
    config: &ServiceConfig,
    request_id: String,
) -> ConfigOperationResponse {
    let catalog = error.error_message();
    let catalog_code = || format!("{}{}", config.error_code_prefix, catalog.code());

    let (status, code, description) = match error {
        ConfigError::InvalidInput { message } => (
            HttpStatus::BadRequest,
            catalog_code(),
            catalog.describe(Some(message.as_str())),
        ),
        ConfigError::NotFound { id, .. } => (
            HttpStatus::NotFound,
            catalog_code(),
            catalog.describe(Some(id.as_str())),
        ),
        ConfigError::Upstream { data, source, .. } => {
            let status = match source.kind {
                ManagementErrorKind::Client => HttpStatus::BadRequest,
                ManagementErrorKind::Server | ManagementErrorKind::Unclassified => {
                    HttpStatus::InternalServerError
                }
            };
            match (&source.kind, &source.code) {
                (ManagementErrorKind::Unclassified, _) | (_, None) => {
                    (status, catalog_code(), catalog.describe(data.as_deref()))
                }
                (_, Some(code)) => (
                    status,
                    config.qualify_error_code(code),
                    source.message.clone(),
                ),
            }
        }
        ConfigError::InternalInconsistency { .. } => (
            HttpStatus::InternalServerError,
            catalog_code(),
            catalog.describe(None),
        ),
    };

    ConfigOperationResponse {
        status,
        data: None,
        error: Some(ErrorResponse {
            code,
            message: catalog.message().to_string(),
            description,
            trace_id: request_id.clone(),
        }),
        request_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorMessage;
    use crate::management::ManagementError;

    fn render(error: ConfigError) -> (HttpStatus, ErrorResponse) {
        let response = create_error_response(&error, &ServiceConfig::default(), "req-1".into());
        (response.status, response.error.unwrap())
    }

    #[test]
    fn test_invalid_input_response() {
        let (status, body) = render(ConfigError::invalid_input("Unsupported path: /foo"));
        assert_eq!(status, HttpStatus::BadRequest);
        assert_eq!(body.code, "CNF-60001");
        assert_eq!(body.message, "Invalid input.");
        assert_eq!(body.description, "Invalid input provided. Unsupported path: /foo");
        assert_eq!(body.trace_id, "req-1");
    }

    #[test]
    fn test_not_found_response() {
        let (status, body) = render(ConfigError::authenticator_not_found("dG90cA"));
        assert_eq!(status.code(), 404);
        assert_eq!(body.code, "CNF-60002");
        assert_eq!(
            body.description,
            "Unable to find an authenticator with the id: dG90cA"
        );
    }

    #[test]
    fn test_upstream_code_is_kept_or_prefixed() {
        let (status, body) = render(ConfigError::upstream(
            ErrorMessage::ErrorUpdatingConfigs,
            ManagementError::client(Some("IDP-60010"), "Home realm already in use"),
        ));
        assert_eq!(status, HttpStatus::BadRequest);
        assert_eq!(body.code, "IDP-60010");
        assert_eq!(body.message, "Unable to update configurations.");
        assert_eq!(body.description, "Home realm already in use");

        let (status, body) = render(ConfigError::upstream(
            ErrorMessage::ErrorUpdatingConfigs,
            ManagementError::server(Some("65099"), "database down"),
        ));
        assert_eq!(status, HttpStatus::InternalServerError);
        assert_eq!(body.code, "CNF-65099");
    }

    #[test]
    fn test_unclassified_upstream_uses_catalog() {
        let (status, body) = render(ConfigError::upstream_with_data(
            ErrorMessage::ErrorRetrievingAuthenticator,
            "dG90cA",
            ManagementError::unclassified("boom"),
        ));
        assert_eq!(status, HttpStatus::InternalServerError);
        assert_eq!(body.code, "CNF-65004");
        assert_eq!(
            body.description,
            "Server encountered an error while retrieving the authenticator: dG90cA"
        );
    }

    #[test]
    fn test_error_body_wire_shape() {
        let (_, body) = render(ConfigError::missing_record(
            ErrorMessage::ErrorRetrievingConfigs,
            "resident identity provider",
        ));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["traceId"], "req-1");
        assert_eq!(value["code"], "CNF-65001");
        assert_eq!(HttpStatus::InternalServerError.to_string(), "500 Internal Server Error");
    }
}

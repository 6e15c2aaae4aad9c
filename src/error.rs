//! Error types for server configuration operations.
//!
//! [`ConfigError`] is the error returned by every service operation. Each
//! variant maps onto one client or server outcome, and carries the
//! [`ErrorMessage`] catalog entry used to build the API error response.

use crate::management::{ManagementError, ManagementErrorKind};
use crate::patch::PatchError;

/// Catalog of API error messages.
///
/// Every entry has a numeric code (prefixed with the configured error code
/// prefix when rendered), a short message and a longer description. A `{}`
/// in the description is replaced by context data when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    InvalidInput,
    AuthenticatorNotFound,
    ErrorRetrievingConfigs,
    ErrorUpdatingConfigs,
    ErrorListingAuthenticators,
    ErrorRetrievingAuthenticator,
}

impl ErrorMessage {
    /// Numeric code without prefix.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorMessage::InvalidInput => "60001",
            ErrorMessage::AuthenticatorNotFound => "60002",
            ErrorMessage::ErrorRetrievingConfigs => "65001",
            ErrorMessage::ErrorUpdatingConfigs => "65002",
            ErrorMessage::ErrorListingAuthenticators => "65003",
            ErrorMessage::ErrorRetrievingAuthenticator => "65004",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorMessage::InvalidInput => "Invalid input.",
            ErrorMessage::AuthenticatorNotFound => "Resource not found.",
            ErrorMessage::ErrorRetrievingConfigs => "Unable to retrieve configurations.",
            ErrorMessage::ErrorUpdatingConfigs => "Unable to update configurations.",
            ErrorMessage::ErrorListingAuthenticators => "Unable to list authenticators.",
            ErrorMessage::ErrorRetrievingAuthenticator => "Unable to retrieve authenticator.",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorMessage::InvalidInput => "Invalid input provided. {}",
            ErrorMessage::AuthenticatorNotFound => {
                "Unable to find an authenticator with the id: {}"
            }
            ErrorMessage::ErrorRetrievingConfigs => {
                "Server encountered an error while retrieving the configurations."
            }
            ErrorMessage::ErrorUpdatingConfigs => {
                "Server encountered an error while updating the configurations."
            }
            ErrorMessage::ErrorListingAuthenticators => {
                "Server encountered an error while listing the authenticators."
            }
            ErrorMessage::ErrorRetrievingAuthenticator => {
                "Server encountered an error while retrieving the authenticator: {}"
            }
        }
    }

    /// Render the description, substituting context data into the `{}`
    /// placeholder. Blank data leaves the placeholder text out.
    pub fn describe(&self, data: Option<&str>) -> String {
        let template = self.description();
        match data.map(str::trim).filter(|d| !d.is_empty()) {
            Some(data) => template.replacen("{}", data, 1),
            None => template.replacen(" {}", "", 1).replacen("{}", "", 1),
        }
    }
}

/// Main error type for server configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed path, out-of-range index, invalid value, unsupported
    /// operation or malformed payload.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A resource addressed by id does not exist for the tenant
    #[error("{} ({id})", .error.message())]
    NotFound { error: ErrorMessage, id: String },

    /// A management collaborator failed
    #[error("{}: {source}", .error.message())]
    Upstream {
        error: ErrorMessage,
        data: Option<String>,
        #[source]
        source: ManagementError,
    },

    /// A record that must always exist for a tenant is absent
    #[error("{} Missing {record}", .error.message())]
    InternalInconsistency {
        error: ErrorMessage,
        record: &'static str,
    },
}

impl ConfigError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an authenticator not found error
    pub fn authenticator_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            error: ErrorMessage::AuthenticatorNotFound,
            id: id.into(),
        }
    }

    /// Wrap a collaborator failure
    pub fn upstream(error: ErrorMessage, source: ManagementError) -> Self {
        Self::Upstream {
            error,
            data: None,
            source,
        }
    }

    /// Wrap a collaborator failure that concerns a specific resource
    pub fn upstream_with_data(
        error: ErrorMessage,
        data: impl Into<String>,
        source: ManagementError,
    ) -> Self {
        Self::Upstream {
            error,
            data: Some(data.into()),
            source,
        }
    }

    /// Create an internal inconsistency error for a missing singleton record
    pub fn missing_record(error: ErrorMessage, record: &'static str) -> Self {
        Self::InternalInconsistency { error, record }
    }

    /// Whether the failure was caused by the client.
    pub fn is_client_error(&self) -> bool {
        match self {
            ConfigError::InvalidInput { .. } | ConfigError::NotFound { .. } => true,
            ConfigError::Upstream { source, .. } => source.kind == ManagementErrorKind::Client,
            ConfigError::InternalInconsistency { .. } => false,
        }
    }

    /// The catalog entry describing this failure.
    pub fn error_message(&self) -> ErrorMessage {
        match self {
            ConfigError::InvalidInput { .. } => ErrorMessage::InvalidInput,
            ConfigError::NotFound { error, .. }
            | ConfigError::Upstream { error, .. }
            | ConfigError::InternalInconsistency { error, .. } => *error,
        }
    }
}

impl From<PatchError> for ConfigError {
    fn from(error: PatchError) -> Self {
        Self::InvalidInput {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: format!("Malformed request payload: {}", error),
        }
    }
}

/// Errors that can occur while building a configuration service.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BuildError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type BuildResult<T> = Result<T, BuildError>;

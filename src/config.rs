//! Service configuration and builder.
//!
//! [`ServiceConfig`] holds the settings that shape API responses: where
//! resources are located (for `self` links), which application is the
//! resident service provider, and how error codes are prefixed. It can be
//! built in code, through [`ServerConfigServiceBuilder`], or loaded from a
//! JSON document where every field is optional:
//!
//! ```json
//! {
//!   "baseUrl": "https://localhost:9443",
//!   "apiPath": "/api/server/v1",
//!   "residentServiceProviderName": "LOCAL",
//!   "errorCodePrefix": "CNF-",
//!   "superTenantDomain": "carbon.super"
//! }
//! ```

use crate::context::SUPER_TENANT_DOMAIN;
use crate::error::{BuildError, BuildResult};
use crate::management::{ApplicationManagementService, IdentityProviderManager};
use crate::model::{AuthenticatorId, LOCAL_SP};
use crate::service::ServerConfigManagementService;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path of the authenticator collection below the API path.
pub const CONFIGS_AUTHENTICATOR_PATH_COMPONENT: &str = "/configs/authenticators";

/// Delimiter between prefix and number in error codes.
pub const ERROR_CODE_DELIMITER: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Server base URL without path. Examples: "https://localhost:9443",
    /// "https://iam.example.com"
    pub base_url: String,
    /// Versioned API path. Defaults to "/api/server/v1".
    pub api_path: String,
    /// Name of the tenant's resident application.
    pub resident_service_provider_name: String,
    /// Prefix applied to error codes that do not carry one.
    pub error_code_prefix: String,
    /// Tenant whose URLs carry no `/t/{tenant}` segment.
    pub super_tenant_domain: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:9443".to_string(),
            api_path: "/api/server/v1".to_string(),
            resident_service_provider_name: LOCAL_SP.to_string(),
            error_code_prefix: "CNF-".to_string(),
            super_tenant_domain: SUPER_TENANT_DOMAIN.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Parse a JSON configuration document and validate it.
    pub fn from_json_str(json: &str) -> BuildResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BuildError::ConfigFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Ensure the base URL, API path and names are usable.
    pub fn validate(&self) -> BuildResult<()> {
        if self.base_url.is_empty() {
            return Err(BuildError::invalid_configuration("Base URL cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(BuildError::invalid_configuration(
                "Base URL must start with http:// or https://",
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(BuildError::invalid_configuration(
                "Base URL must not end with '/'",
            ));
        }
        if !self.api_path.starts_with('/') {
            return Err(BuildError::invalid_configuration(
                "API path must start with '/'",
            ));
        }
        if self.resident_service_provider_name.trim().is_empty() {
            return Err(BuildError::invalid_configuration(
                "Resident service provider name cannot be empty",
            ));
        }
        if self.super_tenant_domain.trim().is_empty() {
            return Err(BuildError::invalid_configuration(
                "Super tenant domain cannot be empty",
            ));
        }
        Ok(())
    }

    /// URL of a tenant-scoped API path. The super tenant has no tenant
    /// segment.
    pub fn tenant_url(&self, tenant_domain: &str, path: &str) -> String {
        if tenant_domain == self.super_tenant_domain {
            format!("{}{}{}", self.base_url, self.api_path, path)
        } else {
            format!("{}/t/{}{}{}", self.base_url, tenant_domain, self.api_path, path)
        }
    }

    /// Location of an authenticator resource.
    pub fn authenticator_self_link(&self, tenant_domain: &str, id: &AuthenticatorId) -> String {
        self.tenant_url(
            tenant_domain,
            &format!("{}/{}", CONFIGS_AUTHENTICATOR_PATH_COMPONENT, id),
        )
    }

    /// Prefix an error code unless it already carries a prefix.
    pub fn qualify_error_code(&self, code: &str) -> String {
        if code.contains(ERROR_CODE_DELIMITER) {
            code.to_string()
        } else {
            format!("{}{}", self.error_code_prefix, code)
        }
    }
}

/// Builder for configuring and creating a [`ServerConfigManagementService`].
///
/// # Examples
///
/// ```rust
/// use identity_server_configs::ServerConfigServiceBuilder;
/// use identity_server_configs::management::InMemoryIdentityPlatform;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let platform = InMemoryIdentityPlatform::new();
/// let service = ServerConfigServiceBuilder::new(platform.clone(), platform)
///     .with_base_url("https://iam.example.com")
///     .with_error_code_prefix("CFG-")
///     .build()?;
/// assert_eq!(service.config().base_url, "https://iam.example.com");
/// # Ok(())
/// # }
/// ```
pub struct ServerConfigServiceBuilder<I, A> {
    idp_manager: I,
    application_management: A,
    config: ServiceConfig,
}

impl<I, A> ServerConfigServiceBuilder<I, A>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    /// Start with the default configuration.
    pub fn new(idp_manager: I, application_management: A) -> Self {
        Self {
            idp_manager,
            application_management,
            config: ServiceConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.config.api_path = api_path.into();
        self
    }

    pub fn with_resident_service_provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.resident_service_provider_name = name.into();
        self
    }

    pub fn with_error_code_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.error_code_prefix = prefix.into();
        self
    }

    pub fn with_super_tenant_domain(mut self, tenant_domain: impl Into<String>) -> Self {
        self.config.super_tenant_domain = tenant_domain.into();
        self
    }

    /// Validate the configuration and create the service.
    pub fn build(self) -> BuildResult<ServerConfigManagementService<I, A>> {
        self.config.validate()?;
        Ok(ServerConfigManagementService::new(
            self.idp_manager,
            self.application_management,
            self.config,
        ))
    }
}

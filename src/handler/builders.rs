//! Request builder utilities for ConfigOperationRequest

use crate::handler::core::{ConfigOperationRequest, ConfigOperationType};
use serde_json::Value;

impl ConfigOperationRequest {
    fn for_tenant(operation: ConfigOperationType, tenant_domain: impl Into<String>) -> Self {
        Self {
            operation,
            tenant_domain: tenant_domain.into(),
            username: None,
            request_id: None,
            authenticator_id: None,
            data: None,
        }
    }

    /// Create a get configs request.
    pub fn get_configs(tenant_domain: impl Into<String>) -> Self {
        Self::for_tenant(ConfigOperationType::GetConfigs, tenant_domain)
    }

    /// Create a patch request. `patches` is the JSON array of patch operations.
    pub fn patch_configs(tenant_domain: impl Into<String>, patches: Value) -> Self {
        Self {
            data: Some(patches),
            ..Self::for_tenant(ConfigOperationType::PatchConfigs, tenant_domain)
        }
    }

    /// Create a list authenticators request.
    pub fn list_authenticators(tenant_domain: impl Into<String>) -> Self {
        Self::for_tenant(ConfigOperationType::ListAuthenticators, tenant_domain)
    }

    /// Create a get authenticator request.
    pub fn get_authenticator(
        tenant_domain: impl Into<String>,
        authenticator_id: impl Into<String>,
    ) -> Self {
        Self {
            authenticator_id: Some(authenticator_id.into()),
            ..Self::for_tenant(ConfigOperationType::GetAuthenticator, tenant_domain)
        }
    }

    /// Create a get inbound SCIM config request.
    pub fn get_inbound_scim_config(tenant_domain: impl Into<String>) -> Self {
        Self::for_tenant(ConfigOperationType::GetInboundScimConfig, tenant_domain)
    }

    /// Create an update inbound SCIM config request.
    pub fn update_inbound_scim_config(tenant_domain: impl Into<String>, config: Value) -> Self {
        Self {
            data: Some(config),
            ..Self::for_tenant(ConfigOperationType::UpdateInboundScimConfig, tenant_domain)
        }
    }

    /// Set the authenticated user.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set request ID for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

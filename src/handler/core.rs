//! Core operation handler infrastructure
//!
//! Request, response and operation types plus the dispatcher that routes a
//! request to its operation handler.

use crate::context::RequestContext;
use crate::handler::errors::{ErrorResponse, HttpStatus};
use crate::management::{ApplicationManagementService, IdentityProviderManager};
use crate::service::ServerConfigManagementService;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transport-agnostic handler for configuration operations.
pub struct ConfigOperationHandler<I, A> {
    pub(super) service: ServerConfigManagementService<I, A>,
}

/// Structured request for configuration operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOperationRequest {
    /// The type of operation to perform
    pub operation: ConfigOperationType,
    /// Tenant the operation applies to
    pub tenant_domain: String,
    /// Authenticated user, if known
    pub username: Option<String>,
    /// Request ID for tracing; generated when absent
    pub request_id: Option<String>,
    /// Encoded authenticator id for `GetAuthenticator`
    pub authenticator_id: Option<String>,
    /// JSON payload for patch and update operations
    pub data: Option<Value>,
}

/// Types of configuration operations supported by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigOperationType {
    /// Aggregated server configuration
    GetConfigs,
    /// Patch session settings and home realm identifiers
    PatchConfigs,
    /// List local authenticators
    ListAuthenticators,
    /// Get a local authenticator by id
    GetAuthenticator,
    /// Inbound SCIM provisioning settings
    GetInboundScimConfig,
    /// Replace inbound SCIM provisioning settings
    UpdateInboundScimConfig,
}

/// Structured response from configuration operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOperationResponse {
    pub status: HttpStatus,
    /// Response body of successful operations that return data
    pub data: Option<Value>,
    /// Error body of failed operations
    pub error: Option<ErrorResponse>,
    pub request_id: String,
}

impl ConfigOperationResponse {
    pub fn is_success(&self) -> bool {
        self.status == HttpStatus::Ok
    }
}

impl<I, A> ConfigOperationHandler<I, A>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    pub fn new(service: ServerConfigManagementService<I, A>) -> Self {
        Self { service }
    }

    /// Handle a structured configuration operation request.
    ///
    /// Never fails: every error is rendered into the response.
    pub async fn handle_operation(
        &self,
        request: ConfigOperationRequest,
    ) -> ConfigOperationResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "Config operation handler processing {:?} for tenant '{}' (request: '{}')",
            request.operation, request.tenant_domain, request_id
        );

        let context = self.create_request_context(&request, &request_id);

        let result = match request.operation {
            ConfigOperationType::GetConfigs => {
                super::handlers::handle_get_configs(self, &context).await
            }
            ConfigOperationType::PatchConfigs => {
                super::handlers::handle_patch_configs(self, request, &context).await
            }
            ConfigOperationType::ListAuthenticators => {
                super::handlers::handle_list_authenticators(self, &context).await
            }
            ConfigOperationType::GetAuthenticator => {
                super::handlers::handle_get_authenticator(self, request, &context).await
            }
            ConfigOperationType::GetInboundScimConfig => {
                super::handlers::handle_get_inbound_scim_config(self, &context).await
            }
            ConfigOperationType::UpdateInboundScimConfig => {
                super::handlers::handle_update_inbound_scim_config(self, request, &context).await
            }
        };

        match result {
            Ok(data) => {
                debug!(
                    "Config operation handler completed successfully (request: '{}')",
                    request_id
                );
                ConfigOperationResponse {
                    status: HttpStatus::Ok,
                    data,
                    error: None,
                    request_id,
                }
            }
            Err(e) => {
                warn!(
                    "Config operation handler failed: {} (request: '{}')",
                    e, request_id
                );
                super::errors::create_error_response(&e, self.service.config(), request_id)
            }
        }
    }

    fn create_request_context(
        &self,
        request: &ConfigOperationRequest,
        request_id: &str,
    ) -> RequestContext {
        let context =
            RequestContext::new(request.tenant_domain.clone()).with_request_id(request_id);
        match &request.username {
            Some(username) => context.with_username(username.clone()),
            None => context,
        }
    }

    /// Get access to the underlying service.
    pub fn service(&self) -> &ServerConfigManagementService<I, A> {
        &self.service
    }
}

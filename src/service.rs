//! Server configuration management service.
//!
//! [`ServerConfigManagementService`] implements the configuration API on top
//! of the two management backends. Every operation is scoped to the tenant
//! of the [`RequestContext`] it is given and maps backend failures onto the
//! [`ErrorMessage`] catalog entry of the operation.
//!
//! # Example Usage
//!
//! ```rust
//! use identity_server_configs::context::RequestContext;
//! use identity_server_configs::management::InMemoryIdentityPlatform;
//! use identity_server_configs::model::Patch;
//! use identity_server_configs::ServerConfigServiceBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let platform = InMemoryIdentityPlatform::with_tenant("wso2.com").await;
//! let service = ServerConfigServiceBuilder::new(platform.clone(), platform).build()?;
//! let context = RequestContext::new("wso2.com");
//!
//! service
//!     .patch_configs(&[Patch::add("/homeRealmIdentifiers/0", "localhost")], &context)
//!     .await?;
//!
//! let configs = service.get_configs(&context).await?;
//! assert_eq!(configs.home_realm_identifiers, Some(vec!["localhost".to_string()]));
//! # Ok(())
//! # }
//! ```

use crate::config::ServiceConfig;
use crate::context::RequestContext;
use crate::error::{ConfigError, ConfigResult, ErrorMessage};
use crate::management::{ApplicationManagementService, IdentityProviderManager};
use crate::model::{
    Authenticator, AuthenticatorId, AuthenticatorListItem, InboundConfig, LocalAuthenticatorConfig,
    Patch, ProvisioningConfig, ResidentIdentityProvider, ScimConfig, ServerConfig,
    ServiceProvider,
};
use crate::patch::{HomeRealmIdentifiers, apply_patches};
use log::{debug, info, warn};

const RESIDENT_IDP_RECORD: &str = "resident identity provider";
const RESIDENT_SP_RECORD: &str = "resident service provider";

/// Configuration API over the identity provider and application backends.
pub struct ServerConfigManagementService<I, A> {
    idp_manager: I,
    application_management: A,
    config: ServiceConfig,
}

impl<I, A> ServerConfigManagementService<I, A>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    /// Create a service without validating `config`. Use
    /// [`crate::ServerConfigServiceBuilder`] for validated construction.
    pub fn new(idp_manager: I, application_management: A, config: ServiceConfig) -> Self {
        Self {
            idp_manager,
            application_management,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn idp_manager(&self) -> &I {
        &self.idp_manager
    }

    pub fn application_management(&self) -> &A {
        &self.application_management
    }

    /// Aggregated server configuration of the tenant.
    pub async fn get_configs(&self, context: &RequestContext) -> ConfigResult<ServerConfig> {
        debug!(
            "Retrieving server configs for tenant '{}' (request: '{}')",
            context.tenant_domain(),
            context.request_id
        );

        let idp = self
            .resident_idp(context, ErrorMessage::ErrorRetrievingConfigs)
            .await?;
        let scim = self
            .resident_service_provider(context, ErrorMessage::ErrorRetrievingConfigs)
            .await
            .map(|sp| ScimConfig::from(&sp.inbound_provisioning_config))?;
        let authenticators = self
            .local_authenticators(context, ErrorMessage::ErrorListingAuthenticators)
            .await?
            .iter()
            .map(|config| self.list_item(config, context))
            .collect();

        let home_realm_identifiers = idp
            .home_realm_id
            .as_deref()
            .filter(|joined| !joined.trim().is_empty())
            .map(|joined| HomeRealmIdentifiers::parse(Some(joined)).into_vec());

        Ok(ServerConfig {
            idle_session_timeout_period: idp.idle_session_timeout().map(str::to_string),
            remember_me_period: idp.remember_me_period().map(str::to_string),
            home_realm_identifiers,
            provisioning: ProvisioningConfig {
                inbound: InboundConfig { scim },
            },
            authenticators,
        })
    }

    /// Apply a batch of patch operations to the resident identity provider.
    ///
    /// Nothing is persisted unless every operation succeeds.
    pub async fn patch_configs(
        &self,
        patches: &[Patch],
        context: &RequestContext,
    ) -> ConfigResult<()> {
        info!(
            "Patching server configs for tenant '{}' with {} operation(s) (request: '{}')",
            context.tenant_domain(),
            patches.len(),
            context.request_id
        );

        let current = self
            .resident_idp(context, ErrorMessage::ErrorUpdatingConfigs)
            .await?;

        let mut patched = apply_patches(&current, patches).inspect_err(|e| {
            debug!("Rejected patch request (request: '{}'): {}", context.request_id, e);
        })?;

        // Federated authenticators belong to the identity provider backend
        // and must not be rewritten from here.
        patched.federated_authenticator_configs.clear();

        self.idp_manager
            .update_resident_idp(patched, context.tenant_domain())
            .await
            .map_err(|e| {
                warn!(
                    "Failed to update resident identity provider for tenant '{}': {}",
                    context.tenant_domain(),
                    e
                );
                ConfigError::upstream(ErrorMessage::ErrorUpdatingConfigs, e)
            })
    }

    /// List the local authenticators of the tenant.
    pub async fn get_authenticators(
        &self,
        context: &RequestContext,
    ) -> ConfigResult<Vec<AuthenticatorListItem>> {
        debug!(
            "Listing authenticators for tenant '{}' (request: '{}')",
            context.tenant_domain(),
            context.request_id
        );

        let authenticators = self
            .local_authenticators(context, ErrorMessage::ErrorListingAuthenticators)
            .await?;
        Ok(authenticators
            .iter()
            .map(|config| self.list_item(config, context))
            .collect())
    }

    /// Fetch a single local authenticator by its encoded id.
    pub async fn get_authenticator(
        &self,
        authenticator_id: &str,
        context: &RequestContext,
    ) -> ConfigResult<Authenticator> {
        debug!(
            "Retrieving authenticator '{}' for tenant '{}' (request: '{}')",
            authenticator_id,
            context.tenant_domain(),
            context.request_id
        );

        let Some(name) = AuthenticatorId::parse(authenticator_id).to_name() else {
            debug!("Authenticator id '{}' does not decode", authenticator_id);
            return Err(ConfigError::authenticator_not_found(authenticator_id));
        };

        let authenticators = self
            .application_management
            .get_all_local_authenticators(context.tenant_domain())
            .await
            .map_err(|e| {
                ConfigError::upstream_with_data(
                    ErrorMessage::ErrorRetrievingAuthenticator,
                    authenticator_id,
                    e,
                )
            })?;

        authenticators
            .iter()
            .find(|config| config.name == name)
            .map(Authenticator::from)
            .ok_or_else(|| ConfigError::authenticator_not_found(authenticator_id))
    }

    /// Inbound SCIM provisioning settings of the resident service provider.
    pub async fn get_inbound_scim_config(
        &self,
        context: &RequestContext,
    ) -> ConfigResult<ScimConfig> {
        debug!(
            "Retrieving inbound SCIM config for tenant '{}' (request: '{}')",
            context.tenant_domain(),
            context.request_id
        );

        let sp = self
            .resident_service_provider(context, ErrorMessage::ErrorRetrievingConfigs)
            .await?;
        Ok(ScimConfig::from(&sp.inbound_provisioning_config))
    }

    /// Replace the inbound SCIM provisioning settings of the resident
    /// service provider.
    pub async fn update_inbound_scim_configs(
        &self,
        scim_config: &ScimConfig,
        context: &RequestContext,
    ) -> ConfigResult<()> {
        info!(
            "Updating inbound SCIM config for tenant '{}' (proxy mode: {}, request: '{}')",
            context.tenant_domain(),
            scim_config.enable_proxy_mode,
            context.request_id
        );

        let sp = self
            .resident_service_provider(context, ErrorMessage::ErrorRetrievingConfigs)
            .await?;
        let resource_id = sp.application_resource_id.clone();
        let updated = sp.with_inbound_provisioning(scim_config.to_inbound_provisioning());

        self.application_management
            .update_application_by_resource_id(
                &resource_id,
                updated,
                context.tenant_domain(),
                context.username(),
            )
            .await
            .map_err(|e| {
                warn!(
                    "Failed to update resident service provider for tenant '{}': {}",
                    context.tenant_domain(),
                    e
                );
                ConfigError::upstream(ErrorMessage::ErrorRetrievingConfigs, e)
            })
    }

    async fn resident_idp(
        &self,
        context: &RequestContext,
        error: ErrorMessage,
    ) -> ConfigResult<ResidentIdentityProvider> {
        self.idp_manager
            .get_resident_idp(context.tenant_domain())
            .await
            .map_err(|e| ConfigError::upstream(error, e))?
            .ok_or_else(|| {
                warn!(
                    "No resident identity provider for tenant '{}'",
                    context.tenant_domain()
                );
                ConfigError::missing_record(error, RESIDENT_IDP_RECORD)
            })
    }

    async fn resident_service_provider(
        &self,
        context: &RequestContext,
        error: ErrorMessage,
    ) -> ConfigResult<ServiceProvider> {
        self.application_management
            .get_service_provider(
                &self.config.resident_service_provider_name,
                context.tenant_domain(),
            )
            .await
            .map_err(|e| ConfigError::upstream(error, e))?
            .ok_or_else(|| {
                warn!(
                    "No resident service provider '{}' for tenant '{}'",
                    self.config.resident_service_provider_name,
                    context.tenant_domain()
                );
                ConfigError::missing_record(error, RESIDENT_SP_RECORD)
            })
    }

    async fn local_authenticators(
        &self,
        context: &RequestContext,
        error: ErrorMessage,
    ) -> ConfigResult<Vec<LocalAuthenticatorConfig>> {
        self.application_management
            .get_all_local_authenticators(context.tenant_domain())
            .await
            .map_err(|e| ConfigError::upstream(error, e))
    }

    fn list_item(
        &self,
        config: &LocalAuthenticatorConfig,
        context: &RequestContext,
    ) -> AuthenticatorListItem {
        let id = config.id();
        AuthenticatorListItem {
            self_link: self
                .config
                .authenticator_self_link(context.tenant_domain(), &id),
            id,
            name: config.name.clone(),
            display_name: config.display_name.clone(),
            is_enabled: config.enabled,
        }
    }
}

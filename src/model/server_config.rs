//! Server configuration views exchanged with API clients.

use crate::model::authenticator::AuthenticatorListItem;
use crate::model::service_provider::InboundProvisioningConfig;
use serde::{Deserialize, Serialize};

/// SCIM inbound provisioning settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimConfig {
    #[serde(default)]
    pub enable_proxy_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_userstore: Option<String>,
}

impl ScimConfig {
    /// Provisioning config persisted for these settings. Outside proxy mode
    /// provisioning is enabled into the selected user store.
    pub fn to_inbound_provisioning(&self) -> InboundProvisioningConfig {
        let mut config = InboundProvisioningConfig {
            proxy_mode: self.enable_proxy_mode,
            ..InboundProvisioningConfig::default()
        };
        if !self.enable_proxy_mode {
            config.provisioning_enabled = true;
            config.provisioning_user_store = self.provisioning_userstore.clone();
        }
        config
    }
}

impl From<&InboundProvisioningConfig> for ScimConfig {
    fn from(config: &InboundProvisioningConfig) -> Self {
        Self {
            enable_proxy_mode: config.proxy_mode,
            provisioning_userstore: config.provisioning_user_store.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundConfig {
    pub scim: ScimConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningConfig {
    pub inbound: InboundConfig,
}

/// Aggregated server configuration of a tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_session_timeout_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_realm_identifiers: Option<Vec<String>>,
    #[serde(default)]
    pub provisioning: ProvisioningConfig,
    #[serde(default)]
    pub authenticators: Vec<AuthenticatorListItem>,
}

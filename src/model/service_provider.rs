//! Resident service provider record.

use serde::{Deserialize, Serialize};

/// Name of the tenant's resident service provider.
pub const LOCAL_SP: &str = "LOCAL";

/// Inbound provisioning settings of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundProvisioningConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_user_store: Option<String>,
    #[serde(default)]
    pub provisioning_enabled: bool,
    /// Proxy mode: provisioned users are not persisted locally.
    #[serde(default)]
    pub proxy_mode: bool,
}

/// An application registered in a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub application_name: String,
    pub application_resource_id: String,
    #[serde(default)]
    pub inbound_provisioning_config: InboundProvisioningConfig,
}

impl ServiceProvider {
    pub fn new(
        application_name: impl Into<String>,
        application_resource_id: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            application_resource_id: application_resource_id.into(),
            inbound_provisioning_config: InboundProvisioningConfig::default(),
        }
    }

    /// Create the resident service provider with a generated resource id.
    pub fn resident() -> Self {
        Self::new(LOCAL_SP, uuid::Uuid::new_v4().to_string())
    }

    pub fn with_inbound_provisioning(mut self, config: InboundProvisioningConfig) -> Self {
        self.inbound_provisioning_config = config;
        self
    }
}

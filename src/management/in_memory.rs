//! In-memory identity platform.
//!
//! Implements both management traits on top of a map of per-tenant records
//! guarded by a tokio `RwLock`. Intended for testing, development and offline
//! tooling; nothing is persisted.
//!
//! # Example Usage
//!
//! ```rust
//! use identity_server_configs::management::{ApplicationManagementService, InMemoryIdentityPlatform};
//! use identity_server_configs::model::{LocalAuthenticatorConfig, ServiceProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let platform = InMemoryIdentityPlatform::new();
//! platform
//!     .register_local_authenticator("wso2.com", LocalAuthenticatorConfig::new("totp", "TOTP"))
//!     .await;
//! platform.insert_application("wso2.com", ServiceProvider::resident()).await;
//!
//! let authenticators = platform.get_all_local_authenticators("wso2.com").await?;
//! assert_eq!(authenticators.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::management::{
    ApplicationManagementService, IdentityProviderManager, ManagementError, ManagementResult,
};
use crate::model::{LocalAuthenticatorConfig, ResidentIdentityProvider, ServiceProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error code reported when an application resource id is unknown.
pub const APPLICATION_NOT_FOUND_CODE: &str = "APP-60006";

#[derive(Debug, Clone, Default)]
struct TenantRecords {
    resident_idp: Option<ResidentIdentityProvider>,
    // application name -> application
    applications: HashMap<String, ServiceProvider>,
    authenticators: Vec<LocalAuthenticatorConfig>,
}

/// Thread-safe in-memory implementation of the management backends.
#[derive(Clone, Default)]
pub struct InMemoryIdentityPlatform {
    // tenant domain -> records
    tenants: Arc<RwLock<HashMap<String, TenantRecords>>>,
}

impl InMemoryIdentityPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a platform with a standard tenant: empty resident identity
    /// provider and a resident service provider.
    pub async fn with_tenant(tenant_domain: &str) -> Self {
        let platform = Self::new();
        platform
            .insert_resident_idp(tenant_domain, ResidentIdentityProvider::new())
            .await;
        platform
            .insert_application(tenant_domain, ServiceProvider::resident())
            .await;
        platform
    }

    pub async fn insert_resident_idp(&self, tenant_domain: &str, idp: ResidentIdentityProvider) {
        let mut tenants = self.tenants.write().await;
        tenants
            .entry(tenant_domain.to_string())
            .or_default()
            .resident_idp = Some(idp);
    }

    /// Store an application, replacing any application with the same name.
    pub async fn insert_application(&self, tenant_domain: &str, application: ServiceProvider) {
        let mut tenants = self.tenants.write().await;
        tenants
            .entry(tenant_domain.to_string())
            .or_default()
            .applications
            .insert(application.application_name.clone(), application);
    }

    pub async fn register_local_authenticator(
        &self,
        tenant_domain: &str,
        authenticator: LocalAuthenticatorConfig,
    ) {
        let mut tenants = self.tenants.write().await;
        tenants
            .entry(tenant_domain.to_string())
            .or_default()
            .authenticators
            .push(authenticator);
    }

    /// Get platform statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryPlatformStats {
        let tenants = self.tenants.read().await;
        InMemoryPlatformStats {
            tenant_count: tenants.len(),
            application_count: tenants.values().map(|t| t.applications.len()).sum(),
            authenticator_count: tenants.values().map(|t| t.authenticators.len()).sum(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        self.tenants.write().await.clear();
    }
}

impl IdentityProviderManager for InMemoryIdentityPlatform {
    async fn get_resident_idp(
        &self,
        tenant_domain: &str,
    ) -> ManagementResult<Option<ResidentIdentityProvider>> {
        let tenants = self.tenants.read().await;
        Ok(tenants
            .get(tenant_domain)
            .and_then(|t| t.resident_idp.clone()))
    }

    async fn update_resident_idp(
        &self,
        idp: ResidentIdentityProvider,
        tenant_domain: &str,
    ) -> ManagementResult<()> {
        self.insert_resident_idp(tenant_domain, idp).await;
        Ok(())
    }
}

impl ApplicationManagementService for InMemoryIdentityPlatform {
    async fn get_all_local_authenticators(
        &self,
        tenant_domain: &str,
    ) -> ManagementResult<Vec<LocalAuthenticatorConfig>> {
        let tenants = self.tenants.read().await;
        Ok(tenants
            .get(tenant_domain)
            .map(|t| t.authenticators.clone())
            .unwrap_or_default())
    }

    async fn get_service_provider(
        &self,
        application_name: &str,
        tenant_domain: &str,
    ) -> ManagementResult<Option<ServiceProvider>> {
        let tenants = self.tenants.read().await;
        Ok(tenants
            .get(tenant_domain)
            .and_then(|t| t.applications.get(application_name))
            .cloned())
    }

    async fn update_application_by_resource_id(
        &self,
        resource_id: &str,
        application: ServiceProvider,
        tenant_domain: &str,
        _username: &str,
    ) -> ManagementResult<()> {
        let mut tenants = self.tenants.write().await;
        let applications = &mut tenants
            .get_mut(tenant_domain)
            .ok_or_else(|| application_not_found(resource_id))?
            .applications;

        let existing_name = applications
            .values()
            .find(|app| app.application_resource_id == resource_id)
            .map(|app| app.application_name.clone())
            .ok_or_else(|| application_not_found(resource_id))?;

        applications.remove(&existing_name);
        applications.insert(application.application_name.clone(), application);
        Ok(())
    }
}

fn application_not_found(resource_id: &str) -> ManagementError {
    ManagementError::client(
        Some(APPLICATION_NOT_FOUND_CODE),
        format!("Unable to find an application with the resource id: {}", resource_id),
    )
}

/// Statistics about the in-memory platform state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPlatformStats {
    pub tenant_count: usize,
    pub application_count: usize,
    pub authenticator_count: usize,
}

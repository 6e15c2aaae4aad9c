//! Common test utilities for configuration service testing.
//!
//! Fixtures for a populated tenant, a failing backend double and logging
//! setup shared by the integration test files.

#![allow(dead_code)]

use identity_server_configs::config::ServiceConfig;
use identity_server_configs::management::{
    ApplicationManagementService, IdentityProviderManager, InMemoryIdentityPlatform,
    ManagementError, ManagementResult,
};
use identity_server_configs::model::{
    LocalAuthenticatorConfig, ResidentIdentityProvider, ServiceProvider,
};
use identity_server_configs::ServerConfigManagementService;

pub const TENANT: &str = "wso2.com";
pub const SUPER_TENANT: &str = "carbon.super";
pub const RESIDENT_SP_RESOURCE_ID: &str = "6a0a5f4f-7c4d-4d55-9a0e-0f8a4b1c2d3e";

pub type InMemoryService =
    ServerConfigManagementService<InMemoryIdentityPlatform, InMemoryIdentityPlatform>;

/// Install a test logger once. Repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn home_realms(idp: &ResidentIdentityProvider) -> Vec<String> {
    identity_server_configs::patch::HomeRealmIdentifiers::parse(idp.home_realm_id.as_deref())
        .into_vec()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Resident identity provider with session settings and two home realms.
pub fn resident_idp() -> ResidentIdentityProvider {
    ResidentIdentityProvider::new()
        .with_home_realm_id("localhost,iam.example.com")
        .with_property("SessionIdleTimeout", "15")
        .with_property("RememberMeTimeout", "20160")
}

pub fn resident_service_provider() -> ServiceProvider {
    ServiceProvider::new("LOCAL", RESIDENT_SP_RESOURCE_ID)
}

pub fn local_authenticators() -> Vec<LocalAuthenticatorConfig> {
    vec![
        LocalAuthenticatorConfig::new("BasicAuthenticator", "Username & Password"),
        LocalAuthenticatorConfig::new("totp", "TOTP").with_property("encodingMethod", "Base32"),
        LocalAuthenticatorConfig::new("email-otp-authenticator", "Email OTP").with_enabled(false),
    ]
}

/// Platform with a fully populated tenant.
pub async fn populated_platform(tenant_domain: &str) -> InMemoryIdentityPlatform {
    let platform = InMemoryIdentityPlatform::new();
    platform.insert_resident_idp(tenant_domain, resident_idp()).await;
    platform
        .insert_application(tenant_domain, resident_service_provider())
        .await;
    for authenticator in local_authenticators() {
        platform
            .register_local_authenticator(tenant_domain, authenticator)
            .await;
    }
    platform
}

pub async fn populated_service() -> (InMemoryService, InMemoryIdentityPlatform) {
    init_logging();
    let platform = populated_platform(TENANT).await;
    let service = ServerConfigManagementService::new(
        platform.clone(),
        platform.clone(),
        ServiceConfig::default(),
    );
    (service, platform)
}

/// Backend double that serves reads from an in-memory platform and fails
/// every write, and every read when `fail_reads` is set, with `error`.
#[derive(Clone)]
pub struct FailingPlatform {
    pub inner: InMemoryIdentityPlatform,
    pub error: ManagementError,
    pub fail_reads: bool,
    pub fail_listing: bool,
}

impl FailingPlatform {
    pub fn on_write(inner: InMemoryIdentityPlatform, error: ManagementError) -> Self {
        Self {
            inner,
            error,
            fail_reads: false,
            fail_listing: false,
        }
    }

    /// Fail only the local authenticator listing (and writes).
    pub fn on_listing(inner: InMemoryIdentityPlatform, error: ManagementError) -> Self {
        Self {
            inner,
            error,
            fail_reads: false,
            fail_listing: true,
        }
    }

    pub fn always(inner: InMemoryIdentityPlatform, error: ManagementError) -> Self {
        Self {
            inner,
            error,
            fail_reads: true,
            fail_listing: true,
        }
    }

    fn check_read(&self) -> ManagementResult<()> {
        if self.fail_reads {
            Err(self.error.clone())
        } else {
            Ok(())
        }
    }
}

impl IdentityProviderManager for FailingPlatform {
    async fn get_resident_idp(
        &self,
        tenant_domain: &str,
    ) -> ManagementResult<Option<ResidentIdentityProvider>> {
        self.check_read()?;
        self.inner.get_resident_idp(tenant_domain).await
    }

    async fn update_resident_idp(
        &self,
        _idp: ResidentIdentityProvider,
        _tenant_domain: &str,
    ) -> ManagementResult<()> {
        Err(self.error.clone())
    }
}

impl ApplicationManagementService for FailingPlatform {
    async fn get_all_local_authenticators(
        &self,
        tenant_domain: &str,
    ) -> ManagementResult<Vec<LocalAuthenticatorConfig>> {
        self.check_read()?;
        if self.fail_listing {
            return Err(self.error.clone());
        }
        self.inner.get_all_local_authenticators(tenant_domain).await
    }

    async fn get_service_provider(
        &self,
        application_name: &str,
        tenant_domain: &str,
    ) -> ManagementResult<Option<ServiceProvider>> {
        self.check_read()?;
        self.inner
            .get_service_provider(application_name, tenant_domain)
            .await
    }

    async fn update_application_by_resource_id(
        &self,
        _resource_id: &str,
        _application: ServiceProvider,
        _tenant_domain: &str,
        _username: &str,
    ) -> ManagementResult<()> {
        Err(self.error.clone())
    }
}

pub type FailingService = ServerConfigManagementService<FailingPlatform, FailingPlatform>;

pub async fn failing_service(platform: FailingPlatform) -> FailingService {
    init_logging();
    ServerConfigManagementService::new(platform.clone(), platform, ServiceConfig::default())
}

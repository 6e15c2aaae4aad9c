//! Management collaborators.
//!
//! The configuration service does not own any data. It reads and writes
//! through two management backends:
//!
//! * [`IdentityProviderManager`] - the tenant's resident identity provider
//! * [`ApplicationManagementService`] - applications and local authenticators
//!
//! Both report failures as [`ManagementError`], classified as client or
//! server caused so that the API can answer with the matching status.
//! [`InMemoryIdentityPlatform`] implements both traits for tests,
//! development and the offline tooling.
//!
//! # Example
//!
//! ```rust
//! use identity_server_configs::management::{IdentityProviderManager, InMemoryIdentityPlatform};
//! use identity_server_configs::model::ResidentIdentityProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let platform = InMemoryIdentityPlatform::new();
//! platform
//!     .update_resident_idp(ResidentIdentityProvider::new(), "wso2.com")
//!     .await?;
//!
//! let idp = platform.get_resident_idp("wso2.com").await?;
//! assert!(idp.is_some());
//! # Ok(())
//! # }
//! ```

pub mod in_memory;

pub use in_memory::{InMemoryIdentityPlatform, InMemoryPlatformStats};

use crate::model::{LocalAuthenticatorConfig, ResidentIdentityProvider, ServiceProvider};
use std::fmt;
use std::future::Future;

/// Who caused a management failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagementErrorKind {
    /// The request was invalid for the backend.
    Client,
    /// The backend failed.
    Server,
    /// The backend did not classify the failure.
    Unclassified,
}

impl fmt::Display for ManagementErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ManagementErrorKind::Client => "client",
            ManagementErrorKind::Server => "server",
            ManagementErrorKind::Unclassified => "unclassified",
        };
        f.write_str(kind)
    }
}

/// Error reported by a management backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ManagementError {
    pub kind: ManagementErrorKind,
    /// Backend error code, if any
    pub code: Option<String>,
    pub message: String,
}

impl ManagementError {
    pub fn client(code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind: ManagementErrorKind::Client,
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn server(code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind: ManagementErrorKind::Server,
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            kind: ManagementErrorKind::Unclassified,
            code: None,
            message: message.into(),
        }
    }
}

pub type ManagementResult<T> = Result<T, ManagementError>;

/// Access to the tenant's resident identity provider.
pub trait IdentityProviderManager: Send + Sync {
    /// Fetch the resident identity provider of a tenant.
    ///
    /// `None` means the backend has no resident identity provider for the
    /// tenant, which only happens when the backend is inconsistent.
    fn get_resident_idp(
        &self,
        tenant_domain: &str,
    ) -> impl Future<Output = ManagementResult<Option<ResidentIdentityProvider>>> + Send;

    /// Replace the resident identity provider of a tenant.
    fn update_resident_idp(
        &self,
        idp: ResidentIdentityProvider,
        tenant_domain: &str,
    ) -> impl Future<Output = ManagementResult<()>> + Send;
}

/// Access to applications and local authenticators.
pub trait ApplicationManagementService: Send + Sync {
    /// All local authenticators available in a tenant.
    fn get_all_local_authenticators(
        &self,
        tenant_domain: &str,
    ) -> impl Future<Output = ManagementResult<Vec<LocalAuthenticatorConfig>>> + Send;

    /// Fetch an application by name.
    fn get_service_provider(
        &self,
        application_name: &str,
        tenant_domain: &str,
    ) -> impl Future<Output = ManagementResult<Option<ServiceProvider>>> + Send;

    /// Replace the application identified by `resource_id`.
    fn update_application_by_resource_id(
        &self,
        resource_id: &str,
        application: ServiceProvider,
        tenant_domain: &str,
        username: &str,
    ) -> impl Future<Output = ManagementResult<()>> + Send;
}

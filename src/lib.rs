//! Identity server configuration management for Rust.
//!
//! Provides a tenant-scoped configuration API over an identity server:
//! session settings and home realm identifiers of the resident identity
//! provider, inbound SCIM provisioning of the resident application, and a
//! read-only view of local authenticators. Changes to the resident identity
//! provider are expressed as JSON-Patch style operations and applied by a
//! pure patch engine.
//!
//! # Core Components
//!
//! - [`ServerConfigManagementService`] - Configuration operations for a tenant
//! - [`patch::apply_patches`] - Patch engine for the resident identity provider
//! - [`management`] - Traits for the identity provider and application backends
//! - [`handler::ConfigOperationHandler`] - Transport-agnostic request dispatcher
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use identity_server_configs::context::RequestContext;
//! use identity_server_configs::management::InMemoryIdentityPlatform;
//! use identity_server_configs::model::Patch;
//! use identity_server_configs::ServerConfigServiceBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let platform = InMemoryIdentityPlatform::with_tenant("carbon.super").await;
//! let service = ServerConfigServiceBuilder::new(platform.clone(), platform).build()?;
//!
//! let context = RequestContext::super_tenant();
//! service
//!     .patch_configs(&[Patch::replace("/rememberMePeriod", "20160")], &context)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod management;
pub mod model;
pub mod patch;
pub mod service;

// Re-export commonly used types for convenience
pub use config::{ServerConfigServiceBuilder, ServiceConfig};
pub use context::RequestContext;
pub use error::{BuildError, BuildResult, ConfigError, ConfigResult, ErrorMessage};
pub use service::ServerConfigManagementService;

pub use handler::{
    ConfigOperationHandler, ConfigOperationRequest, ConfigOperationResponse, ConfigOperationType,
};
pub use management::{ApplicationManagementService, IdentityProviderManager, ManagementError};
pub use model::{Patch, PatchOperation, ScimConfig, ServerConfig};
pub use patch::{PatchError, apply_patches};

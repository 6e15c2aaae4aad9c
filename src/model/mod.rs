//! Domain records and API views.
//!
//! # Records (owned by the management backends)
//!
//! * [`ResidentIdentityProvider`] - session settings and home realm identifiers
//! * [`ServiceProvider`] - resident application with inbound provisioning settings
//! * [`LocalAuthenticatorConfig`] - local authenticator definitions
//!
//! # API views
//!
//! * [`ServerConfig`], [`ScimConfig`], [`AuthenticatorListItem`], [`Authenticator`]
//! * [`Patch`] - a single patch operation of a patch request

pub mod authenticator;
pub mod authenticator_id;
pub mod identity_provider;
pub mod patch;
pub mod server_config;
pub mod service_provider;

pub use authenticator::{
    Authenticator, AuthenticatorListItem, AuthenticatorProperty, LocalAuthenticatorConfig,
};
pub use authenticator_id::AuthenticatorId;
pub use identity_provider::{
    FederatedAuthenticatorConfig, IdentityProviderProperty, Property, REMEMBER_ME_TIME_OUT,
    RESIDENT_IDP_NAME, ResidentIdentityProvider, SESSION_IDLE_TIME_OUT,
};
pub use patch::{Patch, PatchOperation};
pub use server_config::{InboundConfig, ProvisioningConfig, ScimConfig, ServerConfig};
pub use service_provider::{InboundProvisioningConfig, LOCAL_SP, ServiceProvider};

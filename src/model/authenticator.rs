//! Local authenticator records and their API views.

use crate::model::AuthenticatorId;
use crate::model::identity_provider::Property;
use serde::{Deserialize, Serialize};

/// A local authenticator as defined by the application management backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAuthenticatorConfig {
    /// Unique name of the authenticator.
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl LocalAuthenticatorConfig {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            enabled: true,
            properties: Vec::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    pub fn id(&self) -> AuthenticatorId {
        AuthenticatorId::from_name(&self.name)
    }
}

/// List view of an authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorListItem {
    pub id: AuthenticatorId,
    pub name: String,
    pub display_name: String,
    pub is_enabled: bool,
    /// Location of the authenticator resource.
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Authenticator property as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorProperty {
    pub key: String,
    pub value: String,
}

impl From<&Property> for AuthenticatorProperty {
    fn from(property: &Property) -> Self {
        Self {
            key: property.name.clone(),
            value: property.value.clone(),
        }
    }
}

/// Full view of a single authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authenticator {
    pub id: AuthenticatorId,
    pub name: String,
    pub display_name: String,
    pub is_enabled: bool,
    pub properties: Vec<AuthenticatorProperty>,
}

impl From<&LocalAuthenticatorConfig> for Authenticator {
    fn from(config: &LocalAuthenticatorConfig) -> Self {
        Self {
            id: config.id(),
            name: config.name.clone(),
            display_name: config.display_name.clone(),
            is_enabled: config.enabled,
            properties: config.properties.iter().map(AuthenticatorProperty::from).collect(),
        }
    }
}

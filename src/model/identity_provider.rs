//! Resident identity provider record.
//!
//! The resident identity provider is the tenant's implicit identity provider.
//! It carries the session settings as a property bag and the home realm
//! identifiers as a single comma-joined string.

use serde::{Deserialize, Serialize};

/// Property key holding the session idle timeout (minutes).
pub const SESSION_IDLE_TIME_OUT: &str = "SessionIdleTimeout";

/// Property key holding the remember-me period (minutes).
pub const REMEMBER_ME_TIME_OUT: &str = "RememberMeTimeout";

/// Name of the resident identity provider.
pub const RESIDENT_IDP_NAME: &str = "LOCAL";

/// A key/value property of an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderProperty {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub value: String,
}

impl IdentityProviderProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            value: value.into(),
        }
    }
}

/// A plain name/value property used by authenticator configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Federated authenticator configured on an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedAuthenticatorConfig {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// The tenant's resident identity provider.
///
/// Values of this type are treated as immutable snapshots by the patch
/// engine: patching produces a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentIdentityProvider {
    #[serde(default = "default_idp_name")]
    pub identity_provider_name: String,
    /// Comma-joined home realm identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_realm_id: Option<String>,
    #[serde(default)]
    pub idp_properties: Vec<IdentityProviderProperty>,
    #[serde(default)]
    pub federated_authenticator_configs: Vec<FederatedAuthenticatorConfig>,
}

fn default_idp_name() -> String {
    RESIDENT_IDP_NAME.to_string()
}

impl Default for ResidentIdentityProvider {
    fn default() -> Self {
        Self {
            identity_provider_name: default_idp_name(),
            home_realm_id: None,
            idp_properties: Vec::new(),
            federated_authenticator_configs: Vec::new(),
        }
    }
}

impl ResidentIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comma-joined home realm string.
    pub fn with_home_realm_id(mut self, home_realm_id: impl Into<String>) -> Self {
        self.home_realm_id = Some(home_realm_id.into());
        self
    }

    /// Set a property, replacing any existing value for the key.
    pub fn with_property(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn with_federated_authenticator(mut self, config: FederatedAuthenticatorConfig) -> Self {
        self.federated_authenticator_configs.push(config);
        self
    }

    /// Value of the first property with the given key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.idp_properties
            .iter()
            .find(|p| p.name == key)
            .map(|p| p.value.as_str())
    }

    /// Update every property with the given key, or append a new property
    /// when none exists.
    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        for property in self.idp_properties.iter_mut().filter(|p| p.name == key) {
            property.value = value.clone();
            found = true;
        }
        if !found {
            self.idp_properties
                .push(IdentityProviderProperty::new(key, value));
        }
    }

    pub fn idle_session_timeout(&self) -> Option<&str> {
        self.property(SESSION_IDLE_TIME_OUT)
    }

    pub fn remember_me_period(&self) -> Option<&str> {
        self.property(REMEMBER_ME_TIME_OUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_property_appends_when_absent() {
        let mut idp = ResidentIdentityProvider::new();
        idp.set_property(SESSION_IDLE_TIME_OUT, "15");

        assert_eq!(idp.idp_properties.len(), 1);
        assert_eq!(idp.idp_properties[0].display_name, SESSION_IDLE_TIME_OUT);
        assert_eq!(idp.idle_session_timeout(), Some("15"));
        assert_eq!(idp.remember_me_period(), None);
    }

    #[test]
    fn test_set_property_updates_every_match() {
        let mut idp = ResidentIdentityProvider::new();
        idp.idp_properties
            .push(IdentityProviderProperty::new(REMEMBER_ME_TIME_OUT, "1"));
        idp.idp_properties
            .push(IdentityProviderProperty::new("Other", "x"));
        idp.idp_properties
            .push(IdentityProviderProperty::new(REMEMBER_ME_TIME_OUT, "2"));

        idp.set_property(REMEMBER_ME_TIME_OUT, "20160");

        assert_eq!(idp.idp_properties.len(), 3);
        assert!(
            idp.idp_properties
                .iter()
                .filter(|p| p.name == REMEMBER_ME_TIME_OUT)
                .all(|p| p.value == "20160")
        );
        assert_eq!(idp.property("Other"), Some("x"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let idp: ResidentIdentityProvider = serde_json::from_value(json!({
            "homeRealmId": "a,b",
            "idpProperties": [{"name": "SessionIdleTimeout", "value": "15"}]
        }))
        .unwrap();

        assert_eq!(idp.identity_provider_name, RESIDENT_IDP_NAME);
        assert_eq!(idp.home_realm_id.as_deref(), Some("a,b"));
        assert_eq!(idp.idle_session_timeout(), Some("15"));
        assert!(idp.federated_authenticator_configs.is_empty());
    }
}

//! AuthenticatorId value object for authenticator resource identifiers.
//!
//! Authenticators are identified by their unique name in the management
//! backends. The API exposes them through an opaque id derived from that
//! name. The mapping is bidirectional:
//!
//! - **Encoding**: UTF-8 bytes of the name, URL-safe base64 alphabet
//!   (`A-Z a-z 0-9 - _`), no `=` padding. The id is therefore safe to embed
//!   in a URL path segment without escaping.
//! - **Decoding**: the inverse. Ids that are not valid unpadded URL-safe
//!   base64, or that decode to invalid UTF-8, have no corresponding name.
//!
//! ```rust
//! use identity_server_configs::model::AuthenticatorId;
//!
//! let id = AuthenticatorId::from_name("BasicAuthenticator");
//! assert_eq!(id.as_str(), "QmFzaWNBdXRoZW50aWNhdG9y");
//! assert_eq!(id.to_name().as_deref(), Some("BasicAuthenticator"));
//! ```

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a local authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthenticatorId(String);

impl AuthenticatorId {
    /// Derive the id of an authenticator from its unique name.
    pub fn from_name(name: &str) -> Self {
        Self(URL_SAFE_NO_PAD.encode(name.as_bytes()))
    }

    /// Wrap an id received from a client. No validation is performed; an
    /// id that does not decode simply matches no authenticator.
    pub fn parse(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Decode the id back to the authenticator name.
    pub fn to_name(&self) -> Option<String> {
        let bytes = URL_SAFE_NO_PAD.decode(self.0.as_bytes()).ok()?;
        String::from_utf8(bytes).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthenticatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

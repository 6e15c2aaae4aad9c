//! Request context for configuration operations.
//!
//! Authentication and tenant resolution happen before a request reaches this
//! crate. The resolved tenant domain and user are carried in a
//! [`RequestContext`] together with a request id used for log correlation and
//! as the trace id of error responses.

use uuid::Uuid;

/// Tenant domain of the super tenant.
pub const SUPER_TENANT_DOMAIN: &str = "carbon.super";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
    /// Tenant the request operates on
    pub tenant_domain: String,
    /// Authenticated user, if known
    pub username: Option<String>,
}

impl RequestContext {
    /// Create a context for a tenant with a generated request ID.
    pub fn new(tenant_domain: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            tenant_domain: tenant_domain.into(),
            username: None,
        }
    }

    /// Create a context for the super tenant.
    pub fn super_tenant() -> Self {
        Self::new(SUPER_TENANT_DOMAIN)
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn tenant_domain(&self) -> &str {
        &self.tenant_domain
    }

    /// Username, or an empty string for anonymous calls.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::super_tenant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_are_unique() {
        let first = RequestContext::new("wso2.com");
        let second = RequestContext::new("wso2.com");
        assert_ne!(first.request_id, second.request_id);
        assert!(Uuid::parse_str(&first.request_id).is_ok());
    }

    #[test]
    fn test_builders() {
        let context = RequestContext::new("acme.com")
            .with_request_id("req-1")
            .with_username("admin");
        assert_eq!(context.request_id, "req-1");
        assert_eq!(context.tenant_domain(), "acme.com");
        assert_eq!(context.username(), "admin");
        assert_eq!(RequestContext::default().tenant_domain(), SUPER_TENANT_DOMAIN);
        assert_eq!(RequestContext::super_tenant().username(), "");
    }
}

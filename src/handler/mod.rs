//! Framework-agnostic configuration operation handler.
//!
//! Wraps a [`ServerConfigManagementService`](crate::ServerConfigManagementService)
//! behind a single `handle_operation` entry point taking a structured request
//! and answering with an HTTP-style status, JSON data and a formatted error
//! body. HTTP servers, message consumers and the CLI all sit on top of this
//! layer.
//!
//! # Key Types
//!
//! - [`ConfigOperationHandler`] - Main handler for processing configuration operations
//! - [`ConfigOperationRequest`] - Structured request with tenant, user and payload
//! - [`ConfigOperationResponse`] - Response with status, data and error body
//!
//! # Examples
//!
//! ```rust
//! use identity_server_configs::handler::{ConfigOperationHandler, ConfigOperationRequest, HttpStatus};
//! use identity_server_configs::management::InMemoryIdentityPlatform;
//! use identity_server_configs::ServerConfigServiceBuilder;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let platform = InMemoryIdentityPlatform::with_tenant("wso2.com").await;
//! let service = ServerConfigServiceBuilder::new(platform.clone(), platform).build()?;
//! let handler = ConfigOperationHandler::new(service);
//!
//! let request = ConfigOperationRequest::patch_configs(
//!     "wso2.com",
//!     json!([{"operation": "REPLACE", "path": "/idleSessionTimeoutPeriod", "value": "30"}]),
//! );
//! let response = handler.handle_operation(request).await;
//! assert_eq!(response.status, HttpStatus::Ok);
//! # Ok(())
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;

pub use self::core::{
    ConfigOperationHandler, ConfigOperationRequest, ConfigOperationResponse, ConfigOperationType,
};
pub use errors::{ErrorResponse, HttpStatus, create_error_response};

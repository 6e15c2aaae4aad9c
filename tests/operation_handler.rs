//! Operation handler tests
//!
//! Drives the transport-agnostic handler with JSON payloads and checks
//! statuses, response bodies and error bodies.

mod common;

use common::{FailingPlatform, TENANT, failing_service, populated_platform, populated_service};
use identity_server_configs::handler::{
    ConfigOperationHandler, ConfigOperationRequest, ConfigOperationType, HttpStatus,
};
use identity_server_configs::management::ManagementError;
use serde_json::json;

async fn handler() -> ConfigOperationHandler<
    identity_server_configs::management::InMemoryIdentityPlatform,
    identity_server_configs::management::InMemoryIdentityPlatform,
> {
    let (service, _) = populated_service().await;
    ConfigOperationHandler::new(service)
}

#[tokio::test]
async fn test_get_configs_response_body() {
    let handler = handler().await;
    let response = handler
        .handle_operation(ConfigOperationRequest::get_configs(TENANT))
        .await;

    assert!(response.is_success());
    assert_eq!(response.status.code(), 200);
    let data = response.data.unwrap();
    assert_eq!(data["idleSessionTimeoutPeriod"], "15");
    assert_eq!(data["rememberMePeriod"], "20160");
    assert_eq!(data["homeRealmIdentifiers"], json!(["localhost", "iam.example.com"]));
    assert_eq!(data["provisioning"]["inbound"]["scim"]["enableProxyMode"], false);
    assert_eq!(data["authenticators"].as_array().unwrap().len(), 3);
    assert!(
        data["authenticators"][0]["self"]
            .as_str()
            .unwrap()
            .ends_with("/configs/authenticators/QmFzaWNBdXRoZW50aWNhdG9y")
    );
}

#[tokio::test]
async fn test_patch_configs_request() {
    let handler = handler().await;
    let response = handler
        .handle_operation(ConfigOperationRequest::patch_configs(
            TENANT,
            json!([
                {"operation": "REPLACE", "path": "/idleSessionTimeoutPeriod", "value": "30"},
                {"op": "add", "path": "/homeRealmIdentifiers/0", "value": "sso.example.com"}
            ]),
        ))
        .await;
    assert_eq!(response.status, HttpStatus::Ok);
    assert_eq!(response.data, None);
    assert_eq!(response.error, None);

    let configs = handler
        .handle_operation(ConfigOperationRequest::get_configs(TENANT))
        .await
        .data
        .unwrap();
    assert_eq!(configs["idleSessionTimeoutPeriod"], "30");
    assert_eq!(configs["homeRealmIdentifiers"][0], "sso.example.com");
}

#[tokio::test]
async fn test_invalid_patch_is_bad_request() {
    let handler = handler().await;
    let response = handler
        .handle_operation(
            ConfigOperationRequest::patch_configs(
                TENANT,
                json!([{"operation": "MOVE", "path": "/homeRealmIdentifiers/0", "value": "x"}]),
            )
            .with_request_id("req-42"),
        )
        .await;

    assert_eq!(response.status, HttpStatus::BadRequest);
    assert_eq!(response.request_id, "req-42");
    let error = response.error.unwrap();
    assert_eq!(error.code, "CNF-60001");
    assert_eq!(error.message, "Invalid input.");
    assert!(error.description.starts_with("Invalid input provided."));
    assert_eq!(error.trace_id, "req-42");
}

#[tokio::test]
async fn test_malformed_payloads_are_bad_request() {
    let handler = handler().await;
    let requests = [
        ConfigOperationRequest::patch_configs(TENANT, json!({"operation": "REPLACE"})),
        ConfigOperationRequest::patch_configs(TENANT, json!([{"path": "/rememberMePeriod"}])),
        ConfigOperationRequest::update_inbound_scim_config(
            TENANT,
            json!({"enableProxyMode": "yes"}),
        ),
        ConfigOperationRequest {
            data: None,
            ..ConfigOperationRequest::patch_configs(TENANT, json!([]))
        },
        ConfigOperationRequest {
            authenticator_id: None,
            ..ConfigOperationRequest::get_authenticator(TENANT, "dG90cA")
        },
    ];

    for request in requests {
        let operation = request.operation;
        let response = handler.handle_operation(request).await;
        assert_eq!(response.status, HttpStatus::BadRequest, "{:?}", operation);
        assert_eq!(response.error.unwrap().code, "CNF-60001");
    }
}

#[tokio::test]
async fn test_authenticator_lookup() {
    let handler = handler().await;

    let response = handler
        .handle_operation(ConfigOperationRequest::get_authenticator(TENANT, "dG90cA"))
        .await;
    assert_eq!(response.status, HttpStatus::Ok);
    let data = response.data.unwrap();
    assert_eq!(data["name"], "totp");
    assert_eq!(data["properties"][0]["key"], "encodingMethod");

    let response = handler
        .handle_operation(ConfigOperationRequest::get_authenticator(TENANT, "bm9wZQ"))
        .await;
    assert_eq!(response.status, HttpStatus::NotFound);
    let error = response.error.unwrap();
    assert_eq!(error.code, "CNF-60002");
    assert_eq!(error.message, "Resource not found.");
    assert_eq!(
        error.description,
        "Unable to find an authenticator with the id: bm9wZQ"
    );
}

#[tokio::test]
async fn test_list_authenticators() {
    let handler = handler().await;
    let response = handler
        .handle_operation(ConfigOperationRequest::list_authenticators(TENANT))
        .await;
    let data = response.data.unwrap();
    let names: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["BasicAuthenticator", "totp", "email-otp-authenticator"]
    );
    assert_eq!(data[2]["isEnabled"], false);
}

#[tokio::test]
async fn test_scim_config_round_trip() {
    let handler = handler().await;
    let response = handler
        .handle_operation(
            ConfigOperationRequest::update_inbound_scim_config(
                TENANT,
                json!({"enableProxyMode": false, "provisioningUserstore": "SECONDARY"}),
            )
            .with_username("admin"),
        )
        .await;
    assert_eq!(response.status, HttpStatus::Ok);

    let response = handler
        .handle_operation(ConfigOperationRequest::get_inbound_scim_config(TENANT))
        .await;
    assert_eq!(
        response.data.unwrap(),
        json!({"enableProxyMode": false, "provisioningUserstore": "SECONDARY"})
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let handler = handler().await;
    let response = handler
        .handle_operation(ConfigOperationRequest::get_authenticator(TENANT, "bm9wZQ"))
        .await;
    assert!(uuid::Uuid::parse_str(&response.request_id).is_ok());
    assert_eq!(response.error.unwrap().trace_id, response.request_id);
}

#[tokio::test]
async fn test_upstream_errors_map_to_status() {
    let inner = populated_platform(TENANT).await;
    let handler = ConfigOperationHandler::new(
        failing_service(FailingPlatform::on_write(
            inner.clone(),
            ManagementError::client(Some("60010"), "Home realm identifier already in use"),
        ))
        .await,
    );
    let response = handler
        .handle_operation(ConfigOperationRequest::patch_configs(
            TENANT,
            json!([{"operation": "ADD", "path": "/homeRealmIdentifiers/0", "value": "dup"}]),
        ))
        .await;
    assert_eq!(response.status, HttpStatus::BadRequest);
    let error = response.error.unwrap();
    assert_eq!(error.code, "CNF-60010");
    assert_eq!(error.message, "Unable to update configurations.");
    assert_eq!(error.description, "Home realm identifier already in use");

    let handler = ConfigOperationHandler::new(
        failing_service(FailingPlatform::always(
            inner,
            ManagementError::server(Some("IDP-65002"), "Error while updating resident IdP"),
        ))
        .await,
    );
    let response = handler
        .handle_operation(ConfigOperationRequest::list_authenticators(TENANT))
        .await;
    assert_eq!(response.status, HttpStatus::InternalServerError);
    let error = response.error.unwrap();
    assert_eq!(error.code, "IDP-65002");
    assert_eq!(error.message, "Unable to list authenticators.");
}

#[test]
fn test_request_builders() {
    let request = ConfigOperationRequest::get_authenticator(TENANT, "dG90cA")
        .with_username("admin")
        .with_request_id("req-1");
    assert_eq!(request.operation, ConfigOperationType::GetAuthenticator);
    assert_eq!(request.tenant_domain, TENANT);
    assert_eq!(request.username.as_deref(), Some("admin"));
    assert_eq!(request.request_id.as_deref(), Some("req-1"));
    assert_eq!(request.authenticator_id.as_deref(), Some("dG90cA"));
    assert_eq!(request.data, None);
}

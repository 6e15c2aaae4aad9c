//! Operation handlers
//!
//! One function per operation type. Each returns the JSON body of a
//! successful response (`None` for operations without a body).

use crate::context::RequestContext;
use crate::error::{ConfigError, ConfigResult};
use crate::handler::core::{ConfigOperationHandler, ConfigOperationRequest};
use crate::management::{ApplicationManagementService, IdentityProviderManager};
use crate::model::{Patch, ScimConfig};
use serde_json::Value;

/// Handle get configs operations.
pub async fn handle_get_configs<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let configs = handler.service().get_configs(context).await?;
    Ok(Some(serde_json::to_value(configs)?))
}

/// Handle patch operations.
pub async fn handle_patch_configs<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    request: ConfigOperationRequest,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let data = request
        .data
        .ok_or_else(|| ConfigError::invalid_input("Missing data for patch operation"))?;
    let patches: Vec<Patch> = serde_json::from_value(data)?;

    handler.service().patch_configs(&patches, context).await?;
    Ok(None)
}

/// Handle list authenticators operations.
pub async fn handle_list_authenticators<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let authenticators = handler.service().get_authenticators(context).await?;
    Ok(Some(serde_json::to_value(authenticators)?))
}

/// Handle get authenticator operations.
pub async fn handle_get_authenticator<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    request: ConfigOperationRequest,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let authenticator_id = request
        .authenticator_id
        .ok_or_else(|| ConfigError::invalid_input("Missing authenticator id"))?;

    let authenticator = handler
        .service()
        .get_authenticator(&authenticator_id, context)
        .await?;
    Ok(Some(serde_json::to_value(authenticator)?))
}

/// Handle get inbound SCIM config operations.
pub async fn handle_get_inbound_scim_config<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let scim = handler.service().get_inbound_scim_config(context).await?;
    Ok(Some(serde_json::to_value(scim)?))
}

/// Handle update inbound SCIM config operations.
pub async fn handle_update_inbound_scim_config<I, A>(
    handler: &ConfigOperationHandler<I, A>,
    request: ConfigOperationRequest,
    context: &RequestContext,
) -> ConfigResult<Option<Value>>
where
    I: IdentityProviderManager,
    A: ApplicationManagementService,
{
    let data = request
        .data
        .ok_or_else(|| ConfigError::invalid_input("Missing data for SCIM config update"))?;
    let scim: ScimConfig = serde_json::from_value(data)?;

    handler
        .service()
        .update_inbound_scim_configs(&scim, context)
        .await?;
    Ok(None)
}

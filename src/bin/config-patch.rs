//! # Config Patch
//!
//! A command-line utility that applies a patch document to a resident
//! identity provider record offline, using the same service as the
//! configuration API, and prints the resulting server configuration.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin config-patch resident-idp.json patch.json
//! ```
//!
//! `resident-idp.json` holds a resident identity provider record:
//!
//! ```json
//! {
//!   "homeRealmId": "localhost,example.com",
//!   "idpProperties": [{"name": "SessionIdleTimeout", "value": "15"}]
//! }
//! ```
//!
//! `patch.json` holds the patch operations:
//!
//! ```json
//! [
//!   {"operation": "REPLACE", "path": "/idleSessionTimeoutPeriod", "value": "30"},
//!   {"operation": "REMOVE", "path": "/homeRealmIdentifiers/0"}
//! ]
//! ```
//!
//! ## Output
//!
//! The resulting server configuration, as returned by the configuration API:
//!
//! ```text
//! Applied 2 operation(s)
//!
//! {
//!   "idleSessionTimeoutPeriod": "30",
//!   "homeRealmIdentifiers": ["example.com"],
//!   "provisioning": {"inbound": {"scim": {"enableProxyMode": false}}},
//!   "authenticators": []
//! }
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The patch was applied
//! - `1`: A file could not be read or parsed, or the patch was rejected

use identity_server_configs::context::RequestContext;
use identity_server_configs::management::InMemoryIdentityPlatform;
use identity_server_configs::model::{Patch, ResidentIdentityProvider, ServiceProvider};
use identity_server_configs::ServerConfigServiceBuilder;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

const OFFLINE_TENANT: &str = "carbon.super";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <resident-idp.json> <patch.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} resident-idp.json patch.json", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(Path::new(&args[1]), Path::new(&args[2])).await {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run(idp_path: &Path, patch_path: &Path) -> Result<(), String> {
    let idp: ResidentIdentityProvider = load_json(idp_path)?;
    let patches: Vec<Patch> = load_json(patch_path)?;

    let platform = InMemoryIdentityPlatform::new();
    platform.insert_resident_idp(OFFLINE_TENANT, idp).await;
    platform
        .insert_application(OFFLINE_TENANT, ServiceProvider::resident())
        .await;

    let service = ServerConfigServiceBuilder::new(platform.clone(), platform)
        .build()
        .map_err(|e| e.to_string())?;
    let context = RequestContext::new(OFFLINE_TENANT);

    service
        .patch_configs(&patches, &context)
        .await
        .map_err(|e| format!("Patch rejected: {}", e))?;
    let configs = service
        .get_configs(&context)
        .await
        .map_err(|e| format!("Failed to read configs: {}", e))?;

    println!("Applied {} operation(s)", patches.len());
    println!();

    let output = serde_json::to_string_pretty(&configs)
        .map_err(|e| format!("Failed to serialize result: {}", e))?;
    println!("{}", output);
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
}

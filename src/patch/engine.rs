//! Patch application.

use crate::model::{Patch, ResidentIdentityProvider};
use crate::patch::PatchError;
use crate::patch::command::PatchCommand;
use log::debug;

/// Apply `patches` in order to a copy of `target` and return the patched
/// record.
///
/// Each operation sees the effects of the operations before it. Processing
/// stops at the first failing operation; `target` is never modified, so a
/// failed batch has no effect for the caller.
///
/// # Examples
///
/// ```rust
/// use identity_server_configs::model::{Patch, ResidentIdentityProvider};
/// use identity_server_configs::patch::apply_patches;
///
/// let idp = ResidentIdentityProvider::new().with_home_realm_id("a,b");
/// let patched = apply_patches(&idp, &[
///     Patch::replace("/homeRealmIdentifiers/1", "c"),
///     Patch::replace("/idleSessionTimeoutPeriod", "30"),
/// ]).unwrap();
///
/// assert_eq!(patched.home_realm_id.as_deref(), Some("a,c"));
/// assert_eq!(patched.idle_session_timeout(), Some("30"));
/// assert_eq!(idp.home_realm_id.as_deref(), Some("a,b"));
/// ```
pub fn apply_patches(
    target: &ResidentIdentityProvider,
    patches: &[Patch],
) -> Result<ResidentIdentityProvider, PatchError> {
    let mut working = target.clone();

    for (position, patch) in patches.iter().enumerate() {
        let command = PatchCommand::try_from(patch)?;
        debug!(
            "Applying patch operation {} of {}: {:?}",
            position + 1,
            patches.len(),
            command
        );
        command.apply(&mut working)?;
    }

    Ok(working)
}

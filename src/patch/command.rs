//! Typed patch commands.
//!
//! A wire [`Patch`] is parsed into a [`PatchCommand`] before anything is
//! mutated. Parsing checks everything that does not depend on the current
//! record: the operation/path combination, the index syntax and the numeric
//! value of session settings. Applying checks the index range against the
//! current home realm list.

use crate::model::{Patch, PatchOperation, ResidentIdentityProvider};
use crate::patch::PatchError;
use crate::patch::home_realm::HomeRealmIdentifiers;
use crate::patch::path::{PatchTarget, SessionSetting};
use crate::patch::validation::validate_positive_numeric;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchCommand {
    /// Set a numeric session setting in the property bag.
    ReplaceSessionSetting {
        setting: SessionSetting,
        value: String,
    },
    /// Replace the home realm identifier at `index`.
    ReplaceHomeRealm { index: usize, value: String },
    /// Insert a home realm identifier at `index`; `index == len` appends.
    AddHomeRealm { index: usize, value: String },
    /// Remove the home realm identifier at `index`.
    RemoveHomeRealm { index: usize },
}

impl TryFrom<&Patch> for PatchCommand {
    type Error = PatchError;

    fn try_from(patch: &Patch) -> Result<Self, Self::Error> {
        let path = patch.path.as_str();
        let target = PatchTarget::parse(path)?;

        match (patch.operation, target) {
            (PatchOperation::Replace, Some(PatchTarget::Session(setting))) => {
                let value = require_value(patch)?;
                validate_positive_numeric(path, &value)?;
                Ok(Self::ReplaceSessionSetting { setting, value })
            }
            (PatchOperation::Replace, Some(PatchTarget::HomeRealmIdentifier { index })) => {
                Ok(Self::ReplaceHomeRealm {
                    index,
                    value: require_value(patch)?,
                })
            }
            (PatchOperation::Replace, None) => Err(PatchError::UnsupportedPath {
                path: path.to_string(),
            }),
            (PatchOperation::Add, Some(PatchTarget::HomeRealmIdentifier { index })) => {
                Ok(Self::AddHomeRealm {
                    index,
                    value: require_value(patch)?,
                })
            }
            (PatchOperation::Remove, Some(PatchTarget::HomeRealmIdentifier { index })) => {
                Ok(Self::RemoveHomeRealm { index })
            }
            (operation, _) => Err(PatchError::UnsupportedOperation {
                operation,
                path: path.to_string(),
            }),
        }
    }
}

fn require_value(patch: &Patch) -> Result<String, PatchError> {
    patch.value.clone().ok_or_else(|| PatchError::MissingValue {
        operation: patch.operation,
        path: patch.path.clone(),
    })
}

impl PatchCommand {
    /// Apply the command to `idp` in place.
    ///
    /// On error `idp` is left unchanged.
    pub fn apply(&self, idp: &mut ResidentIdentityProvider) -> Result<(), PatchError> {
        match self {
            Self::ReplaceSessionSetting { setting, value } => {
                idp.set_property(setting.property_key(), value.clone());
                Ok(())
            }
            Self::ReplaceHomeRealm { index, value } => {
                let mut ids = HomeRealmIdentifiers::parse(idp.home_realm_id.as_deref());
                if !ids.replace(*index, value.clone()) {
                    return Err(self.out_of_range(*index, ids.len()));
                }
                idp.home_realm_id = ids.to_joined();
                Ok(())
            }
            Self::AddHomeRealm { index, value } => {
                let stored = idp.home_realm_id.as_deref();
                let mut ids = HomeRealmIdentifiers::parse(stored);
                // A stored string made only of separators is not an absent list.
                if ids.is_empty() && stored.is_some_and(|s| !s.is_empty()) {
                    return Err(self.out_of_range(*index, 0));
                }
                if !ids.insert(*index, value.clone()) {
                    return Err(self.out_of_range(*index, ids.len()));
                }
                idp.home_realm_id = ids.to_joined();
                Ok(())
            }
            Self::RemoveHomeRealm { index } => {
                let mut ids = HomeRealmIdentifiers::parse(idp.home_realm_id.as_deref());
                if ids.remove(*index).is_none() {
                    return Err(self.out_of_range(*index, ids.len()));
                }
                idp.home_realm_id = ids.to_joined();
                Ok(())
            }
        }
    }

    /// Path addressed by the command.
    pub fn path(&self) -> String {
        match self {
            Self::ReplaceSessionSetting { setting, .. } => setting.path().to_string(),
            Self::ReplaceHomeRealm { index, .. }
            | Self::AddHomeRealm { index, .. }
            | Self::RemoveHomeRealm { index } => {
                format!("/{}/{}", crate::patch::path::HOME_REALM_ATTRIBUTE, index)
            }
        }
    }

    fn out_of_range(&self, index: usize, len: usize) -> PatchError {
        PatchError::IndexOutOfRange {
            path: self.path(),
            index,
            len,
        }
    }
}

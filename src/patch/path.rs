//! Patch path parsing.
//!
//! Recognized paths:
//!
//! | Path | Target |
//! |---|---|
//! | `/idleSessionTimeoutPeriod` | [`PatchTarget::Session`] with [`SessionSetting::IdleSessionTimeout`] |
//! | `/rememberMePeriod` | [`PatchTarget::Session`] with [`SessionSetting::RememberMePeriod`] |
//! | `/homeRealmIdentifiers/{index}` | [`PatchTarget::HomeRealmIdentifier`], zero-based |

use crate::model::{REMEMBER_ME_TIME_OUT, SESSION_IDLE_TIME_OUT};
use crate::patch::PatchError;

pub const PATH_SEPARATOR: char = '/';
pub const IDLE_SESSION_PATH: &str = "/idleSessionTimeoutPeriod";
pub const REMEMBER_ME_PATH: &str = "/rememberMePeriod";
pub const HOME_REALM_ATTRIBUTE: &str = "homeRealmIdentifiers";

/// Numeric session settings stored in the resident IdP property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSetting {
    IdleSessionTimeout,
    RememberMePeriod,
}

impl SessionSetting {
    pub fn path(&self) -> &'static str {
        match self {
            SessionSetting::IdleSessionTimeout => IDLE_SESSION_PATH,
            SessionSetting::RememberMePeriod => REMEMBER_ME_PATH,
        }
    }

    /// Property bag key of the setting.
    pub fn property_key(&self) -> &'static str {
        match self {
            SessionSetting::IdleSessionTimeout => SESSION_IDLE_TIME_OUT,
            SessionSetting::RememberMePeriod => REMEMBER_ME_TIME_OUT,
        }
    }
}

/// Attribute addressed by a patch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    Session(SessionSetting),
    HomeRealmIdentifier { index: usize },
}

impl PatchTarget {
    /// Parse a patch path.
    ///
    /// Returns `Ok(None)` for paths that name no supported attribute. A path
    /// of the form `/homeRealmIdentifiers/{index}` whose index is not a
    /// non-negative integer is an error.
    pub fn parse(path: &str) -> Result<Option<Self>, PatchError> {
        match path {
            IDLE_SESSION_PATH => return Ok(Some(Self::Session(SessionSetting::IdleSessionTimeout))),
            REMEMBER_ME_PATH => return Ok(Some(Self::Session(SessionSetting::RememberMePeriod))),
            _ => {}
        }

        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        match segments.as_slice() {
            ["", HOME_REALM_ATTRIBUTE, index] => {
                let index = parse_index(index).ok_or_else(|| PatchError::InvalidIndex {
                    path: path.to_string(),
                })?;
                Ok(Some(Self::HomeRealmIdentifier { index }))
            }
            _ => Ok(None),
        }
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

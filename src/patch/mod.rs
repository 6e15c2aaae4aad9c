//! Config patch engine.
//!
//! Applies an ordered list of patch operations to the resident identity
//! provider. Supported operations:
//!
//! * `REPLACE` on `/idleSessionTimeoutPeriod` and `/rememberMePeriod` with a
//!   positive integer value
//! * `REPLACE`, `ADD` and `REMOVE` on `/homeRealmIdentifiers/{index}`
//!
//! Every other combination is rejected with a [`PatchError`].
//!
//! The engine is a pure function: [`apply_patches`] takes the current record
//! by reference and returns a new one. Callers persist the result only when
//! the whole batch succeeded. Concurrent read-modify-write against the
//! backing store is the caller's concern (last writer wins).

pub mod command;
pub mod engine;
pub mod error;
pub mod home_realm;
pub mod path;
pub mod validation;

pub use command::PatchCommand;
pub use engine::apply_patches;
pub use error::PatchError;
pub use home_realm::HomeRealmIdentifiers;
pub use path::{PatchTarget, SessionSetting};

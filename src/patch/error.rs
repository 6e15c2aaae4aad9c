//! Errors raised while parsing or applying patch operations.
//!
//! Every variant is a client input error; the service layer surfaces them as
//! [`ConfigError::InvalidInput`](crate::error::ConfigError::InvalidInput).

use crate::model::PatchOperation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Unsupported value for 'path' attribute: {path}")]
    UnsupportedPath {
        /// The path that names no supported attribute
        path: String,
    },

    #[error("Unsupported patch operation: {operation} on '{path}'")]
    UnsupportedOperation {
        /// Operation as received
        operation: PatchOperation,
        /// Path the operation targeted
        path: String,
    },

    #[error("Invalid index in 'path' attribute: {path}")]
    InvalidIndex {
        /// Path whose index segment is not a non-negative integer
        path: String,
    },

    #[error("Invalid index in 'path' attribute: {path} (list has {len} elements)")]
    IndexOutOfRange {
        /// Path carrying the index
        path: String,
        /// Parsed index
        index: usize,
        /// Length of the home realm list when the operation was applied
        len: usize,
    },

    #[error("Value should be numeric and positive, got '{value}' for {path}")]
    InvalidNumericValue {
        /// Path of the numeric attribute
        path: String,
        /// Rejected value
        value: String,
    },

    #[error("Missing 'value' attribute for {operation} on '{path}'")]
    MissingValue {
        /// Operation that needs a value
        operation: PatchOperation,
        /// Path the operation targeted
        path: String,
    },
}

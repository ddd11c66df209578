//! Error types for the orrery core.

use thiserror::Error;

use crate::api::types::BodyId;

/// Result type for fallible registry and configuration operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Errors raised by the simulation core.
///
/// None of these are fatal: the run-loop recovers locally (logs and drops the
/// offending event) and the host never sees a visible failure.
#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("no body with id {0:?}")]
    InvalidBody(BodyId),

    #[error("no body named {0:?}")]
    UnknownBodyName(String),

    #[error("duplicate body name {0:?}")]
    DuplicateBody(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

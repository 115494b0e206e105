//! Build errors for the machine builder.

use crate::core::{FsmError, ValidationFailure};
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to declare state graph: {0}")]
    Declaration(#[from] FsmError),

    #[error("{0}")]
    Invalid(#[from] ValidationFailure),
}

impl BuildError {
    /// The validation failure, if the graph was declared but is malformed.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Invalid(failure) => Some(failure),
            Self::Declaration(_) => None,
        }
    }
}

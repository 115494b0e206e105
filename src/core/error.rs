//! Errors raised while building, driving, and validating a machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of an [`FsmError`], independent of the state names involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidStateName,
    DuplicateEdge,
    UnknownState,
    InvalidCursor,
    IllegalTransition,
    IllegalTerminalState,
    IllegalReturnToStart,
    UnreachableFromStart,
    UnreachableToFinish,
}

/// Errors that can occur while registering states, moving the cursor, or
/// validating the graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Invalid state name '{name}'")]
    InvalidStateName { name: String },

    #[error("Duplicate connection '{from}' -> '{to}'")]
    DuplicateEdge { from: String, to: String },

    #[error("State '{name}' not found")]
    UnknownState { name: String },

    #[error("Current state not valid")]
    InvalidCursor,

    #[error("Cannot move from '{from}' to '{to}'")]
    IllegalTransition { from: String, to: String },

    #[error("Illegal terminal state '{state}'. Final state must be 'finish'")]
    IllegalTerminalState { state: String },

    #[error("Illegal return to 'start' from '{from}'")]
    IllegalReturnToStart { from: String },

    #[error("State '{state}' is not accessible from 'start'")]
    UnreachableFromStart { state: String },

    #[error("State '{state}' cannot reach 'finish'")]
    UnreachableToFinish { state: String },
}

impl FsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStateName { .. } => ErrorKind::InvalidStateName,
            Self::DuplicateEdge { .. } => ErrorKind::DuplicateEdge,
            Self::UnknownState { .. } => ErrorKind::UnknownState,
            Self::InvalidCursor => ErrorKind::InvalidCursor,
            Self::IllegalTransition { .. } => ErrorKind::IllegalTransition,
            Self::IllegalTerminalState { .. } => ErrorKind::IllegalTerminalState,
            Self::IllegalReturnToStart { .. } => ErrorKind::IllegalReturnToStart,
            Self::UnreachableFromStart { .. } => ErrorKind::UnreachableFromStart,
            Self::UnreachableToFinish { .. } => ErrorKind::UnreachableToFinish,
        }
    }

    /// The state a validation violation is about.
    fn subject(&self) -> Option<&str> {
        match self {
            Self::IllegalTerminalState { state }
            | Self::UnreachableFromStart { state }
            | Self::UnreachableToFinish { state } => Some(state),
            Self::IllegalReturnToStart { from } => Some(from),
            _ => None,
        }
    }
}

/// Every rule violation found by a single validation run.
///
/// Never empty: a successful validation returns `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FsmError>,
}

impl ValidationFailure {
    pub(crate) fn new(violations: Vec<FsmError>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations, forward-pass findings first.
    pub fn violations(&self) -> &[FsmError] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check whether any violation has the given kind.
    pub fn has(&self, kind: ErrorKind) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }

    /// Check whether a violation of the given kind names `state`.
    pub fn has_for(&self, kind: ErrorKind, state: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind() == kind && v.subject() == Some(state))
    }

    pub fn into_violations(self) -> Vec<FsmError> {
        self.violations
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State graph failed validation ({} violations)", self.len())?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_states() {
        let err = FsmError::DuplicateEdge {
            from: "a".to_string(),
            to: "b".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate connection 'a' -> 'b'");

        let err = FsmError::IllegalTransition {
            from: "finish".to_string(),
            to: "a".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot move from 'finish' to 'a'");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(FsmError::InvalidCursor.kind(), ErrorKind::InvalidCursor);
        assert_eq!(
            FsmError::UnreachableToFinish {
                state: "x".to_string()
            }
            .kind(),
            ErrorKind::UnreachableToFinish
        );
    }

    #[test]
    fn failure_lookup_by_kind_and_state() {
        let failure = ValidationFailure::new(vec![
            FsmError::IllegalTerminalState {
                state: "b".to_string(),
            },
            FsmError::UnreachableFromStart {
                state: "b".to_string(),
            },
        ]);

        assert_eq!(failure.len(), 2);
        assert!(failure.has(ErrorKind::IllegalTerminalState));
        assert!(failure.has_for(ErrorKind::UnreachableFromStart, "b"));
        assert!(!failure.has_for(ErrorKind::UnreachableFromStart, "a"));
        assert!(!failure.has(ErrorKind::UnreachableToFinish));
    }

    #[test]
    fn failure_display_lists_every_violation() {
        let failure = ValidationFailure::new(vec![FsmError::IllegalReturnToStart {
            from: "a".to_string(),
        }]);

        let rendered = failure.to_string();
        assert!(rendered.contains("1 violations"));
        assert!(rendered.contains("Illegal return to 'start' from 'a'"));
    }
}

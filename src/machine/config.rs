//! Per-machine observability and error-surfacing settings.

use serde::{Deserialize, Serialize};

/// Controls how a machine reports transitions and errors.
///
/// None of these settings change graph semantics. Missing fields fall back
/// to their defaults when deserializing.
///
/// Errors are raised by default; use [`MachineConfig::silent`] or
/// `with_raise_errors(false)` for the lenient log-only behaviour.
///
/// # Example
///
/// ```rust
/// use stategraph::machine::MachineConfig;
///
/// let config = MachineConfig::default().with_log_changes(true);
/// assert!(config.log_changes);
/// assert!(config.log_errors);
/// assert!(config.raise_errors);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Emit an info event for every successful transition.
    pub log_changes: bool,

    /// Emit an error event for every reported error.
    pub log_errors: bool,

    /// Return reported errors to the caller. When off, the failing
    /// operation is skipped and returns `Ok(())`.
    pub raise_errors: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            log_changes: false,
            log_errors: true,
            raise_errors: true,
        }
    }
}

impl MachineConfig {
    pub fn with_log_changes(mut self, enabled: bool) -> Self {
        self.log_changes = enabled;
        self
    }

    pub fn with_log_errors(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    pub fn with_raise_errors(mut self, enabled: bool) -> Self {
        self.raise_errors = enabled;
        self
    }

    /// Neither log nor raise; errors only reach attached listeners.
    pub fn silent() -> Self {
        Self {
            log_changes: false,
            log_errors: false,
            raise_errors: false,
        }
    }
}

//! Notifications emitted while a machine runs.

use crate::core::FsmError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Record of a single successful cursor move.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionEvent {
    /// Name of the machine that moved
    pub machine: String,
    /// State the cursor left
    pub from: String,
    /// State the cursor entered
    pub to: String,
    /// When the move happened
    pub at: DateTime<Utc>,
}

impl TransitionEvent {
    pub(crate) fn new(machine: &str, from: &str, to: &str) -> Self {
        Self {
            machine: machine.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            at: Utc::now(),
        }
    }
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Observer attached to a [`StateMachine`](crate::machine::StateMachine).
///
/// Listeners are notified regardless of the machine's logging settings and
/// cannot influence control flow. Both methods default to doing nothing.
///
/// # Example
///
/// ```rust
/// use stategraph::machine::{MachineListener, StateMachine, TransitionEvent};
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Trail(Mutex<Vec<String>>);
///
/// impl MachineListener for Trail {
///     fn on_transition(&self, event: &TransitionEvent) {
///         self.0.lock().unwrap().push(event.to_string());
///     }
/// }
///
/// let trail = Arc::new(Trail::default());
/// let mut machine = StateMachine::new("door");
/// machine.add_listener(trail.clone());
/// machine.start("open").unwrap();
/// machine.move_to("open").unwrap();
///
/// assert_eq!(*trail.0.lock().unwrap(), vec!["start → open".to_string()]);
/// ```
pub trait MachineListener: Send + Sync {
    fn on_transition(&self, _event: &TransitionEvent) {}

    fn on_error(&self, _machine: &str, _error: &FsmError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_displays_arrow() {
        let event = TransitionEvent::new("door", "closed", "open");

        assert_eq!(event.to_string(), "closed → open");
        assert_eq!(event.machine, "door");
    }

    #[test]
    fn event_serializes_names() {
        let event = TransitionEvent::new("door", "closed", "open");

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["from"], "closed");
        assert_eq!(json["to"], "open");
        assert!(json["at"].is_string());
    }
}

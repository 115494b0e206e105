//! State identifiers and the reserved sentinel names.

use serde::Serialize;
use std::fmt;

/// Name of the implicit initial state.
pub const START: &str = "start";

/// Name of the implicit terminal state.
pub const FINISH: &str = "finish";

/// Interned handle for a registered state.
///
/// Ids are assigned in registration order, so `start` is always `StateId(0)`
/// and `finish` is always `StateId(1)`. An id is only meaningful for the
/// graph that issued it, so ids can only be obtained from a [`StateGraph`].
///
/// [`StateGraph`]: crate::core::StateGraph
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Id of the `start` state in every graph.
    pub const START: StateId = StateId(0);

    /// Id of the `finish` state in every graph.
    pub const FINISH: StateId = StateId(1);

    /// Position of the state in registration order.
    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_start(self) -> bool {
        self == Self::START
    }

    pub fn is_finish(self) -> bool {
        self == Self::FINISH
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether `name` can be used to register a state.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_ids_are_fixed() {
        assert_eq!(StateId::START.index(), 0);
        assert_eq!(StateId::FINISH.index(), 1);
        assert!(StateId::START.is_start());
        assert!(!StateId::START.is_finish());
        assert!(StateId::FINISH.is_finish());
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(!is_valid_name(""));
        assert!(is_valid_name("a"));
        assert!(is_valid_name(START));
    }

    #[test]
    fn state_id_displays_index() {
        assert_eq!(StateId(7).to_string(), "#7");
    }

    #[test]
    fn state_id_serializes_as_index() {
        let json = serde_json::to_string(&StateId(3)).unwrap();
        assert_eq!(json, "3");
    }
}

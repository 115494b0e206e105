//! Two-pass reachability validation for state graphs.
//!
//! A graph is usable when every state lies on some path from `start` to
//! `finish`. The forward pass walks outgoing edges from `start`; the
//! backward pass walks incoming edges from `finish`. Both passes are plain
//! breadth-first searches.
//!
//! Checks are accumulated with Stillwater's `Validation` type, so a single
//! run reports every violation rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use stategraph::core::{ErrorKind, StateGraph};
//! use stategraph::validation::validate_graph;
//!
//! let mut graph = StateGraph::new();
//! graph.start("draft").unwrap();
//! graph.connect("draft", "review").unwrap();
//!
//! let failure = validate_graph(&graph).unwrap_err();
//! assert!(failure.has_for(ErrorKind::IllegalTerminalState, "review"));
//!
//! graph.finish("review").unwrap();
//! assert!(validate_graph(&graph).is_ok());
//! ```

mod backward;
mod forward;
mod traversal;

pub use backward::backward_pass;
pub use forward::forward_pass;

use crate::core::{FsmError, StateGraph, ValidationFailure};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule, or of several merged rules.
pub type Checked = Validation<(), NonEmptyVec<FsmError>>;

pub(crate) fn ensure(holds: bool, violation: impl FnOnce() -> FsmError) -> Checked {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Merge rule outcomes, keeping every failure.
pub(crate) fn merge(checks: Vec<Checked>) -> Checked {
    Validation::all_vec(checks).map(|_| ())
}

/// Run both passes over `graph`, accumulating all violations.
pub fn check_graph(graph: &StateGraph) -> Checked {
    merge(vec![forward_pass(graph), backward_pass(graph)])
}

/// Run both passes and convert the outcome into a `Result`.
pub fn validate_graph(graph: &StateGraph) -> Result<(), ValidationFailure> {
    match check_graph(graph) {
        Validation::Success(()) => {
            tracing::debug!(states = graph.state_count(), "state graph is valid");
            Ok(())
        }
        Validation::Failure(violations) => Err(ValidationFailure::new(
            violations.iter().cloned().collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn linear(states: &[&str]) -> StateGraph {
        let mut graph = StateGraph::new();
        graph.start(states[0]).unwrap();
        for pair in states.windows(2) {
            graph.connect(pair[0], pair[1]).unwrap();
        }
        graph.finish(states[states.len() - 1]).unwrap();
        graph
    }

    #[test]
    fn linear_graph_is_valid() {
        let graph = linear(&["a", "b", "c"]);
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn validation_is_repeatable() {
        let graph = linear(&["a"]);

        assert!(validate_graph(&graph).is_ok());
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn bare_graph_has_terminal_start() {
        let graph = StateGraph::new();

        let failure = validate_graph(&graph).unwrap_err();

        assert!(failure.has_for(ErrorKind::IllegalTerminalState, "start"));
        assert!(failure.has_for(ErrorKind::UnreachableFromStart, "finish"));
        assert!(failure.has_for(ErrorKind::UnreachableToFinish, "start"));
    }

    #[test]
    fn failures_from_both_passes_are_accumulated() {
        let mut graph = linear(&["a"]);
        graph.ensure_state("island").unwrap();

        let failure = validate_graph(&graph).unwrap_err();

        assert_eq!(failure.len(), 3);
        assert!(failure.has_for(ErrorKind::IllegalTerminalState, "island"));
        assert!(failure.has_for(ErrorKind::UnreachableFromStart, "island"));
        assert!(failure.has_for(ErrorKind::UnreachableToFinish, "island"));
    }

    #[test]
    fn check_graph_exposes_validation() {
        let graph = linear(&["a", "b"]);
        assert!(check_graph(&graph).is_success());

        let broken = StateGraph::new();
        assert!(check_graph(&broken).is_failure());
    }

    #[test]
    fn ensure_reports_only_on_failure() {
        assert!(ensure(true, || FsmError::InvalidCursor).is_success());
        assert!(ensure(false, || FsmError::InvalidCursor).is_failure());
    }
}

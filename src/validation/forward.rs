//! Forward pass: everything must be reachable from `start`.

use super::traversal::breadth_first;
use super::{ensure, merge, Checked};
use crate::core::{FsmError, StateGraph, StateId};

/// Check the rules that follow outgoing edges from `start`.
///
/// Reports, for every state:
/// - `IllegalTerminalState` when it has no outgoing edges and is not `finish`
/// - `IllegalReturnToStart` for each of its edges that targets `start`
/// - `UnreachableFromStart` when no path from `start` reaches it
///
/// The first two rules apply to unreached states as well, so an island with
/// no edges is reported as both terminal and unreachable.
pub fn forward_pass(graph: &StateGraph) -> Checked {
    let visited = breadth_first(graph.state_count(), StateId::START, |id| graph.edges(id));

    let checks = graph
        .state_ids()
        .flat_map(|id| {
            let name = graph.name(id);
            let terminal = ensure(id.is_finish() || graph.out_degree(id) > 0, || {
                FsmError::IllegalTerminalState {
                    state: name.to_string(),
                }
            });
            let returns = ensure(!graph.has_edge(id, StateId::START), || {
                FsmError::IllegalReturnToStart {
                    from: name.to_string(),
                }
            });
            let reached = ensure(visited[id.index()], || FsmError::UnreachableFromStart {
                state: name.to_string(),
            });
            [terminal, returns, reached]
        })
        .collect();

    merge(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationFailure;
    use stillwater::validation::Validation;

    fn failure(check: Checked) -> ValidationFailure {
        match check {
            Validation::Failure(errors) => ValidationFailure::new(errors.iter().cloned().collect()),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn dead_end_is_illegal_terminal_state() {
        let mut graph = StateGraph::new();
        graph.start("a").unwrap();
        graph.connect("a", "b").unwrap();
        graph.finish("a").unwrap();

        let failure = failure(forward_pass(&graph));

        assert_eq!(
            failure.violations(),
            &[FsmError::IllegalTerminalState {
                state: "b".to_string()
            }]
        );
    }

    #[test]
    fn edge_back_to_start_is_reported() {
        let mut graph = StateGraph::new();
        graph.start("a").unwrap();
        graph.connect("a", "start").unwrap();
        graph.finish("a").unwrap();

        let failure = failure(forward_pass(&graph));

        assert_eq!(
            failure.violations(),
            &[FsmError::IllegalReturnToStart {
                from: "a".to_string()
            }]
        );
    }

    #[test]
    fn start_self_loop_is_a_return_to_start() {
        let mut graph = StateGraph::new();
        graph.start("start").unwrap();
        graph.start("a").unwrap();
        graph.finish("a").unwrap();

        let failure = failure(forward_pass(&graph));

        assert_eq!(failure.len(), 1);
        assert!(failure.has_for(crate::core::ErrorKind::IllegalReturnToStart, "start"));
    }

    #[test]
    fn island_is_unreachable_even_with_edges() {
        let mut graph = StateGraph::new();
        graph.start("a").unwrap();
        graph.finish("a").unwrap();
        graph.finish("island").unwrap();

        let failure = failure(forward_pass(&graph));

        assert_eq!(
            failure.violations(),
            &[FsmError::UnreachableFromStart {
                state: "island".to_string()
            }]
        );
    }

    #[test]
    fn cycles_away_from_start_are_allowed() {
        let mut graph = StateGraph::new();
        graph.start("a").unwrap();
        graph.connect("a", "b").unwrap();
        graph.connect("b", "a").unwrap();
        graph.finish("b").unwrap();

        assert!(forward_pass(&graph).is_success());
    }
}

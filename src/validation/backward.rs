//! Backward pass: everything must be able to reach `finish`.

use super::traversal::breadth_first;
use super::{ensure, merge, Checked};
use crate::core::{FsmError, StateGraph, StateId};

/// Report `UnreachableToFinish` for every state with no path to `finish`.
///
/// Walks a reverse adjacency built once per call, so the pass is linear in
/// states plus edges.
pub fn backward_pass(graph: &StateGraph) -> Checked {
    let reverse = graph.reverse_adjacency();
    let visited = breadth_first(graph.state_count(), StateId::FINISH, |id| {
        reverse[id.index()].iter().copied()
    });

    let checks = graph
        .state_ids()
        .map(|id| {
            ensure(visited[id.index()], || FsmError::UnreachableToFinish {
                state: graph.name(id).to_string(),
            })
        })
        .collect();

    merge(checks)
}

//! Breadth-first reachability shared by both passes.

use crate::core::StateId;
use std::collections::VecDeque;

/// Mark every state reachable from `origin`, following `next`.
///
/// Returns a visited flag per state id; `origin` is always marked.
pub(crate) fn breadth_first<F, I>(state_count: usize, origin: StateId, mut next: F) -> Vec<bool>
where
    F: FnMut(StateId) -> I,
    I: IntoIterator<Item = StateId>,
{
    let mut visited = vec![false; state_count];
    let mut queue = VecDeque::new();

    visited[origin.index()] = true;
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        for neighbour in next(current) {
            if !visited[neighbour.index()] {
                visited[neighbour.index()] = true;
                queue.push_back(neighbour);
            }
        }
    }

    visited
}

//! The current-state pointer and its move legality rules.

use crate::core::{FsmError, StateGraph, StateId};

/// Position of a running machine inside its graph.
///
/// Only the id is stored; the outgoing edge set is read from the graph on
/// every move, so it can never go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    current: Option<StateId>,
}

impl Cursor {
    pub(crate) fn at(id: StateId) -> Self {
        Self { current: Some(id) }
    }

    pub(crate) fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Check a move to `target` against `graph` without applying it.
    ///
    /// Returns the `(from, to)` pair on success.
    pub(crate) fn resolve(
        &self,
        graph: &StateGraph,
        target: &str,
    ) -> Result<(StateId, StateId), FsmError> {
        let to = graph.id_of(target).ok_or_else(|| FsmError::UnknownState {
            name: target.to_string(),
        })?;
        let from = self.current.ok_or(FsmError::InvalidCursor)?;

        if !graph.has_edge(from, to) {
            return Err(FsmError::IllegalTransition {
                from: graph.name(from).to_string(),
                to: target.to_string(),
            });
        }

        Ok((from, to))
    }

    pub(crate) fn advance(&mut self, to: StateId) {
        self.current = Some(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> StateGraph {
        let mut graph = StateGraph::new();
        graph.start("a").unwrap();
        graph.finish("a").unwrap();
        graph
    }

    #[test]
    fn resolves_declared_edge() {
        let graph = graph();
        let cursor = Cursor::at(StateId::START);

        let (from, to) = cursor.resolve(&graph, "a").unwrap();

        assert_eq!(from, StateId::START);
        assert_eq!(graph.name(to), "a");
    }

    #[test]
    fn unknown_target_is_checked_first() {
        let graph = graph();
        let cursor = Cursor { current: None };

        let result = cursor.resolve(&graph, "missing");

        assert!(matches!(result, Err(FsmError::UnknownState { .. })));
    }

    #[test]
    fn empty_cursor_is_invalid() {
        let graph = graph();
        let cursor = Cursor { current: None };

        assert_eq!(cursor.resolve(&graph, "a"), Err(FsmError::InvalidCursor));
    }

    #[test]
    fn undeclared_edge_is_illegal() {
        let graph = graph();
        let cursor = Cursor::at(StateId::START);

        let result = cursor.resolve(&graph, "finish");

        assert_eq!(
            result,
            Err(FsmError::IllegalTransition {
                from: "start".to_string(),
                to: "finish".to_string(),
            })
        );
    }

    #[test]
    fn resolve_does_not_move() {
        let graph = graph();
        let mut cursor = Cursor::at(StateId::START);

        let (_, to) = cursor.resolve(&graph, "a").unwrap();
        assert_eq!(cursor.current(), Some(StateId::START));

        cursor.advance(to);
        assert_eq!(cursor.current(), Some(to));
    }
}

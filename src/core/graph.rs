//! Adjacency structure of named states.

use super::error::FsmError;
use super::state::{is_valid_name, StateId, FINISH, START};
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
struct StateNode {
    name: String,
    edges: BTreeSet<StateId>,
}

/// Directed graph of named states with unconditional edges.
///
/// States live in an arena indexed by [`StateId`]; names are interned once
/// and every lookup after that compares ids. `start` and `finish` are
/// registered on construction.
///
/// # Example
///
/// ```rust
/// use stategraph::core::StateGraph;
///
/// let mut graph = StateGraph::new();
/// graph.start("open").unwrap();
/// graph.finish("open").unwrap();
///
/// let open = graph.id_of("open").unwrap();
/// assert_eq!(graph.state_count(), 3);
/// assert!(graph.has_edge(open, graph.id_of("finish").unwrap()));
/// ```
#[derive(Clone, Debug)]
pub struct StateGraph {
    nodes: Vec<StateNode>,
    index: HashMap<String, StateId>,
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl StateGraph {
    /// Create a graph holding only `start` and `finish`.
    pub fn new() -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        graph.intern(START);
        graph.intern(FINISH);
        graph
    }

    fn intern(&mut self, name: &str) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(StateNode {
            name: name.to_string(),
            edges: BTreeSet::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Return the id for `name`, registering an edgeless state if needed.
    pub fn ensure_state(&mut self, name: &str) -> Result<StateId, FsmError> {
        if !is_valid_name(name) {
            return Err(FsmError::InvalidStateName {
                name: name.to_string(),
            });
        }

        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }

        let id = self.intern(name);
        tracing::debug!(state = name, id = id.index(), "registered state");
        Ok(id)
    }

    /// Add the edge `source -> destination`, registering either end if needed.
    ///
    /// Both names are checked before either state is registered.
    pub fn connect(&mut self, source: &str, destination: &str) -> Result<(), FsmError> {
        if let Some(name) = [source, destination].into_iter().find(|n| !is_valid_name(n)) {
            return Err(FsmError::InvalidStateName {
                name: name.to_string(),
            });
        }

        let from = self.ensure_state(source)?;
        let to = self.ensure_state(destination)?;

        if !self.nodes[from.0].edges.insert(to) {
            return Err(FsmError::DuplicateEdge {
                from: source.to_string(),
                to: destination.to_string(),
            });
        }

        tracing::debug!(from = source, to = destination, "connected states");
        Ok(())
    }

    /// Add the edge `start -> destination`.
    pub fn start(&mut self, destination: &str) -> Result<(), FsmError> {
        self.connect(START, destination)
    }

    /// Add the edge `source -> finish`.
    pub fn finish(&mut self, source: &str) -> Result<(), FsmError> {
        self.connect(source, FINISH)
    }

    pub fn id_of(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name of a state issued by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn name(&self, id: StateId) -> &str {
        &self.nodes[id.0].name
    }

    /// Destinations reachable in one step from `id`.
    pub fn edges(&self, id: StateId) -> impl Iterator<Item = StateId> + '_ {
        self.nodes[id.0].edges.iter().copied()
    }

    pub fn has_edge(&self, from: StateId, to: StateId) -> bool {
        self.nodes[from.0].edges.contains(&to)
    }

    pub fn out_degree(&self, id: StateId) -> usize {
        self.nodes[id.0].edges.len()
    }

    /// All state ids in registration order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.nodes.len()).map(StateId)
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Predecessor lists, indexed by destination id.
    pub(crate) fn reverse_adjacency(&self) -> Vec<Vec<StateId>> {
        let mut reverse = vec![Vec::new(); self.nodes.len()];
        for from in self.state_ids() {
            for to in self.edges(from) {
                reverse[to.0].push(from);
            }
        }
        reverse
    }
}

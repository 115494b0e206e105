//! State machine facade: graph, cursor, and reporting policy.

use crate::core::{FsmError, StateGraph, StateId, ValidationFailure, START};
use crate::machine::config::MachineConfig;
use crate::machine::cursor::Cursor;
use crate::machine::events::{MachineListener, TransitionEvent};
use crate::validation::validate_graph;
use std::fmt;
use std::sync::Arc;

/// A named state graph with a single cursor.
///
/// A new machine holds `start` and `finish` with the cursor at `start`.
/// States and edges are registered with [`connect`](Self::connect),
/// [`start`](Self::start), [`finish`](Self::finish) and
/// [`add_state`](Self::add_state); the cursor moves only along declared edges.
///
/// Every error passes through one reporting path governed by
/// [`MachineConfig`]: it may be logged, handed to listeners, and returned to
/// the caller. A rejected operation never leaves the machine half-updated.
///
/// # Example
///
/// ```rust
/// use stategraph::machine::StateMachine;
///
/// let mut machine = StateMachine::new("checkout");
/// machine.start("cart").unwrap();
/// machine.connect("cart", "payment").unwrap();
/// machine.finish("payment").unwrap();
/// machine.validate().unwrap();
///
/// machine.move_to("cart").unwrap();
/// machine.move_to("payment").unwrap();
/// assert_eq!(machine.current_state(), "payment");
///
/// assert!(machine.move_to("cart").is_err());
/// ```
pub struct StateMachine {
    name: String,
    graph: StateGraph,
    cursor: Cursor,
    config: MachineConfig,
    listeners: Vec<Arc<dyn MachineListener>>,
}

impl StateMachine {
    /// Create a machine with the default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, MachineConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: MachineConfig) -> Self {
        Self {
            name: name.into(),
            graph: StateGraph::new(),
            cursor: Cursor::at(StateId::START),
            config,
            listeners: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn add_listener(&mut self, listener: Arc<dyn MachineListener>) {
        self.listeners.push(listener);
    }

    /// Register `name`, or return its id if it already exists.
    ///
    /// An invalid name is always returned as an error, since there is no
    /// state to hand back; it is still logged and sent to listeners.
    pub fn add_state(&mut self, name: &str) -> Result<StateId, FsmError> {
        self.graph.ensure_state(name).inspect_err(|e| self.emit(e))
    }

    /// Declare the edge `source -> destination`, creating either state if
    /// it is not registered yet.
    pub fn connect(&mut self, source: &str, destination: &str) -> Result<(), FsmError> {
        self.graph
            .connect(source, destination)
            .or_else(|e| self.report(e))
    }

    /// Declare the edge `start -> destination`.
    pub fn start(&mut self, destination: &str) -> Result<(), FsmError> {
        self.graph.start(destination).or_else(|e| self.report(e))
    }

    /// Declare the edge `source -> finish`.
    pub fn finish(&mut self, source: &str) -> Result<(), FsmError> {
        self.graph.finish(source).or_else(|e| self.report(e))
    }

    /// Move the cursor to `target` along a declared edge.
    pub fn move_to(&mut self, target: &str) -> Result<(), FsmError> {
        let (from, to) = match self.cursor.resolve(&self.graph, target) {
            Ok(step) => step,
            Err(e) => return self.report(e),
        };

        self.cursor.advance(to);

        let event = TransitionEvent::new(&self.name, self.graph.name(from), self.graph.name(to));
        if self.config.log_changes {
            tracing::info!(machine = %self.name, "{}", change_message(&event));
        }
        for listener in &self.listeners {
            listener.on_transition(&event);
        }

        Ok(())
    }

    /// Name of the state the cursor points at.
    pub fn current_state(&self) -> &str {
        self.cursor
            .current()
            .map(|id| self.graph.name(id))
            .unwrap_or(START)
    }

    /// Check that every state lies on a path from `start` to `finish`.
    ///
    /// All violations are reported; with `raise_errors` on they are also
    /// returned together.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        match validate_graph(&self.graph) {
            Ok(()) => Ok(()),
            Err(failure) => {
                for violation in failure.violations() {
                    self.emit(violation);
                }
                if self.config.raise_errors {
                    Err(failure)
                } else {
                    Ok(())
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn graph(&self) -> &StateGraph {
        &self.graph
    }

    fn emit(&self, error: &FsmError) {
        if self.config.log_errors {
            tracing::error!(machine = %self.name, kind = ?error.kind(), "{error}");
        }
        for listener in &self.listeners {
            listener.on_error(&self.name, error);
        }
    }

    fn report(&self, error: FsmError) -> Result<(), FsmError> {
        self.emit(&error);
        if self.config.raise_errors {
            Err(error)
        } else {
            Ok(())
        }
    }
}

/// Log line for a transition, e.g. `CART → PAYMENT`.
fn change_message(event: &TransitionEvent) -> String {
    format!("{} → {}", event.from.to_uppercase(), event.to.to_uppercase())
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("current", &self.current_state())
            .field("states", &self.graph.state_count())
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

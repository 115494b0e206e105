//! Builder for constructing validated state machines.

use crate::builder::error::BuildError;
use crate::core::{FINISH, START};
use crate::machine::{MachineConfig, MachineListener, StateMachine};
use std::sync::Arc;

enum Declaration {
    State(String),
    Edge(String, String),
}

/// Builder for constructing state machines with a fluent API.
///
/// Declarations are replayed in order on [`build`](Self::build), so states
/// are registered in the order they were first mentioned.
pub struct MachineBuilder {
    name: String,
    config: MachineConfig,
    declarations: Vec<Declaration>,
    listeners: Vec<Arc<dyn MachineListener>>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: MachineConfig::default(),
            declarations: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Replace the machine configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggle transition logging.
    pub fn log_changes(mut self, enabled: bool) -> Self {
        self.config.log_changes = enabled;
        self
    }

    /// Attach a listener before any declaration is replayed.
    pub fn listener(mut self, listener: Arc<dyn MachineListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Register a state without edges.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.declarations.push(Declaration::State(name.into()));
        self
    }

    /// Declare an edge.
    pub fn connect(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.declarations
            .push(Declaration::Edge(source.into(), destination.into()));
        self
    }

    /// Declare an edge out of `start`.
    pub fn start(self, destination: impl Into<String>) -> Self {
        self.connect(START, destination)
    }

    /// Declare an edge into `finish`.
    pub fn finish(self, source: impl Into<String>) -> Self {
        self.connect(source, FINISH)
    }

    /// Build the machine and validate its graph.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let machine = self.build_unchecked()?;
        machine.validate()?;
        Ok(machine)
    }

    /// Build the machine without validating its graph.
    pub fn build_unchecked(self) -> Result<StateMachine, BuildError> {
        let mut machine = StateMachine::with_config(self.name, self.config);
        for listener in self.listeners {
            machine.add_listener(listener);
        }

        for declaration in &self.declarations {
            match declaration {
                Declaration::State(name) => {
                    machine.add_state(name)?;
                }
                Declaration::Edge(source, destination) => machine.connect(source, destination)?,
            }
        }

        tracing::debug!(
            machine = machine.name(),
            declarations = self.declarations.len(),
            "built state machine"
        );
        Ok(machine)
    }
}

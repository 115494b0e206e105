//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the [`state_graph!`](crate::state_graph)
//! macro for declaring a machine's edges up front and validating the graph
//! in the same step.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::machine::StateMachine;

/// Build a machine whose states form a single chain from `start` to `finish`.
///
/// # Example
///
/// ```
/// use stategraph::builder::linear;
///
/// let mut wizard = linear("wizard", &["account", "profile", "confirm"]).unwrap();
///
/// wizard.move_to("account").unwrap();
/// assert!(wizard.move_to("confirm").is_err());
/// ```
pub fn linear(name: &str, states: &[&str]) -> Result<StateMachine, BuildError> {
    let mut builder = MachineBuilder::new(name);
    let mut previous = crate::core::START;

    for &state in states {
        builder = builder.connect(previous, state);
        previous = state;
    }

    builder.finish(previous).build()
}

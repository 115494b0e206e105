//! Running state machines.
//!
//! This module wraps a [`StateGraph`](crate::core::StateGraph) with the
//! pieces needed to drive it:
//!
//! - **Cursor**: the single current-state pointer, moved only along declared edges
//! - **Config**: whether transitions and errors are logged, and whether errors are returned
//! - **Listeners**: observers for transitions and errors, decoupled from control flow
//!
//! Logging goes through `tracing`; install a subscriber to see it.

mod config;
mod cursor;
mod events;
mod state_machine;

pub use config::MachineConfig;
pub use events::{MachineListener, TransitionEvent};
pub use state_machine::StateMachine;

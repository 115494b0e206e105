//! Stategraph: a minimal, validated finite state machine
//!
//! A machine is a directed graph of named states with unconditional edges
//! and a single cursor. Every graph has two sentinel states: `start`, where
//! the cursor begins, and `finish`, the only legal dead end. Before driving
//! a machine, [`StateMachine::validate`] checks that every state lies on a
//! path from `start` to `finish` and that nothing leads back to `start`.
//!
//! # Core Concepts
//!
//! - **Graph**: Interned states and their outgoing edge sets
//! - **Cursor**: The current state, moved only along declared edges
//! - **Validation**: Forward and backward reachability passes that report every violation
//! - **Listeners**: Observers for transitions and errors, separate from control flow
//!
//! # Example
//!
//! ```rust
//! use stategraph::builder::MachineBuilder;
//!
//! let mut handshake = MachineBuilder::new("handshake")
//!     .start("hello")
//!     .connect("hello", "negotiate")
//!     .connect("negotiate", "negotiate")
//!     .finish("negotiate")
//!     .build()
//!     .unwrap();
//!
//! handshake.move_to("hello").unwrap();
//! handshake.move_to("negotiate").unwrap();
//! handshake.move_to("finish").unwrap();
//! assert_eq!(handshake.current_state(), "finish");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{ErrorKind, FsmError, StateGraph, StateId, ValidationFailure, FINISH, START};
pub use machine::{MachineConfig, MachineListener, StateMachine, TransitionEvent};

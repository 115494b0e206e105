//! Core state graph types.
//!
//! This module contains the data side of the machine:
//! - Interned state identifiers and the `start`/`finish` sentinels
//! - The adjacency structure with registration-time legality checks
//! - The error taxonomy shared by every other module
//!
//! Nothing here tracks a current state; see [`crate::machine`] for the cursor.

mod error;
mod graph;
mod state;

pub use error::{ErrorKind, FsmError, ValidationFailure};
pub use graph::StateGraph;
pub use state::{is_valid_name, StateId, FINISH, START};

//! Core state types.
//!
//! This module contains the immutable data the state machine operates on:
//! - Identifiers via the `StateId` trait
//! - States as an identifier plus its allowed destinations
//! - Immutable history of committed transitions
//!
//! Nothing in this module mutates shared data or performs I/O.

mod history;
mod id;
mod state;

pub use history::{StateHistory, StateTransition};
pub(crate) use id::join_names;
pub use id::StateId;
pub use state::State;

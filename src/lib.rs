//! Statewise: a finite state machine with declarative, validated transitions
//!
//! States are plain data: an identifier plus the identifiers it may move to.
//! A single [`StateMachine`] type holds the current state and accepts a move
//! only when the target's identifier is in the current state's allowed set.
//! A rejected move returns a [`TransitionError`] and changes nothing.
//!
//! # Core Concepts
//!
//! - **State**: immutable identifier plus allowed destinations
//! - **StateMachine**: current state holder enforcing the transition graph
//! - **Universe**: the validated registry of states a machine is built from
//! - **Observer**: optional caller-supplied hook for tracing moves
//!
//! # Example
//!
//! ```rust
//! use statewise::{State, StateMachine, TransitionError};
//!
//! let state1 = State::new("state1", ["state2", "state3"]);
//! let state2 = State::new("state2", ["state4"]);
//! let state4 = State::new("state4", ["state1", "state5"]);
//! let state5 = State::terminal("state5");
//!
//! let mut machine = StateMachine::new(state1.clone());
//! machine.transit(state2)?.transit(state4.clone())?.transit(state5)?;
//! assert_eq!(machine.current_state(), &"state5");
//!
//! // state5 is terminal: every further move is rejected
//! let err = machine.transit(state1).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Unable to transit from 'state5' to 'state1', allowed: []"
//! );
//!
//! // a direct jump that was never declared fails too
//! let mut fresh = StateMachine::new(State::new("state1", ["state2", "state3"]));
//! assert!(fresh.transit(state4).is_err());
//! assert_eq!(fresh.current_state(), &"state1");
//! # Ok::<(), TransitionError<&'static str>>(())
//! ```

pub mod core;
pub mod machine;
pub mod universe;

// Re-export commonly used types
pub use crate::core::{State, StateHistory, StateId, StateTransition};
pub use machine::{StateMachine, TracingObserver, TransitionError, TransitionObserver};
pub use universe::{BuildError, Universe, UniverseBuilder};

//! The state machine and its transit contract.
//!
//! # Key Concepts
//!
//! - **StateMachine**: holds the current state and validates every move
//! - **TransitionError**: the single, recoverable rejection kind
//! - **Observers**: optional caller-supplied hooks; the machine never logs
//!   on its own

mod error;
mod observer;
mod state_machine;

pub use error::TransitionError;
pub use state_machine::StateMachine;
pub use observer::{NoopObserver, TracingObserver, TransitionObserver};

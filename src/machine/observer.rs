//! Caller-supplied hooks for transit outcomes.
//!
//! The machine itself never logs. Callers who want a trace of moves pass an
//! observer to [`StateMachine::transit_with`](super::StateMachine::transit_with).

use super::error::TransitionError;
use crate::core::{State, StateId};
use tracing::{debug, warn};

/// Notified after a transit commits or is rejected.
///
/// Both methods default to doing nothing, so implementors only override
/// the outcome they care about.
pub trait TransitionObserver<I: StateId> {
    /// Called after `from` has been replaced by `to`.
    fn on_transition(&self, _from: &State<I>, _to: &State<I>) {}

    /// Called after a transit was rejected. The machine is unchanged.
    fn on_rejected(&self, _error: &TransitionError<I>) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<I: StateId> TransitionObserver<I> for NoopObserver {}

/// Observer that reports outcomes through `tracing`.
///
/// Committed moves are logged at `debug`, rejections at `warn`.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    machine: Option<String>,
}

impl TracingObserver {
    /// Create an observer whose events carry no machine name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every event with a machine name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            machine: Some(name.into()),
        }
    }
}

impl<I: StateId> TransitionObserver<I> for TracingObserver {
    fn on_transition(&self, from: &State<I>, to: &State<I>) {
        let machine = self.machine.as_deref().unwrap_or("-");
        debug!(machine, from = from.id().name(), to = to.id().name(), "state transition");
    }

    fn on_rejected(&self, error: &TransitionError<I>) {
        let machine = self.machine.as_deref().unwrap_or("-");
        warn!(
            machine,
            from = error.source_state().name(),
            to = error.target_state().name(),
            terminal = error.is_terminal(),
            "{}",
            error
        );
    }
}

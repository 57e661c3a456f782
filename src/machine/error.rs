//! Transition errors.

use crate::core::{join_names, StateId};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur during a transit.
///
/// A rejected transit leaves the machine exactly as it was, so this error
/// is always recoverable: the caller may retry with another target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<I: StateId> {
    /// The target is not in the current state's allowed set. An empty
    /// `allowed` means the machine is in a terminal state.
    #[error(
        "Unable to transit from '{}' to '{}', allowed: [{}]",
        .from.name(),
        .to.name(),
        join_names(.allowed)
    )]
    Disallowed {
        from: I,
        to: I,
        allowed: BTreeSet<I>,
    },
}

impl<I: StateId> TransitionError<I> {
    /// The state the machine was in when the transit was rejected.
    pub fn source_state(&self) -> &I {
        match self {
            Self::Disallowed { from, .. } => from,
        }
    }

    /// The target that was rejected.
    pub fn target_state(&self) -> &I {
        match self {
            Self::Disallowed { to, .. } => to,
        }
    }

    /// The legal targets from the current state.
    pub fn allowed(&self) -> &BTreeSet<I> {
        match self {
            Self::Disallowed { allowed, .. } => allowed,
        }
    }

    /// Whether the rejection happened because the current state is terminal.
    pub fn is_terminal(&self) -> bool {
        self.allowed().is_empty()
    }
}

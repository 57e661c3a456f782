//! Transition history tracking.
//!
//! Tracks the moves a machine has committed,
//! keyed by state identifier.

use super::id::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "state1",
///     to: "state2",
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.sequence, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<I: StateId> {
    /// The state being transitioned from
    pub from: I,
    /// The state being transitioned to
    pub to: I,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
    /// One-based position of this transition in its history
    pub sequence: usize,
}

/// Ordered history of committed transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: "state1",
///     to: "state2",
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
///
/// let history = history.record(StateTransition {
///     from: "state2",
///     to: "state4",
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&"state1", &"state2", &"state4"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<I: StateId> {
    transitions: Vec<StateTransition<I>>,
}

impl<I: StateId> Default for StateHistory<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: StateId> StateHistory<I> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    ///
    /// ```rust
    /// use statewise::core::{StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: "a",
    ///     to: "b",
    ///     timestamp: Utc::now(),
    ///     sequence: 1,
    /// });
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<I>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<I>) {
        self.transitions.push(transition);
    }

    /// Sequence number the next recorded transition should carry.
    pub fn next_sequence(&self) -> usize {
        self.transitions.len() + 1
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` of the first transition, then the `to` of each
    /// transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&I> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were committed.
    pub fn transitions(&self) -> &[StateTransition<I>] {
        &self.transitions
    }

    /// The most recently committed transition.
    pub fn last(&self) -> Option<&StateTransition<I>> {
        self.transitions.last()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

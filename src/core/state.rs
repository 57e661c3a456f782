//! Immutable state descriptors.
//!
//! A state is plain data: its own identifier plus the identifiers it may
//! move to. There is no per-state behaviour to override.

use super::id::StateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A named node of the transition graph and its legal outgoing edges.
///
/// States are immutable values. The allowed set is fixed at construction,
/// ignores ordering and collapses duplicates. Construction performs no
/// validation: targets are not checked against any other state.
///
/// # Example
///
/// ```rust
/// use statewise::core::State;
///
/// let state1 = State::new("state1", ["state2", "state3", "state2"]);
///
/// assert_eq!(state1.id(), &"state1");
/// assert_eq!(state1.allowed_transitions().len(), 2);
/// assert!(state1.allows(&"state3"));
/// assert!(!state1.allows(&"state1"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct State<I: StateId> {
    id: I,
    allowed: BTreeSet<I>,
}

impl<I: StateId> State<I> {
    /// Create a state from its identifier and its destination identifiers.
    pub fn new<T>(id: I, allowed: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        Self {
            id,
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Create a state with no outgoing transitions.
    ///
    /// ```rust
    /// use statewise::core::State;
    ///
    /// let done = State::terminal("state5");
    /// assert!(done.is_terminal());
    /// ```
    pub fn terminal(id: I) -> Self {
        Self {
            id,
            allowed: BTreeSet::new(),
        }
    }

    /// The state's own identifier (pure).
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Alias of [`State::id`].
    pub fn identifier(&self) -> &I {
        &self.id
    }

    /// The fixed set of destination identifiers (pure).
    pub fn allowed_transitions(&self) -> &BTreeSet<I> {
        &self.allowed
    }

    /// Whether `target` is a legal destination from this state.
    pub fn allows(&self, target: &I) -> bool {
        self.allowed.contains(target)
    }

    /// Whether this state has no outgoing transitions.
    ///
    /// Self-transitions count as outgoing edges, so a state listing only
    /// itself is not terminal.
    pub fn is_terminal(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<I: StateId> fmt::Display for State<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id.name())
    }
}

//! Builder for assembling a universe of states.

use super::error::BuildError;
use super::Universe;
use crate::core::{State, StateId};
use std::collections::BTreeMap;

/// Builder for constructing a [`Universe`] with a fluent API.
///
/// `build` checks that the universe is non-empty, that no identifier is
/// declared twice, and that every allowed target names a declared state.
///
/// ```rust
/// use statewise::universe::{BuildError, UniverseBuilder};
///
/// let universe = UniverseBuilder::new()
///     .state("draft", ["review"])
///     .state("review", ["draft", "published"])
///     .terminal("published")
///     .build()?;
///
/// assert_eq!(universe.len(), 3);
/// # Ok::<(), BuildError>(())
/// ```
pub struct UniverseBuilder<I: StateId> {
    states: Vec<State<I>>,
}

impl<I: StateId> UniverseBuilder<I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Declare a state and its allowed destinations.
    pub fn state<T>(mut self, id: I, allowed: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        self.states.push(State::new(id, allowed));
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(mut self, id: I) -> Self {
        self.states.push(State::terminal(id));
        self
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: State<I>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<T>(mut self, states: T) -> Self
    where
        T: IntoIterator<Item = State<I>>,
    {
        self.states.extend(states);
        self
    }

    /// Build the universe.
    /// Returns an error if the declared graph is inconsistent.
    pub fn build(self) -> Result<Universe<I>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::EmptyUniverse);
        }

        let mut by_id = BTreeMap::new();
        for state in self.states {
            let id = state.id().clone();
            if by_id.contains_key(&id) {
                return Err(BuildError::DuplicateState {
                    id: id.name().to_string(),
                });
            }
            by_id.insert(id, state);
        }

        for state in by_id.values() {
            if let Some(missing) = state
                .allowed_transitions()
                .iter()
                .find(|target| !by_id.contains_key(*target))
            {
                return Err(BuildError::UnknownTarget {
                    from: state.id().name().to_string(),
                    to: missing.name().to_string(),
                });
            }
        }

        Ok(Universe::from_validated(by_id))
    }
}

impl<I: StateId> Default for UniverseBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

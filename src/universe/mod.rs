//! Registries of states and the glue that seeds machines from them.
//!
//! A [`Universe`] is the fixed set of states one machine is built from,
//! keyed by identifier. It can be assembled in code with
//! [`UniverseBuilder`], declared for an enum with [`state_ids!`](crate::state_ids),
//! or loaded from a JSON definition mapping each id to its targets:
//!
//! ```json
//! { "state1": ["state2", "state3"], "state5": [] }
//! ```

pub mod builder;
pub mod error;
pub mod macros;

pub use builder::UniverseBuilder;
pub use error::BuildError;

use crate::core::{State, StateId};
use crate::machine::StateMachine;
use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// The validated, read-only set of states available to a machine.
///
/// Every allowed target of every state names a member of the universe,
/// so machines seeded with [`Universe::machine`] and moved with states from
/// [`Universe::resolve`] never hold an unknown state.
///
/// # Example
///
/// ```rust
/// use statewise::universe::Universe;
///
/// let universe: Universe<String> = Universe::from_json(
///     r#"{ "open": ["closed"], "closed": ["open", "locked"], "locked": [] }"#,
/// )?;
///
/// let mut door = universe.machine(&"open".to_string())?;
/// door.transit(universe.resolve(&"closed".to_string())?.clone())
///     .expect("open -> closed is declared");
///
/// assert_eq!(door.current_state(), "closed");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe<I: StateId> {
    states: BTreeMap<I, State<I>>,
}

impl<I: StateId> Universe<I> {
    /// Only called by the builder after validation.
    pub(crate) fn from_validated(states: BTreeMap<I, State<I>>) -> Self {
        Self { states }
    }

    /// Build a universe from pre-built states.
    pub fn from_states<T>(states: T) -> Result<Self, BuildError>
    where
        T: IntoIterator<Item = State<I>>,
    {
        UniverseBuilder::new().states(states).build()
    }

    /// Build a universe from an adjacency map of id to allowed targets.
    pub fn from_graph(graph: BTreeMap<I, BTreeSet<I>>) -> Result<Self, BuildError> {
        Self::from_states(
            graph
                .into_iter()
                .map(|(id, allowed)| State::new(id, allowed)),
        )
    }

    /// Decode a JSON definition and validate it.
    pub fn from_json(json: &str) -> Result<Self, BuildError>
    where
        I: DeserializeOwned,
    {
        let graph: BTreeMap<I, BTreeSet<I>> = serde_json::from_str(json)
            .map_err(|e| BuildError::DeserializationFailed(e.to_string()))?;
        Self::from_graph(graph)
    }

    /// Encode this universe as a pretty-printed JSON definition.
    pub fn to_json(&self) -> Result<String, BuildError>
    where
        I: Serialize,
    {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::SerializationFailed(e.to_string()))
    }

    /// Adjacency map of id to allowed targets.
    pub fn to_graph(&self) -> BTreeMap<I, BTreeSet<I>> {
        self.states
            .iter()
            .map(|(id, state)| (id.clone(), state.allowed_transitions().clone()))
            .collect()
    }

    /// Look up a state by id.
    pub fn get(&self, id: &I) -> Option<&State<I>> {
        self.states.get(id)
    }

    /// Look up a state, failing if it is not registered.
    pub fn resolve(&self, id: &I) -> Result<&State<I>, BuildError> {
        self.states.get(id).ok_or_else(|| BuildError::UnknownState {
            id: id.name().to_string(),
        })
    }

    /// Whether a state with this id is registered.
    pub fn contains(&self, id: &I) -> bool {
        self.states.contains_key(id)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state is registered. Always `false` for a built universe.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, ordered by id.
    pub fn states(&self) -> impl Iterator<Item = &State<I>> {
        self.states.values()
    }

    /// All ids, in order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.states.keys()
    }

    /// Seed a machine with a registered state.
    pub fn machine(&self, initial: &I) -> Result<StateMachine<I>, BuildError> {
        self.resolve(initial).cloned().map(StateMachine::new)
    }

    /// Every declared transition as a `(from, to)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&I, &I)> {
        self.states.values().flat_map(|state| {
            state
                .allowed_transitions()
                .iter()
                .map(move |target| (state.id(), target))
        })
    }

    /// States with no outgoing transitions.
    pub fn terminal_states(&self) -> impl Iterator<Item = &State<I>> {
        self.states.values().filter(|state| state.is_terminal())
    }

    /// Ids reachable from `start` by one or more transitions.
    ///
    /// `start` itself is included only when some cycle leads back to it.
    pub fn reachable_from(&self, start: &I) -> Result<BTreeSet<I>, BuildError> {
        let mut reached = BTreeSet::new();
        let mut queue: VecDeque<&State<I>> = VecDeque::from([self.resolve(start)?]);

        while let Some(state) = queue.pop_front() {
            for target in state.allowed_transitions() {
                if reached.insert(target.clone()) {
                    queue.push_back(self.resolve(target)?);
                }
            }
        }

        Ok(reached)
    }
}

impl<I: StateId + Serialize> Serialize for Universe<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.states
                .iter()
                .map(|(id, state)| (id, state.allowed_transitions())),
        )
    }
}

impl<'de, I: StateId + Deserialize<'de>> Deserialize<'de> for Universe<I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let graph = BTreeMap::<I, BTreeSet<I>>::deserialize(deserializer)?;
        Self::from_graph(graph).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_states() -> Universe<&'static str> {
        UniverseBuilder::new()
            .state("state1", ["state2", "state3"])
            .state("state2", ["state4"])
            .state("state3", ["state1", "state4"])
            .state("state4", ["state1", "state5"])
            .terminal("state5")
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_finds_registered_states() {
        let universe = five_states();
        assert_eq!(universe.resolve(&"state2").unwrap().id(), &"state2");
        assert_eq!(
            universe.resolve(&"state9").unwrap_err(),
            BuildError::UnknownState {
                id: "state9".to_string()
            }
        );
        assert!(universe.get(&"state9").is_none());
    }

    #[test]
    fn machine_starts_in_registered_state() {
        let universe = five_states();
        let machine = universe.machine(&"state3").unwrap();
        assert_eq!(machine.current_state(), &"state3");
        assert!(universe.machine(&"state0").is_err());
    }

    #[test]
    fn edges_cover_every_declared_transition() {
        let universe = five_states();
        let edges: Vec<(&str, &str)> = universe.edges().map(|(a, b)| (*a, *b)).collect();

        assert_eq!(
            edges,
            vec![
                ("state1", "state2"),
                ("state1", "state3"),
                ("state2", "state4"),
                ("state3", "state1"),
                ("state3", "state4"),
                ("state4", "state1"),
                ("state4", "state5"),
            ]
        );
    }

    #[test]
    fn terminal_states_have_no_edges() {
        let universe = five_states();
        let terminals: Vec<&str> = universe.terminal_states().map(|s| *s.id()).collect();
        assert_eq!(terminals, vec!["state5"]);
    }

    #[test]
    fn reachable_from_follows_edges() {
        let universe = five_states();

        let from_two = universe.reachable_from(&"state2").unwrap();
        assert_eq!(
            from_two,
            ["state1", "state2", "state3", "state4", "state5"]
                .into_iter()
                .collect()
        );

        assert!(universe.reachable_from(&"state5").unwrap().is_empty());
        assert!(universe.reachable_from(&"nowhere").is_err());
    }

    #[test]
    fn ids_are_ordered() {
        let universe = five_states();
        let ids: Vec<&str> = universe.ids().copied().collect();
        assert_eq!(ids, vec!["state1", "state2", "state3", "state4", "state5"]);
        assert_eq!(universe.states().count(), 5);
        assert!(!universe.is_empty());
    }

    #[test]
    fn json_definition_round_trips() {
        let json = r#"{"a": ["b", "c"], "b": ["c"], "c": []}"#;
        let universe: Universe<String> = Universe::from_json(json).unwrap();

        let encoded = universe.to_json().unwrap();
        let decoded: Universe<String> = Universe::from_json(&encoded).unwrap();

        assert_eq!(universe, decoded);
        assert_eq!(decoded.to_graph(), universe.to_graph());
    }

    #[test]
    fn json_definition_is_validated() {
        let err = Universe::<String>::from_json(r#"{"a": ["ghost"]}"#).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownTarget {
                from: "a".to_string(),
                to: "ghost".to_string(),
            }
        );

        let err = Universe::<String>::from_json("not json").unwrap_err();
        assert!(matches!(err, BuildError::DeserializationFailed(_)));

        let err = Universe::<String>::from_json("{}").unwrap_err();
        assert_eq!(err, BuildError::EmptyUniverse);
    }

    #[test]
    fn serde_deserialize_validates() {
        let result: Result<Universe<String>, _> = serde_json::from_str(r#"{"a": ["b"]}"#);
        assert!(result.is_err());
    }
}

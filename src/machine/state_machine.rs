//! State machine that validates every move against the current state.

use super::error::TransitionError;
use super::observer::TransitionObserver;
use crate::core::{State, StateHistory, StateId, StateTransition};
use chrono::Utc;
use std::fmt;

/// Holder of the current state.
///
/// The machine only knows its current [`State`]; the transition graph lives
/// in the states' allowed sets. A move is legal when the target's identifier
/// is in the current state's set, and a rejected move changes nothing.
///
/// # Example
///
/// ```rust
/// use statewise::core::State;
/// use statewise::machine::{StateMachine, TransitionError};
///
/// let state1 = State::new("state1", ["state2", "state3"]);
/// let state2 = State::new("state2", ["state4"]);
/// let state4 = State::new("state4", ["state1", "state5"]);
/// let state5 = State::terminal("state5");
///
/// let mut machine = StateMachine::new(state1.clone());
/// machine
///     .transit(state2)?
///     .transit(state4)?
///     .transit(state5)?;
/// assert_eq!(machine.current_state(), &"state5");
///
/// let err = machine.transit(state1).unwrap_err();
/// assert!(err.is_terminal());
/// assert_eq!(machine.current_state(), &"state5");
/// # Ok::<(), TransitionError<&'static str>>(())
/// ```
///
/// Two machines are equal when they sit in the same state and committed the
/// same moves in the same order. Commit timestamps are not compared.
#[derive(Clone, Debug)]
pub struct StateMachine<I: StateId> {
    current: State<I>,
    history: StateHistory<I>,
}

impl<I: StateId> StateMachine<I> {
    /// Create a machine in the initial state.
    pub fn new(initial: State<I>) -> Self {
        Self {
            current: initial,
            history: StateHistory::new(),
        }
    }

    /// Identifier of the current state (pure).
    pub fn current_state(&self) -> &I {
        self.current.id()
    }

    /// The full current state (pure).
    pub fn current(&self) -> &State<I> {
        &self.current
    }

    /// Whether the current state has no outgoing transitions (pure).
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Whether a transit to `target` would be accepted (pure).
    pub fn can_transit(&self, target: &I) -> bool {
        self.current.allows(target)
    }

    /// Committed transitions in order (pure).
    pub fn history(&self) -> &StateHistory<I> {
        &self.history
    }

    /// Validate a move without applying it.
    fn check(&self, next: &State<I>) -> Result<(), TransitionError<I>> {
        if self.current.allows(next.id()) {
            Ok(())
        } else {
            Err(TransitionError::Disallowed {
                from: self.current.id().clone(),
                to: next.id().clone(),
                allowed: self.current.allowed_transitions().clone(),
            })
        }
    }

    /// Replace the current state. Only called after `check` succeeded.
    fn commit(&mut self, next: State<I>) -> State<I> {
        let record = StateTransition {
            from: self.current.id().clone(),
            to: next.id().clone(),
            timestamp: Utc::now(),
            sequence: self.history.next_sequence(),
        };
        self.history.push(record);
        std::mem::replace(&mut self.current, next)
    }

    /// Move to `next` if the current state allows it.
    ///
    /// `next` need not be the canonical instance from a universe; only its
    /// identifier is checked. Returns the machine so moves can be chained
    /// with `?`. On error the machine is unchanged.
    pub fn transit(&mut self, next: State<I>) -> Result<&mut Self, TransitionError<I>> {
        self.check(&next)?;
        self.commit(next);
        Ok(self)
    }

    /// Like [`transit`](Self::transit), reporting the outcome to `observer`.
    pub fn transit_with<O>(
        &mut self,
        next: State<I>,
        observer: &O,
    ) -> Result<&mut Self, TransitionError<I>>
    where
        O: TransitionObserver<I> + ?Sized,
    {
        if let Err(err) = self.check(&next) {
            observer.on_rejected(&err);
            return Err(err);
        }
        let previous = self.commit(next);
        observer.on_transition(&previous, &self.current);
        Ok(self)
    }

    /// Value-semantics transit: returns a new machine in `next`, leaving
    /// `self` untouched whether or not the move is legal.
    ///
    /// ```rust
    /// use statewise::core::State;
    /// use statewise::machine::StateMachine;
    ///
    /// let start = StateMachine::new(State::new("state1", ["state2"]));
    /// let moved = start.transitioned(State::new("state2", ["state4"])).unwrap();
    ///
    /// assert_eq!(start.current_state(), &"state1");
    /// assert_eq!(moved.current_state(), &"state2");
    /// ```
    pub fn transitioned(&self, next: State<I>) -> Result<Self, TransitionError<I>> {
        self.check(&next)?;
        let mut machine = self.clone();
        machine.commit(next);
        Ok(machine)
    }
}

impl<I: StateId> PartialEq for StateMachine<I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.history.len() == other.history.len()
            && self
                .history
                .transitions()
                .iter()
                .zip(other.history.transitions())
                .all(|(a, b)| a.from == b.from && a.to == b.to && a.sequence == b.sequence)
    }
}

impl<I: StateId> Eq for StateMachine<I> {}

impl<I: StateId> fmt::Display for StateMachine<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn state1() -> State<&'static str> {
        State::new("state1", ["state2", "state3"])
    }
    fn state2() -> State<&'static str> {
        State::new("state2", ["state4"])
    }
    fn state3() -> State<&'static str> {
        State::new("state3", ["state1", "state4"])
    }
    fn state4() -> State<&'static str> {
        State::new("state4", ["state1", "state5"])
    }
    fn state5() -> State<&'static str> {
        State::terminal("state5")
    }

    #[test]
    fn new_machine_reports_initial_state() {
        let machine = StateMachine::new(state3());
        assert_eq!(machine.current_state(), &"state3");
        assert_eq!(machine.current(), &state3());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn legal_transit_moves_machine() {
        let mut machine = StateMachine::new(state1());
        machine.transit(state2()).unwrap();

        assert_eq!(machine.current_state(), &"state2");
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn illegal_transit_leaves_machine_unchanged() {
        let mut machine = StateMachine::new(state1());
        let before = machine.clone();

        let err = machine.transit(state4()).unwrap_err();

        assert_eq!(
            err,
            TransitionError::Disallowed {
                from: "state1",
                to: "state4",
                allowed: ["state2", "state3"].into_iter().collect(),
            }
        );
        assert_eq!(machine, before);
    }

    #[test]
    fn chained_transits_reach_terminal_state() {
        let mut machine = StateMachine::new(state1());
        machine
            .transit(state2())
            .and_then(|m| m.transit(state4()))
            .and_then(|m| m.transit(state5()))
            .unwrap();

        assert_eq!(machine.current_state(), &"state5");
        assert!(machine.is_terminal());

        let err = machine.transit(state1()).unwrap_err();
        assert!(err.is_terminal());
        assert_eq!(machine.current_state(), &"state5");
    }

    #[test]
    fn chain_stops_at_first_rejection() {
        let mut machine = StateMachine::new(state1());
        let result = machine
            .transit(state3())
            .and_then(|m| m.transit(state5()))
            .and_then(|m| m.transit(state1()));

        assert!(result.is_err());
        assert_eq!(machine.current_state(), &"state3");
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn self_transition_is_not_implicit() {
        let mut machine = StateMachine::new(state2());
        assert!(machine.transit(state2()).is_err());

        let looping = State::new("spin", ["spin"]);
        let mut machine = StateMachine::new(looping.clone());
        assert!(machine.transit(looping).is_ok());
        assert_eq!(machine.current_state(), &"spin");
    }

    #[test]
    fn target_need_not_be_canonical_instance() {
        // Only the identifier matters, not the target's own edge set.
        let mut machine = StateMachine::new(state1());
        machine.transit(State::terminal("state2")).unwrap();

        assert_eq!(machine.current_state(), &"state2");
        assert!(machine.is_terminal());
    }

    #[test]
    fn can_transit_matches_transit() {
        let machine = StateMachine::new(state4());
        assert!(machine.can_transit(&"state1"));
        assert!(machine.can_transit(&"state5"));
        assert!(!machine.can_transit(&"state2"));
    }

    #[test]
    fn transitioned_does_not_mutate_receiver() {
        let machine = StateMachine::new(state1());

        let moved = machine.transitioned(state2()).unwrap();
        assert_eq!(machine.current_state(), &"state1");
        assert!(machine.history().is_empty());
        assert_eq!(moved.current_state(), &"state2");
        assert_eq!(moved.history().len(), 1);

        assert!(machine.transitioned(state5()).is_err());
        assert_eq!(machine.current_state(), &"state1");
    }

    #[test]
    fn transitioned_results_compare_equal() {
        let start = StateMachine::new(state1());

        let a = start.transitioned(state2()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = start.transitioned(state2()).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, start);
    }

    #[test]
    fn equality_includes_the_path_taken() {
        let mut direct = StateMachine::new(state1());
        direct.transit(state2()).unwrap().transit(state4()).unwrap();

        let mut detour = StateMachine::new(state1());
        detour
            .transit(state3())
            .unwrap()
            .transit(state4())
            .unwrap();

        assert_eq!(direct.current_state(), detour.current_state());
        assert_ne!(direct, detour);
    }

    #[test]
    fn long_self_loop_keeps_every_move() {
        let spin = State::new("spin", ["spin"]);
        let mut machine = StateMachine::new(spin.clone());

        for _ in 0..50_000 {
            machine.transit(spin.clone()).unwrap();
        }

        assert_eq!(machine.history().len(), 50_000);
        assert_eq!(machine.history().last().map(|t| t.sequence), Some(50_000));
        assert_eq!(machine.current_state(), &"spin");
    }

    #[test]
    fn history_records_committed_moves_only() {
        let mut machine = StateMachine::new(state1());
        machine.transit(state2()).unwrap();
        let _ = machine.transit(state5());
        machine.transit(state4()).unwrap();

        let path = machine.history().get_path();
        assert_eq!(path, vec![&"state1", &"state2", &"state4"]);

        let sequences: Vec<usize> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.sequence)
            .collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[test]
    fn display_renders_current_id() {
        let machine = StateMachine::new(state3());
        assert_eq!(machine.to_string(), "state3");
    }

    #[derive(Default)]
    struct Counter {
        moves: Cell<usize>,
        rejections: Cell<usize>,
    }

    impl TransitionObserver<&'static str> for Counter {
        fn on_transition(&self, from: &State<&'static str>, to: &State<&'static str>) {
            assert_ne!(from.id(), to.id());
            self.moves.set(self.moves.get() + 1);
        }

        fn on_rejected(&self, _error: &TransitionError<&'static str>) {
            self.rejections.set(self.rejections.get() + 1);
        }
    }

    #[test]
    fn transit_with_notifies_observer() {
        let counter = Counter::default();
        let mut machine = StateMachine::new(state1());

        machine.transit_with(state2(), &counter).unwrap();
        assert!(machine.transit_with(state1(), &counter).is_err());
        machine.transit_with(state4(), &counter).unwrap();

        assert_eq!(counter.moves.get(), 2);
        assert_eq!(counter.rejections.get(), 1);
        assert_eq!(machine.current_state(), &"state4");
    }

    #[test]
    fn transit_with_accepts_trait_object() {
        let observer: Box<dyn TransitionObserver<&'static str>> =
            Box::new(crate::machine::TracingObserver::new());
        let mut machine = StateMachine::new(state1());

        machine.transit_with(state3(), observer.as_ref()).unwrap();
        assert_eq!(machine.current_state(), &"state3");
    }
}

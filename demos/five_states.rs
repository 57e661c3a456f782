//! Five-State Machine
//!
//! Walks the classic five-state graph and shows a terminal rejection.
//!
//! Key concepts:
//! - States as plain data: an id plus allowed destination ids
//! - Chained transits with `?`
//! - A rejected transit leaves the machine where it was
//! - Tracing observer for logging moves
//!
//! Run with: RUST_LOG=debug cargo run --example five_states

use statewise::state_ids;
use statewise::{StateMachine, TracingObserver, TransitionError};
use tracing_subscriber::EnvFilter;

state_ids! {
    enum Step {
        State1,
        State2,
        State3,
        State4,
        State5,
    }
    transitions: {
        State1 => [State2, State3],
        State2 => [State4],
        State3 => [State1, State4],
        State4 => [State1, State5],
        State5 => [],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Five-State Machine Example ===\n");

    let universe = Step::universe()?;
    let state = |id: Step| universe.resolve(&id).cloned();
    let observer = TracingObserver::named("five-states");

    let mut machine: StateMachine<Step> = universe.machine(&Step::State1)?;
    machine
        .transit_with(state(Step::State2)?, &observer)?
        .transit_with(state(Step::State4)?, &observer)?
        .transit_with(state(Step::State5)?, &observer)?;

    println!("Current state: {machine}");
    println!("Is terminal: {}", machine.is_terminal());

    match machine.transit_with(state(Step::State1)?, &observer) {
        Ok(_) => println!("Unexpected: left a terminal state"),
        Err(err @ TransitionError::Disallowed { .. }) => println!("Rejected: {err}"),
    }
    println!("Still at: {machine}");

    let path: Vec<String> = machine
        .history()
        .get_path()
        .iter()
        .map(|id| id.to_string())
        .collect();
    println!("Path: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Document Workflow
//!
//! Loads a workflow graph from a JSON definition and drives a document
//! through it, recovering from an illegal move.
//!
//! Run with: RUST_LOG=debug cargo run --example document_workflow

use statewise::{TracingObserver, Universe};

const WORKFLOW: &str = r#"{
    "draft": ["review"],
    "review": ["draft", "approved"],
    "approved": ["published", "draft"],
    "published": ["archived"],
    "archived": []
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow Example ===\n");

    let workflow: Universe<String> = Universe::from_json(WORKFLOW)?;
    println!("Loaded {} states", workflow.len());
    for (from, to) in workflow.edges() {
        println!("  {from} -> {to}");
    }

    let observer = TracingObserver::named("document-42");
    let mut document = workflow.machine(&"draft".to_string())?;

    for step in ["review", "published", "approved", "published"] {
        let next = workflow.resolve(&step.to_string())?.clone();
        match document.transit_with(next, &observer) {
            Ok(doc) => println!("Moved to {doc}"),
            Err(err) => {
                println!("Rejected: {err}");
                println!("Options from here: {:?}", err.allowed());
            }
        }
    }

    let reachable = workflow.reachable_from(document.current_state())?;
    println!("\nReachable from {document}: {reachable:?}");
    println!("Transitions committed: {}", document.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Daily Routine
//!
//! Walks a small routine machine through its transitions, then exercises
//! undo, redo, and reset.
//!
//! Run with: RUST_LOG=debug cargo run --example daily_routine

use statewise::builder::{MachineBuilder, StateBuilder};
use statewise::MachineError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Daily Routine Example ===\n");

    let mut machine = MachineBuilder::new()
        .initial("normal")
        .state("normal", StateBuilder::new().on("study", "busy"))
        .state(
            "busy",
            StateBuilder::new()
                .on("get_tired", "sleeping")
                .on("get_hungry", "hungry"),
        )
        .state("hungry", StateBuilder::new().on("eat", "normal"))
        .state(
            "sleeping",
            StateBuilder::new()
                .on("get_hungry", "hungry")
                .on("get_up", "normal"),
        )
        .build()?;

    println!("States: {:?}", machine.get_states(None));
    println!(
        "States reacting to get_hungry: {:?}\n",
        machine.get_states(Some("get_hungry"))
    );

    for event in ["study", "get_tired", "get_hungry", "eat"] {
        machine.trigger(event)?;
        println!("{event:>12} -> {}", machine.current_state());
    }

    match machine.trigger("get_up") {
        Err(MachineError::InvalidTransition { event, state }) => {
            println!("\nCannot '{event}' while '{state}'");
        }
        other => other?,
    }

    println!("\nUndo: {} -> {}", machine.undo(), machine.current_state());
    println!("Undo: {} -> {}", machine.undo(), machine.current_state());
    println!("Redo: {} -> {}", machine.redo(), machine.current_state());

    machine.reset();
    println!("\nAfter reset: {}", machine.current_state());
    println!("Can undo: {}, can redo: {}", machine.can_undo(), machine.can_redo());

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Pattern 1: Abstraction
//! Example: A coffee machine that only exposes what the user needs
//!
//! Run with: cargo run --example p1_abstraction

use oop_lessons::{CoffeeMachine, EntityError};

fn main() -> Result<(), EntityError> {
    println!("=== Making Coffee ===");
    let mut machine = CoffeeMachine::new();
    machine.fill(20)?;
    // The caller never sees how water is tracked
    println!("{}", machine.make_coffee()?);

    println!("\n=== Failing Fast ===");
    let empty = CoffeeMachine::new();
    match empty.make_coffee() {
        Err(EntityError::PreconditionFailed(msg)) => println!("  Empty machine: {}", msg),
        other => println!("  Unexpected: {:?}", other),
    }

    let mut machine = CoffeeMachine::new();
    match machine.fill(0) {
        Err(EntityError::InvalidArgument(msg)) => println!("  fill(0): {}", msg),
        other => println!("  Unexpected: {:?}", other),
    }

    println!("\n=== Key Points ===");
    println!("1. The water level is a private field; only fill() can change it");
    println!("2. Bad input returns an error instead of corrupting state");
    println!("3. Propagating the error with ? aborts the caller");
    Ok(())
}

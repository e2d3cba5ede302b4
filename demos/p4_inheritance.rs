//! Pattern 4: Inheritance
//! Example: A Dog built on top of an Animal
//!
//! Run with: cargo run --example p4_inheritance

use oop_lessons::{feed, Animal, Creature, Dog};

fn main() {
    let dog1 = Dog::new("Rocky", "German Shepherd");
    println!("{}", dog1.eat()); // shared behavior
    println!("{}", dog1.bark()); // dog-only behavior

    println!("\n=== Substitution ===");
    let creatures: Vec<Box<dyn Creature>> = vec![
        Box::new(Animal::new("Generic")),
        Box::new(Dog::new("Bella", "Beagle")),
    ];
    for creature in &creatures {
        println!("  {}", feed(creature.as_ref()));
    }
}

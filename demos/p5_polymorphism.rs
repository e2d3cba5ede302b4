//! Pattern 5: Polymorphism
//! Example: Same method name, different behavior
//!
//! Run with: cargo run --example p5_polymorphism

use oop_lessons::{Bird, Crow, Parrot, Speak};

fn main() {
    // Usage: Vec holds different concrete types via the shared trait.
    let birds: Vec<Box<dyn Speak>> = vec![Box::new(Bird), Box::new(Parrot), Box::new(Crow)];

    for bird in &birds {
        println!("{}", bird.speak());
    }
}

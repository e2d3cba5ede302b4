//! # Object-Oriented Patterns in Rust
//!
//! This crate demonstrates five object-oriented concepts with toy entities:
//!
//! ## Pattern 1: Abstraction
//! - `CoffeeMachine` exposes `fill` and `make_coffee`, nothing else
//! - Fail-fast errors for bad input and unmet preconditions
//!
//! ## Pattern 2: Classes and Objects
//! - `Car` with public fields and a behavior method
//!
//! ## Pattern 3: Encapsulation
//! - `BankAccount` with a private balance
//! - Fail-soft `deposit`/`withdraw` that report instead of erroring
//!
//! ## Pattern 4: Inheritance
//! - `Dog` builds on `Animal` through composition
//! - The `Creature` trait makes a `Dog` usable wherever an `Animal` is
//!
//! ## Pattern 5: Polymorphism
//! - `Speak` trait with a default method and per-variant overrides
//! - Heterogeneous `Vec<Box<dyn Speak>>`
//!
//! Run demos with: `cargo run --example <name>`
//! Run every lesson with: `cargo run --bin oop-lessons`

pub mod abstraction;
pub mod classes;
pub mod config;
pub mod console;
pub mod encapsulation;
pub mod error;
pub mod inheritance;
pub mod lesson;
pub mod polymorphism;

pub use abstraction::CoffeeMachine;
pub use classes::Car;
pub use config::LessonConfig;
pub use console::{Console, Terminal, Transcript};
pub use encapsulation::{BankAccount, Transaction};
pub use error::{ConfigError, EntityError, LessonError};
pub use inheritance::{feed, Animal, Creature, Dog};
pub use lesson::{run_all, Lesson};
pub use polymorphism::{chorus, flock, Bird, Crow, Parrot, Speak};

//! Pattern 5: Polymorphism
//!
//! Same method name, different behavior. The caller holds `dyn Speak`
//! and never asks which bird it has.

pub trait Speak {
    fn speak(&self) -> String {
        "Bird is making a sound.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bird;

#[derive(Debug, Clone, Copy, Default)]
pub struct Parrot;

#[derive(Debug, Clone, Copy, Default)]
pub struct Crow;

impl Speak for Bird {}

impl Speak for Parrot {
    fn speak(&self) -> String {
        "Parrot says: hahaha".to_string()
    }
}

impl Speak for Crow {
    fn speak(&self) -> String {
        "Crow says: kakakaa".to_string()
    }
}

/// One line per bird, in collection order.
pub fn chorus(birds: &[Box<dyn Speak>]) -> Vec<String> {
    birds.iter().map(|bird| bird.speak()).collect()
}

/// The flock from the lesson: a plain bird followed by each subtype.
pub fn flock() -> Vec<Box<dyn Speak>> {
    vec![Box::new(Bird), Box::new(Parrot), Box::new(Crow)]
}

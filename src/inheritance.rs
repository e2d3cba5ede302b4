//! Pattern 4: Inheritance
//!
//! Rust has no `extends`. A `Dog` owns the `Animal` it was built from and
//! forwards the shared behavior to it through the `Creature` trait.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Animal { name: name.into() }
    }
}

/// Behavior every animal shares. Implementors only say where their
/// `Animal` part lives; `name` and `eat` come for free.
pub trait Creature {
    fn animal(&self) -> &Animal;

    fn name(&self) -> &str {
        &self.animal().name
    }

    fn eat(&self) -> String {
        format!("{} is eating.", self.name())
    }
}

impl Creature for Animal {
    fn animal(&self) -> &Animal {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    base: Animal,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        // base part first, then the dog-specific fields
        let base = Animal::new(name);
        Dog {
            base,
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn bark(&self) -> String {
        format!("{} the {} is barking!", self.name(), self.breed)
    }
}

impl Creature for Dog {
    fn animal(&self) -> &Animal {
        &self.base
    }
}

/// Accepts any creature; the caller does not care which one.
pub fn feed(creature: &dyn Creature) -> String {
    creature.eat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_eats_and_barks() {
        let dog = Dog::new("Rocky", "German Shepherd");
        assert_eq!(dog.eat(), "Rocky is eating.");
        assert_eq!(dog.bark(), "Rocky the German Shepherd is barking!");
        assert!(dog.bark().contains("Rocky"));
        assert!(dog.bark().contains("German Shepherd"));
    }

    #[test]
    fn dog_shares_base_construction() {
        let dog = Dog::new("Rocky", "German Shepherd");
        assert_eq!(dog.animal(), &Animal::new("Rocky"));
        assert_eq!(dog.name(), "Rocky");
        assert_eq!(dog.breed(), "German Shepherd");
    }

    #[test]
    fn dog_substitutes_for_animal() {
        let animal = Animal::new("Rocky");
        let dog = Dog::new("Rocky", "Beagle");
        assert_eq!(feed(&animal), feed(&dog));

        let creatures: Vec<Box<dyn Creature>> = vec![Box::new(animal), Box::new(dog)];
        let meals: Vec<String> = creatures.iter().map(|c| c.eat()).collect();
        assert_eq!(meals, ["Rocky is eating.", "Rocky is eating."]);
    }
}

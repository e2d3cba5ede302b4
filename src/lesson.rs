//! Scripted walkthroughs, one per concept.
//!
//! Each lesson builds its entities, calls them in a fixed order and sends
//! every announcement to a `Console`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::abstraction::CoffeeMachine;
use crate::classes::Car;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::encapsulation::BankAccount;
use crate::error::{ConfigError, EntityError, LessonError};
use crate::inheritance::{Creature, Dog};
use crate::polymorphism::{chorus, flock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lesson {
    Abstraction,
    Classes,
    Encapsulation,
    Inheritance,
    Polymorphism,
}

impl Lesson {
    pub const ALL: [Lesson; 5] = [
        Lesson::Abstraction,
        Lesson::Classes,
        Lesson::Encapsulation,
        Lesson::Inheritance,
        Lesson::Polymorphism,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Lesson::Abstraction => "abstraction",
            Lesson::Classes => "classes",
            Lesson::Encapsulation => "encapsulation",
            Lesson::Inheritance => "inheritance",
            Lesson::Polymorphism => "polymorphism",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lesson::Abstraction => "Abstraction",
            Lesson::Classes => "Classes and Objects",
            Lesson::Encapsulation => "Encapsulation",
            Lesson::Inheritance => "Inheritance",
            Lesson::Polymorphism => "Polymorphism",
        }
    }

    /// Runs the lesson with its stock inputs.
    pub fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        self.run_with(DEFAULT_COFFEE_WATER, console)
    }

    /// `coffee_water` is what the abstraction lesson pours into its machine;
    /// zero or too little makes that lesson abort.
    pub fn run_with(&self, coffee_water: i64, console: &mut dyn Console) -> Result<(), LessonError> {
        info!(lesson = self.name(), "running lesson");
        let outcome = match self {
            Lesson::Abstraction => abstraction(console, coffee_water),
            Lesson::Classes => classes(console),
            Lesson::Encapsulation => encapsulation(console),
            Lesson::Inheritance => inheritance(console),
            Lesson::Polymorphism => polymorphism(console),
        };
        outcome.map_err(|source| LessonError::Entity {
            lesson: self.name().to_string(),
            source,
        })
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownLesson(s.to_string()))
    }
}

/// Water poured into the coffee machine unless configured otherwise.
pub const DEFAULT_COFFEE_WATER: i64 = 20;

/// Runs the configured lessons in order, stopping at the first one that aborts.
pub fn run_all(config: &LessonConfig, console: &mut dyn Console) -> Result<(), LessonError> {
    for lesson in &config.lessons {
        console.begin(lesson.title());
        lesson.run_with(config.coffee_water, console)?;
    }
    Ok(())
}

fn abstraction(console: &mut dyn Console, water: i64) -> Result<(), EntityError> {
    let mut machine = CoffeeMachine::new();
    machine.fill(water)?;
    console.say(machine.make_coffee()?);
    Ok(())
}

fn classes(console: &mut dyn Console) -> Result<(), EntityError> {
    let car1 = Car::new("Tesla", "Red");
    let car2 = Car::new("BMW", "Blue");
    console.say(&car1.drive());
    console.say(&car2.drive());
    Ok(())
}

fn encapsulation(console: &mut dyn Console) -> Result<(), EntityError> {
    let mut account = BankAccount::new("Sreeraj", 1000);
    console.say(&account.deposit(500).to_string());
    console.say(&account.withdraw(200).to_string());
    console.say(&account.balance().to_string());
    Ok(())
}

fn inheritance(console: &mut dyn Console) -> Result<(), EntityError> {
    let dog = Dog::new("Rocky", "German Shepherd");
    console.say(&dog.eat());
    console.say(&dog.bark());
    Ok(())
}

fn polymorphism(console: &mut dyn Console) -> Result<(), EntityError> {
    for line in chorus(&flock()) {
        console.say(&line);
    }
    Ok(())
}

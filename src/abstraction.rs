//! Pattern 1: Abstraction
//!
//! Callers see `fill` and `make_coffee`. How water is tracked stays inside.

use tracing::debug;

use crate::error::EntityError;

/// Minimum water needed to brew one cup.
pub const WATER_PER_CUP: i64 = 10;

#[derive(Debug, Default)]
pub struct CoffeeMachine {
    water_amount: i64,
}

impl CoffeeMachine {
    /// A new machine starts empty.
    pub fn new() -> Self {
        CoffeeMachine { water_amount: 0 }
    }

    /// Adds water. Non-positive amounts are rejected and leave the tank as is.
    pub fn fill(&mut self, amount: i64) -> Result<(), EntityError> {
        if amount <= 0 {
            return Err(EntityError::invalid_argument("Amount must be positive!"));
        }
        self.water_amount = self
            .water_amount
            .checked_add(amount)
            .ok_or_else(|| EntityError::invalid_argument("Amount overflows the tank!"))?;
        debug!(amount, water = self.water_amount, "filled coffee machine");
        Ok(())
    }

    /// Brewing does not draw down the tank.
    pub fn make_coffee(&self) -> Result<&'static str, EntityError> {
        if self.water_amount < WATER_PER_CUP {
            return Err(EntityError::precondition_failed("Not enough water!"));
        }
        Ok("Coffee ready")
    }

    pub fn water_amount(&self) -> i64 {
        self.water_amount
    }
}

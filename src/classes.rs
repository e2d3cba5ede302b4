//! Pattern 2: Classes and Objects
//!
//! A struct is the blueprint, each value built from it is an instance.
//! Everything here is public: this is the contrast case to encapsulation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub brand: String,
    pub color: String,
}

impl Car {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Car {
            brand: brand.into(),
            color: color.into(),
        }
    }

    pub fn drive(&self) -> String {
        format!("{} is driving", self.brand)
    }
}

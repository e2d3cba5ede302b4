//! Pattern 2: Classes and Objects
//! Example: One struct, many instances
//!
//! Run with: cargo run --example p2_classes

use oop_lessons::Car;

fn main() {
    println!("=== Creating Instances ===");
    let car1 = Car::new("Tesla", "Red");
    let car2 = Car::new("BMW", "Blue");

    println!("{}", car1.drive());
    println!("{}", car2.drive());

    // Public fields: anyone can read or change them
    println!("\n=== Public Fields ===");
    let mut car3 = car2.clone();
    car3.color = "Black".to_string();
    println!("  {} in {} (original still {})", car3.brand, car3.color, car2.color);
}

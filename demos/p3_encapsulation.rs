//! Pattern 3: Encapsulation
//! Example: Bank account with a private balance
//!
//! Run with: cargo run --example p3_encapsulation

use oop_lessons::BankAccount;

fn main() {
    println!("=== Account Activity ===");
    let mut account = BankAccount::new("Sreeraj", 1000);
    println!("{}", account.deposit(500));
    println!("{}", account.withdraw(200));
    println!("{}", account.balance());

    // account.balance = 1_000_000; // does not compile: field is private

    println!("\n=== Failing Softly ===");
    println!("  {}", account.deposit(-50));
    println!("  {}", account.withdraw(5000));
    println!("  Balance unchanged: {}", account.balance());

    println!("\n=== Key Points ===");
    println!("1. Private fields are only reachable from inside the module");
    println!("2. Every mutation goes through a checked method");
    println!("3. Rejections are reported as values, the program keeps going");
}

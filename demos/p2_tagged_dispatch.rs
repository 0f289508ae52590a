//! Pattern 2: Tagged Variants
//! Example: the same lifespan lookup with an enum and match
//!
//! Run with: cargo run --example p2_tagged_dispatch

use solid_principles::tagged::Species;
use solid_principles::visitor::lifespan;

fn main() {
    println!("=== Tagged Dispatch Demo ===\n");

    for species in Species::ALL {
        println!("{}: {} years, says {}", species, species.lifespan(), species.sound());
        // The enum and the visitor agree
        assert_eq!(species.lifespan(), lifespan(species.into_animal().as_ref()));
    }

    println!("\n--- Parsing ---");
    for input in ["cat", "DOG", "hamster"] {
        match input.parse::<Species>() {
            Ok(species) => println!("'{input}' -> {species}"),
            Err(err) => println!("'{input}' -> error: {err}"),
        }
    }

    println!("\n=== Key Points ===");
    println!("- Pick an enum when kinds are stable and operations grow");
    println!("- Keep trait + visitor when downstream code may add kinds");
}

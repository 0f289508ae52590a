//! Pattern 3: Liskov Substitution
//! Example: generic bounds vs trait objects over the same Animal trait
//!
//! Run with: cargo run --example p3_substitution

use solid_principles::substitution::{total_lifespan_dynamic, total_lifespan_static};
use solid_principles::visitor::{Animal, Cat, Dog};

fn main() {
    println!("=== Substitution Demo ===\n");

    // Static dispatch: one concrete type per call, resolved at compile time
    println!("cats: {}", total_lifespan_static(&[Cat, Cat, Cat]));
    println!("dogs: {}", total_lifespan_static(&[Dog, Dog]));

    // Dynamic dispatch: mixed herd, resolved through the vtable
    let herd: Vec<Box<dyn Animal>> = vec![Box::new(Cat), Box::new(Dog), Box::new(Cat)];
    let total = total_lifespan_dynamic(&herd);
    println!("mixed herd: {}", total);
    assert_eq!(total, 33);

    println!("\n=== Key Points ===");
    println!("- Generic bounds: zero-cost, homogeneous");
    println!("- Trait objects: one vtable hop, heterogeneous collections");
}

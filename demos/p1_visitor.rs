//! Pattern 1: Visitor Pattern
//! Example: adding a lifespan() "method" to a hierarchy we don't own
//!
//! Run with: cargo run --example p1_visitor

use solid_principles::visitor::{lifespan, Animal, Cat, Dog, LifeSpanVisitor, SoundVisitor};

fn main() {
    println!("=== Visitor Pattern Demo ===\n");

    // The classic version: the visitor writes into our variable
    let mut years = 10;
    let a: Box<dyn Animal> = Box::new(Cat);
    a.accept(&mut LifeSpanVisitor::new(&mut years));
    println!("a {} lives {} years", a.name(), years);
    assert_eq!(years, 10);

    let b: Box<dyn Animal> = Box::new(Dog);
    b.accept(&mut LifeSpanVisitor::new(&mut years));
    println!("a {} lives {} years", b.name(), years);
    assert_eq!(years, 13);

    // Same visitor, return-value style
    println!("\n--- Returning instead of writing ---");
    for animal in [&a, &b] {
        println!("{}: {}", animal.name(), lifespan(animal.as_ref()));
    }

    // A brand new operation, no change to Animal/Cat/Dog
    println!("\n--- Another visitor ---");
    let mut sounds = SoundVisitor::new();
    a.accept(&mut sounds);
    b.accept(&mut sounds);
    println!("sounds so far: {:?}", sounds.sounds());
    let all: Vec<&str> = sounds.into_sounds();
    println!("collected {} sounds", all.len());

    println!("\n=== Key Points ===");
    println!("- New operations: write a visitor (cheap)");
    println!("- New animals: edit every visitor (the compiler lists them)");
    println!("- accept() is a customization point when the best interface is unclear");
}

//! Pattern 0: Single Responsibility
//! Example: one shelter report, written four ways
//!
//! Run with: cargo run --example p0_single_responsibility

use solid_principles::responsibility::{
    format_summary, parse_roster, shelter_report, shelter_report_monolithic,
    shelter_report_with_closure, RosterTally,
};

fn main() {
    println!("=== Single Responsibility Demo ===\n");

    let input = "cat, dog, dog, cat, cat";

    // Parsing, counting and formatting tangled together
    let tangled = shelter_report_monolithic(input).unwrap();
    println!("monolithic:    {tangled}");

    // (1) one job per function
    let split = shelter_report(input).unwrap();
    println!("small fns:     {split}");

    // (2) the running state lives in a struct
    let mut tally = RosterTally::new();
    for species in parse_roster(input).unwrap() {
        tally.record(species);
    }
    println!("stateful tally: {}", format_summary(&tally.summary()));

    // (3) a closure captures the state instead
    let closure = shelter_report_with_closure(input).unwrap();
    println!("closure:       {closure}");

    assert_eq!(tangled, split);
    assert_eq!(split, closure);

    println!("\n--- Errors still surface ---");
    if let Err(err) = shelter_report("cat, parrot") {
        println!("error: {err}");
    }

    println!("\n=== Key Points ===");
    println!("- Split functions that do several jobs");
    println!("- Move growing state into a struct");
    println!("- Closures fit the middle ground");
}

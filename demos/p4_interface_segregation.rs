//! Pattern 4: Interface Segregation
//! Example: stapling code that never sees a printer
//!
//! Run with: cargo run --example p4_interface_segregation

use solid_principles::segregation::{staple_all, OfficeJob, PrintJob, StapleJob, StapleOnlyJob};

fn main() {
    println!("=== Interface Segregation Demo ===\n");

    let mut report = OfficeJob::new(5);
    println!("printed {} pages", report.print());
    match report.staple() {
        Ok(()) => println!("report stapled: {}", report.is_stapled()),
        Err(err) => println!("report not stapled: {err}"),
    }

    // staple_all only needs StapleJob
    let mut loose = vec![StapleOnlyJob::new(3), StapleOnlyJob::new(2)];
    match staple_all(&mut loose) {
        Ok(sheets) => println!("stapled {sheets} loose sheets"),
        Err(err) => println!("failed: {err}"),
    }

    println!("\n--- Empty stack ---");
    let mut empty = vec![StapleOnlyJob::new(0)];
    if let Err(err) = staple_all(&mut empty) {
        println!("expected error: {err}");
    }
}

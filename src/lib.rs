//! # SOLID Principles in Rust
//!
//! This crate walks through the SOLID principles with small, independent
//! lessons. Nothing here is shared between lessons; each module stands alone.
//!
//! ## Pattern 0: Single Responsibility
//! - One tangled function split into small functions, a stateful struct
//!   and a capturing closure
//!
//! ## Pattern 1: Visitor Pattern (Open/Closed)
//! - `Animal` trait with an `accept` customization point
//! - `AnimalVisitor` with one handler per kind
//! - `LifeSpanVisitor` writing into a caller-owned slot
//!
//! ## Pattern 2: Tagged Variants
//! - `Species` enum and `match` as the sum-type alternative
//!
//! ## Pattern 3: Liskov Substitution
//! - Generic bounds (static dispatch) vs trait objects (dynamic dispatch)
//!
//! ## Pattern 4: Interface Segregation
//! - Narrow `PrintJob` and `StapleJob` traits instead of one fat `Job`
//!
//! ## Pattern 5: Dependency Inversion
//! - `ThumbnailService` depending on a `Folder` abstraction, two ways
//!
//! Run the full tour with: `cargo run --bin solid_tour [tour.toml]`
//!
//! Run examples with: `cargo run --example <name>`

pub mod config;
pub mod error;
pub mod inversion;
pub mod responsibility;
pub mod segregation;
pub mod substitution;
pub mod tagged;
pub mod visitor;

pub use error::SolidError;

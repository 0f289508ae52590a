//! Pattern 1: Visitor Pattern (Open/Closed Principle)
//!
//! The `Animal` hierarchy is closed for modification but open for extension:
//! a user who wishes `Animal` had a `lifespan()` method writes a visitor
//! instead of editing the trait.
//!
//! 1. `AnimalVisitor` declares one handler per concrete animal.
//! 2. Every animal implements `accept`, calling the handler for its own type.
//! 3. `LifeSpanVisitor` implements the method the trait designer left out.
//!
//! Adding an operation means adding a visitor. Adding an animal means
//! touching every visitor, and the compiler enforces it:
//!
//! ```compile_fail
//! use solid_principles::visitor::{AnimalVisitor, Cat};
//!
//! struct OnlyCats;
//!
//! // error[E0046]: not all trait items implemented, missing: `visit_dog`
//! impl AnimalVisitor for OnlyCats {
//!     fn visit_cat(&mut self, _cat: &Cat) {}
//! }
//! ```

use log::debug;
use std::fmt;

// ============================================
// 1. The Visitor Trait
// ============================================

/// One handler per concrete animal. No default bodies: a visitor must cover
/// every kind.
pub trait AnimalVisitor {
    fn visit_cat(&mut self, cat: &Cat);
    fn visit_dog(&mut self, dog: &Dog);
}

// ============================================
// 2. The Animal Hierarchy
// ============================================

/// Base abstraction. Object safe, so animals can live behind `Box<dyn Animal>`.
pub trait Animal: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Customization point: routes to the visitor handler for `Self`.
    fn accept(&self, visitor: &mut dyn AnimalVisitor);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

impl Animal for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn accept(&self, visitor: &mut dyn AnimalVisitor) {
        debug!("cat accepting visitor");
        visitor.visit_cat(self);
    }
}

impl Animal for Dog {
    fn name(&self) -> &'static str {
        "dog"
    }

    fn accept(&self, visitor: &mut dyn AnimalVisitor) {
        debug!("dog accepting visitor");
        visitor.visit_dog(self);
    }
}

// ============================================
// 3. Visitor Implementations
// ============================================

pub const CAT_LIFESPAN: u32 = 10;
pub const DOG_LIFESPAN: u32 = 13;

/// Writes the lifespan in years into a slot owned by the caller.
///
/// ```
/// use solid_principles::visitor::{Animal, Cat, LifeSpanVisitor};
///
/// let animal: Box<dyn Animal> = Box::new(Cat);
/// let mut years = 0;
/// animal.accept(&mut LifeSpanVisitor::new(&mut years));
/// assert_eq!(years, 10);
/// ```
pub struct LifeSpanVisitor<'a> {
    years: &'a mut u32,
}

impl<'a> LifeSpanVisitor<'a> {
    pub fn new(years: &'a mut u32) -> Self {
        LifeSpanVisitor { years }
    }
}

impl AnimalVisitor for LifeSpanVisitor<'_> {
    fn visit_cat(&mut self, _cat: &Cat) {
        *self.years = CAT_LIFESPAN;
    }

    fn visit_dog(&mut self, _dog: &Dog) {
        *self.years = DOG_LIFESPAN;
    }
}

/// Return-value flavour of `LifeSpanVisitor` for callers that don't need the
/// output slot.
pub fn lifespan(animal: &dyn Animal) -> u32 {
    let mut years = 0;
    animal.accept(&mut LifeSpanVisitor::new(&mut years));
    years
}

/// A second operation added without touching `Animal`.
#[derive(Debug, Default)]
pub struct SoundVisitor {
    sounds: Vec<&'static str>,
}

impl SoundVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sounds(&self) -> &[&'static str] {
        &self.sounds
    }

    pub fn into_sounds(self) -> Vec<&'static str> {
        self.sounds
    }
}

impl AnimalVisitor for SoundVisitor {
    fn visit_cat(&mut self, _cat: &Cat) {
        self.sounds.push("meow");
    }

    fn visit_dog(&mut self, _dog: &Dog) {
        self.sounds.push("woof");
    }
}

//! Pattern 3: Liskov Substitution
//!
//! Rust models subtyping with traits, either as generic bounds (static
//! dispatch, one copy per type) or as trait objects (dynamic dispatch through
//! a vtable). Any `Animal` can stand in for another in both functions below.
//! Tradeoff: efficiency vs dynamism.

use crate::visitor::{lifespan, Animal};

/// Static dispatch: homogeneous slice, monomorphised per animal type.
pub fn total_lifespan_static<A: Animal>(animals: &[A]) -> u32 {
    animals.iter().map(|a| lifespan(a)).sum()
}

/// Dynamic dispatch: mixed herd behind `Box<dyn Animal>`.
pub fn total_lifespan_dynamic(animals: &[Box<dyn Animal>]) -> u32 {
    animals.iter().map(|a| lifespan(a.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{Cat, Dog};

    #[test]
    fn test_static_totals() {
        assert_eq!(total_lifespan_static(&[Cat, Cat]), 20);
        assert_eq!(total_lifespan_static(&[Dog]), 13);
        assert_eq!(total_lifespan_static::<Cat>(&[]), 0);
    }

    #[test]
    fn test_dynamic_totals() {
        let herd: Vec<Box<dyn Animal>> = vec![Box::new(Cat), Box::new(Dog)];
        assert_eq!(total_lifespan_dynamic(&herd), 23);
        assert_eq!(total_lifespan_dynamic(&[]), 0);
    }

    #[test]
    fn test_static_and_dynamic_agree() {
        let dogs = [Dog, Dog, Dog];
        let boxed: Vec<Box<dyn Animal>> = dogs
            .iter()
            .map(|d| Box::new(*d) as Box<dyn Animal>)
            .collect();
        assert_eq!(total_lifespan_static(&dogs), total_lifespan_dynamic(&boxed));
    }
}

//! Pattern 2: Tagged Variants
//!
//! When the set of kinds is stable and operations keep growing, a closed enum
//! plus `match` replaces the two-hierarchy visitor. Each operation returns its
//! value directly, and a missing arm is a compile error just like a missing
//! visitor handler.

use crate::error::SolidError;
use crate::visitor::{Animal, Cat, Dog, CAT_LIFESPAN, DOG_LIFESPAN};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    pub fn lifespan(self) -> u32 {
        match self {
            Species::Cat => CAT_LIFESPAN,
            Species::Dog => DOG_LIFESPAN,
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            Species::Cat => "meow",
            Species::Dog => "woof",
        }
    }

    /// Bridges back to the open hierarchy.
    pub fn into_animal(self) -> Box<dyn Animal> {
        match self {
            Species::Cat => Box::new(Cat),
            Species::Dog => Box::new(Dog),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        };
        f.write_str(name)
    }
}

impl FromStr for Species {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            _ => Err(SolidError::UnknownAnimal(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{lifespan, SoundVisitor};

    #[test]
    fn test_tagged_matches_visitor() {
        for species in Species::ALL {
            let animal = species.into_animal();
            assert_eq!(species.lifespan(), lifespan(animal.as_ref()));

            let mut sounds = SoundVisitor::new();
            animal.accept(&mut sounds);
            assert_eq!(sounds.sounds(), &[species.sound()]);
        }
    }

    #[test]
    fn test_parse_species() {
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!(" Dog ".parse::<Species>().unwrap(), Species::Dog);
        for species in Species::ALL {
            assert_eq!(species.to_string().parse::<Species>().unwrap(), species);
        }
    }

    #[test]
    fn test_parse_unknown_species() {
        let err = "hamster".parse::<Species>().unwrap_err();
        assert!(matches!(err, SolidError::UnknownAnimal(name) if name == "hamster"));
    }

    #[test]
    fn test_into_animal_keeps_identity() {
        assert_eq!(Species::Cat.into_animal().name(), "cat");
        assert_eq!(Species::Dog.into_animal().name(), "dog");
    }
}

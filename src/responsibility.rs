//! Pattern 0: Single Responsibility
//!
//! `shelter_report_monolithic` parses a roster, tallies it and formats the
//! result all in one body. The same job is then split three ways:
//! 1. smaller single-purpose functions
//! 2. a struct that owns the running state (Rust's answer to a functor)
//! 3. a capturing closure, for when a struct is overkill but one big
//!    function is too tangled

use crate::error::SolidError;
use crate::tagged::Species;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub cats: usize,
    pub dogs: usize,
    pub total_years: u32,
}

// ============================================
// 0. Everything in One Function
// ============================================

pub fn shelter_report_monolithic(input: &str) -> Result<String, SolidError> {
    let mut cats = 0;
    let mut dogs = 0;
    let mut total_years = 0;
    for name in input.split(',') {
        if name.trim().is_empty() {
            continue;
        }
        match name.trim().to_ascii_lowercase().as_str() {
            "cat" => {
                cats += 1;
                total_years += 10;
            }
            "dog" => {
                dogs += 1;
                total_years += 13;
            }
            _ => return Err(SolidError::UnknownAnimal(name.to_string())),
        }
    }
    Ok(format!("{cats} cats, {dogs} dogs, {total_years} years in total"))
}

// ============================================
// 1. Smaller Functions
// ============================================

/// Comma separated names; blank entries are skipped.
pub fn parse_roster(input: &str) -> Result<Vec<Species>, SolidError> {
    input
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(str::parse)
        .collect()
}

pub fn summarize(roster: &[Species]) -> Summary {
    let mut tally = RosterTally::new();
    for species in roster {
        tally.record(*species);
    }
    tally.summary()
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "{} cats, {} dogs, {} years in total",
        summary.cats, summary.dogs, summary.total_years
    )
}

pub fn shelter_report(input: &str) -> Result<String, SolidError> {
    let roster = parse_roster(input)?;
    Ok(format_summary(&summarize(&roster)))
}

// ============================================
// 2. State in a Struct
// ============================================

#[derive(Debug, Default)]
pub struct RosterTally {
    summary: Summary,
}

impl RosterTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, species: Species) {
        match species {
            Species::Cat => self.summary.cats += 1,
            Species::Dog => self.summary.dogs += 1,
        }
        self.summary.total_years += species.lifespan();
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }
}

// ============================================
// 3. Capturing Closure
// ============================================

pub fn shelter_report_with_closure(input: &str) -> Result<String, SolidError> {
    let mut summary = Summary::default();
    let mut record = |species: Species| {
        match species {
            Species::Cat => summary.cats += 1,
            Species::Dog => summary.dogs += 1,
        }
        summary.total_years += species.lifespan();
    };

    for species in parse_roster(input)? {
        record(species);
    }
    Ok(format_summary(&summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_versions_agree() {
        for input in ["cat, dog, cat", "dog", "", " , Cat ,"] {
            let expected = shelter_report_monolithic(input).unwrap();
            assert_eq!(shelter_report(input).unwrap(), expected);
            assert_eq!(shelter_report_with_closure(input).unwrap(), expected);
        }
    }

    #[test]
    fn test_report_text() {
        assert_eq!(
            shelter_report("cat,dog,cat").unwrap(),
            "2 cats, 1 dogs, 33 years in total"
        );
        assert_eq!(shelter_report("").unwrap(), "0 cats, 0 dogs, 0 years in total");
    }

    #[test]
    fn test_unknown_animal_fails_everywhere() {
        assert!(matches!(
            shelter_report_monolithic("cat, fox"),
            Err(SolidError::UnknownAnimal(_))
        ));
        assert!(matches!(shelter_report("cat, fox"), Err(SolidError::UnknownAnimal(_))));
        assert!(matches!(
            shelter_report_with_closure("fox"),
            Err(SolidError::UnknownAnimal(_))
        ));
    }

    #[test]
    fn test_tally_keeps_state_between_calls() {
        let mut tally = RosterTally::new();
        tally.record(Species::Dog);
        assert_eq!(tally.summary().total_years, 13);

        tally.record(Species::Cat);
        assert_eq!(
            tally.summary(),
            Summary {
                cats: 1,
                dogs: 1,
                total_years: 23
            }
        );
    }

    #[test]
    fn test_parse_roster_skips_blanks() {
        assert_eq!(
            parse_roster("dog,, cat ").unwrap(),
            vec![Species::Dog, Species::Cat]
        );
        assert!(parse_roster(" ").unwrap().is_empty());
    }
}

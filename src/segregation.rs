//! Pattern 4: Interface Segregation
//!
//! No code should be forced to depend on methods it doesn't use. Instead of a
//! fat `Job` with printing and stapling methods mixed together, each concern
//! gets its own narrow trait. Stapling code asks only for `StapleJob`, so it
//! works with jobs that know nothing about printing.

use crate::error::SolidError;

pub trait PrintJob {
    fn pages(&self) -> u32;

    /// Prints every page and returns how many were printed.
    fn print(&mut self) -> u32;
}

pub trait StapleJob {
    fn sheets(&self) -> u32;

    /// Staples the stack. Fails when there is nothing to staple.
    fn staple(&mut self) -> Result<(), SolidError>;

    fn is_stapled(&self) -> bool;
}

/// Implements both interfaces.
#[derive(Debug, Default)]
pub struct OfficeJob {
    pages: u32,
    printed: u32,
    stapled: bool,
}

impl OfficeJob {
    pub fn new(pages: u32) -> Self {
        OfficeJob {
            pages,
            ..Default::default()
        }
    }

    pub fn printed(&self) -> u32 {
        self.printed
    }
}

impl PrintJob for OfficeJob {
    fn pages(&self) -> u32 {
        self.pages
    }

    fn print(&mut self) -> u32 {
        self.printed = self.pages;
        self.printed
    }
}

impl StapleJob for OfficeJob {
    // Only printed pages can be stapled
    fn sheets(&self) -> u32 {
        self.printed
    }

    fn staple(&mut self) -> Result<(), SolidError> {
        if self.sheets() == 0 {
            return Err(SolidError::NothingToStaple);
        }
        self.stapled = true;
        Ok(())
    }

    fn is_stapled(&self) -> bool {
        self.stapled
    }
}

/// A stack of loose sheets; it cannot print.
#[derive(Debug, Default)]
pub struct StapleOnlyJob {
    sheets: u32,
    stapled: bool,
}

impl StapleOnlyJob {
    pub fn new(sheets: u32) -> Self {
        StapleOnlyJob {
            sheets,
            stapled: false,
        }
    }
}

impl StapleJob for StapleOnlyJob {
    fn sheets(&self) -> u32 {
        self.sheets
    }

    fn staple(&mut self) -> Result<(), SolidError> {
        if self.sheets == 0 {
            return Err(SolidError::NothingToStaple);
        }
        self.stapled = true;
        Ok(())
    }

    fn is_stapled(&self) -> bool {
        self.stapled
    }
}

/// Staples every job, stopping at the first one that can't be stapled.
pub fn staple_all<J: StapleJob>(jobs: &mut [J]) -> Result<u32, SolidError> {
    let mut sheets = 0;
    for job in jobs.iter_mut() {
        job.staple()?;
        sheets += job.sheets();
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_job_prints_then_staples() {
        let mut job = OfficeJob::new(4);
        assert_eq!(job.pages(), 4);
        assert!(matches!(job.staple(), Err(SolidError::NothingToStaple)));

        assert_eq!(job.print(), 4);
        assert_eq!(job.printed(), 4);
        job.staple().unwrap();
        assert!(job.is_stapled());
    }

    #[test]
    fn test_empty_office_job_prints_nothing() {
        let mut job = OfficeJob::new(0);
        assert_eq!(job.print(), 0);
        assert!(job.staple().is_err());
    }

    #[test]
    fn test_staple_only_job() {
        let mut jobs = vec![StapleOnlyJob::new(2), StapleOnlyJob::new(5)];
        assert_eq!(staple_all(&mut jobs).unwrap(), 7);
        assert!(jobs.iter().all(|j| j.is_stapled()));
    }

    #[test]
    fn test_staple_all_stops_at_empty_job() {
        let mut jobs = vec![StapleOnlyJob::new(3), StapleOnlyJob::new(0), StapleOnlyJob::new(1)];
        assert!(matches!(staple_all(&mut jobs), Err(SolidError::NothingToStaple)));
        assert!(jobs[0].is_stapled());
        assert!(!jobs[2].is_stapled());
    }

    #[test]
    fn test_staple_all_accepts_office_jobs() {
        let mut jobs = vec![OfficeJob::new(1), OfficeJob::new(2)];
        for job in jobs.iter_mut() {
            job.print();
        }
        assert_eq!(staple_all(&mut jobs).unwrap(), 3);
    }
}

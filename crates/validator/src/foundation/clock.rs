//! Clock capability for date-dependent validators
//!
//! The national-ID validator rejects birth dates in the future, which makes
//! its answer depend on the current date. The dependency is expressed as the
//! [`Clock`] trait so production code reads the system clock while tests pin
//! a fixed date and stay deterministic.

use chrono::NaiveDate;

/// Source of the current calendar date.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// ```
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the current date from the system clock in local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
///
/// Intended for tests that assert boundary behavior around "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

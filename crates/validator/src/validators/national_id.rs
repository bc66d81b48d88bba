//! Egyptian national ID validator.
//!
//! A national ID is 14 digits laid out positionally:
//!
//! ```text
//! C YY MM DD GG SSSSS
//! 0 12 34 56 78 9..13
//! ```
//!
//! `C` selects the birth century (`2` = 1900s, `3` = 2000s), `YYMMDD` is the
//! birth date within that century, and `GG` is the governorate code. The
//! trailing serial/checksum region is not validated here.
//!
//! Validation runs as a sequence of gates that short-circuits on the first
//! failure: shape, century, calendar date (including leap years), the
//! not-in-future rule, and governorate membership. An out-of-range month or
//! day is an ordinary rejection, never a panic.

use chrono::NaiveDate;

use crate::foundation::{
    Clock, SystemClock, Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};
use crate::validators::governorate::is_known_governorate;

// ============================================================================
// NATIONAL ID VALIDATOR
// ============================================================================

/// Validates Egyptian national identification numbers.
///
/// The future-date gate compares the decoded birth date against "today",
/// which makes the validator clock-dependent: an ID encoding tomorrow is
/// rejected now and accepted tomorrow. Production code uses the default
/// [`SystemClock`]; tests inject a [`FixedClock`](crate::foundation::FixedClock)
/// to pin the boundary.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::NationalId;
/// use identity_validator::foundation::Validate;
///
/// let id = NationalId::new();
/// assert!(id.validate("29812251234567").is_ok()); // 1998-12-25, Dakahlia
/// assert!(id.validate("29813251234567").is_err()); // month 13
/// assert!(id.validate("29812250034567").is_err()); // governorate 00
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NationalId<C = SystemClock> {
    clock: C,
}

impl NationalId<SystemClock> {
    /// Creates a national ID validator reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for NationalId<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NationalId<C> {
    /// Creates a validator with an injected clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use identity_validator::validators::NationalId;
    /// use identity_validator::foundation::{FixedClock, Validate};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let id = NationalId::with_clock(FixedClock::new(today));
    /// assert!(id.validate("29812251234567").is_ok());
    /// ```
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    fn decode(input: &str) -> Result<DecodedNationalId, ValidationError> {
        let bytes = input.as_bytes();

        let base_year = match bytes[0] {
            b'2' => 1900,
            b'3' => 2000,
            other => {
                return Err(ValidationError::new(
                    "invalid_century",
                    "Century digit must be 2 or 3",
                )
                .with_param("century", char::from(other).to_string()));
            }
        };

        let year = base_year + i32::from(two_digits(bytes, 1));
        let month = u32::from(two_digits(bytes, 3));
        let day = u32::from(two_digits(bytes, 5));
        let governorate = two_digits(bytes, 7);

        let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ValidationError::new("invalid_date", "Encoded birth date does not exist")
                .with_param("year", year.to_string())
                .with_param("month", month.to_string())
                .with_param("day", day.to_string())
        })?;

        Ok(DecodedNationalId {
            birth_date,
            governorate,
        })
    }
}

/// Decoded fields of a structurally valid ID. Lives only for the duration
/// of a single validation call.
#[derive(Debug, Clone, Copy)]
struct DecodedNationalId {
    birth_date: NaiveDate,
    governorate: u8,
}

/// Reads the two digits at `offset`. Caller guarantees the slice holds
/// ASCII digits at both positions.
fn two_digits(bytes: &[u8], offset: usize) -> u8 {
    (bytes[offset] - b'0') * 10 + (bytes[offset + 1] - b'0')
}

impl<C: Clock> Validate for NationalId<C> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_national_id",
                "National ID cannot be empty",
            ));
        }

        if input.len() != 14 {
            return Err(
                ValidationError::new("invalid_length", "National ID must be 14 digits")
                    .with_param("expected", "14")
                    .with_param("actual", input.len().to_string()),
            );
        }

        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "not_numeric",
                "National ID must contain only digits",
            ));
        }

        let decoded = Self::decode(input)?;

        let today = self.clock.today();
        if decoded.birth_date > today {
            return Err(
                ValidationError::new("future_date", "Encoded birth date is in the future")
                    .with_param("birth_date", decoded.birth_date.to_string())
                    .with_param("today", today.to_string()),
            );
        }

        if !is_known_governorate(decoded.governorate) {
            return Err(ValidationError::new(
                "unknown_governorate",
                "Not an issued governorate code",
            )
            .with_param("code", format!("{:02}", decoded.governorate)));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: "NationalId".into(),
            description: Some("Validates Egyptian national identification numbers".into()),
            complexity: ValidationComplexity::Linear,
            // The future-date gate reads the clock, so results can change
            // across calendar days.
            cacheable: false,
            estimated_time: Some(std::time::Duration::from_nanos(300)),
            tags: vec!["identity".into(), "national-id".into(), "egypt".into()],
            version: Some("1.0.0".into()),
            custom: Vec::new(),
        }
    }
}

/// Creates a national ID validator reading the system clock.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::national_id;
/// use identity_validator::foundation::Validate;
///
/// assert!(national_id().validate("29812251234567").is_ok());
/// ```
#[must_use]
pub fn national_id() -> NationalId<SystemClock> {
    NationalId::new()
}

// ============================================================================
// TESTS
// ============================================================================

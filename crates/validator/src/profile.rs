//! Boolean validation facade for registration profiles.
//!
//! Form handlers usually want a yes/no answer per field, with a missing
//! field counting as invalid. These functions wrap the typed validators in
//! that shape: `None` and validation failures both map to `false`.
//!
//! The underlying validators are built once and reused; the email and phone
//! regexes compile on first use.
//!
//! # Examples
//!
//! ```
//! use identity_validator::profile;
//!
//! assert!(profile::validate_email(Some("user@example.com")));
//! assert!(!profile::validate_email(Some("user@")));
//! assert!(!profile::validate_email(None));
//!
//! assert!(profile::validate_phone_number(Some("010-1234-5678")));
//! assert!(profile::validate_username(Some("ramy_gomaa")));
//! ```

use std::sync::LazyLock;

use crate::foundation::Validate;
use crate::validators::{Email, NationalId, Phone, Username};

static EMAIL: LazyLock<Email> = LazyLock::new(Email::new);
static USERNAME: LazyLock<Username> = LazyLock::new(Username::new);
static PHONE: LazyLock<Phone> = LazyLock::new(Phone::new);
static NATIONAL_ID: LazyLock<NationalId> = LazyLock::new(NationalId::new);

/// Returns true if `input` is a present, well-formed email address.
#[must_use]
pub fn validate_email(input: Option<&str>) -> bool {
    input.is_some_and(|s| EMAIL.validate(s).is_ok())
}

/// Returns true if `input` is a present, well-formed username.
#[must_use]
pub fn validate_username(input: Option<&str>) -> bool {
    input.is_some_and(|s| USERNAME.validate(s).is_ok())
}

/// Returns true if `input` is a present, well-formed Egyptian mobile number.
///
/// Formatting characters are stripped before matching, so
/// `"010-1234-5678"` and `"01012345678"` are equivalent.
#[must_use]
pub fn validate_phone_number(input: Option<&str>) -> bool {
    input.is_some_and(|s| PHONE.validate(s).is_ok())
}

/// Returns true if `input` is a present, valid Egyptian national ID.
///
/// Uses the system clock for the future-date rule.
#[must_use]
pub fn validate_national_id(input: Option<&str>) -> bool {
    input.is_some_and(|s| NATIONAL_ID.validate(s).is_ok())
}

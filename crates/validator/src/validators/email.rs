//! Email address validator.
//!
//! Checks the `local-part@domain.tld` shape. This is a syntactic check only;
//! it says nothing about whether the mailbox exists.

use regex::Regex;

use crate::foundation::{Validate, ValidationComplexity, ValidationError, ValidatorMetadata};

/// Anchored on both ends so a valid address embedded in junk does not pass.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email addresses.
///
/// Accepts `local-part@domain.tld` where the local part draws from
/// `[A-Za-z0-9._%+-]`, the domain from `[A-Za-z0-9.-]`, and the final label
/// is at least two letters. Both character classes carry both cases, so
/// matching is case-insensitive by construction.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::Email;
/// use identity_validator::foundation::Validate;
///
/// let email = Email::new();
/// assert!(email.validate("user@example.com").is_ok());
/// assert!(email.validate("USER@MAIL.COM").is_ok());
/// assert!(email.validate("user@mail.c").is_err()); // single-letter TLD
/// assert!(email.validate("userexample.com").is_err()); // no '@'
/// ```
#[derive(Debug, Clone)]
pub struct Email {
    pattern: Regex,
}

impl Email {
    /// Creates a new email validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(EMAIL_PATTERN).expect("hardcoded email pattern is valid"),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_email",
                "Email address cannot be empty",
            ));
        }

        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("invalid_email", "Not a valid email address")
                    .with_help("Expected the form local-part@domain.tld"),
            )
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: "Email".into(),
            description: Some("Validates email address format".into()),
            complexity: ValidationComplexity::Expensive,
            cacheable: true,
            estimated_time: Some(std::time::Duration::from_micros(2)),
            tags: vec!["identity".into(), "email".into()],
            version: Some("1.0.0".into()),
            custom: Vec::new(),
        }
    }
}

/// Creates an email validator.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::email;
/// use identity_validator::foundation::Validate;
///
/// assert!(email().validate("user@mail.company.com").is_ok());
/// ```
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        let v = Email::new();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("user@mail.company.com").is_ok());
        assert!(v.validate("ramy.gomaa_21@mail.co").is_ok());
        assert!(v.validate("a+b%c@d-e.org").is_ok());
    }

    #[test]
    fn test_uppercase_accepted() {
        let v = Email::new();
        assert!(v.validate("USER@MAIL.COM").is_ok());
    }

    #[test]
    fn test_missing_at_sign() {
        let v = Email::new();
        assert!(v.validate("userexample.com").is_err());
    }

    #[test]
    fn test_missing_domain() {
        let v = Email::new();
        assert!(v.validate("user@").is_err());
    }

    #[test]
    fn test_short_tld() {
        let v = Email::new();
        assert!(v.validate("user@mail.c").is_err());
    }

    #[test]
    fn test_space_in_local_part() {
        let v = Email::new();
        assert!(v.validate("user name@mail.com").is_err());
    }

    #[test]
    fn test_empty_rejected_with_code() {
        let v = Email::new();
        let err = v.validate("").unwrap_err();
        assert_eq!(err.code.as_ref(), "empty_email");
    }

    #[test]
    fn test_no_substring_match() {
        // A valid address with trailing junk must not pass.
        let v = Email::new();
        assert!(v.validate("user@example.com extra").is_err());
        assert!(v.validate("junk user@example.com").is_err());
    }
}

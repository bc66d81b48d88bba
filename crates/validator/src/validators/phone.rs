//! Egyptian mobile phone number validator.
//!
//! Validates numbers against the domestic `01x` shape and the
//! country-code `201x` shape, tolerating common formatting noise.

use regex::Regex;

use crate::foundation::{Validate, ValidationComplexity, ValidationError, ValidatorMetadata};

/// Anchored over the cleaned digit string. Exactly two shapes pass:
/// 11 digits `01[0125]` + 8, or 12 digits `201[0125]` + 8.
const PHONE_PATTERN: &str = r"^(01[0125][0-9]{8}|201[0125][0-9]{8})$";

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates Egyptian mobile phone numbers.
///
/// Every character that is not an ASCII digit is stripped before matching,
/// so spaces, dashes, parentheses and plus signs are tolerated as formatting
/// noise. The cleaned digit string must then match exactly one of two shapes:
///
/// - **Domestic**: `01` + carrier digit (`0`, `1`, `2` or `5`) + 8 digits
/// - **Country code**: `20` + the same number without its leading `0`
///
/// There are no partial matches: a valid 11-digit number with extra digits
/// appended is rejected even though it starts with a valid prefix.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::Phone;
/// use identity_validator::foundation::Validate;
///
/// let phone = Phone::new();
/// assert!(phone.validate("01012345678").is_ok());
/// assert!(phone.validate("010-1234-5678").is_ok()); // formatting stripped
/// assert!(phone.validate("+201012345678").is_ok()); // country code
/// assert!(phone.validate("01812345678").is_err()); // 018 is not a carrier
///
/// // Domestic-only mode rejects the country-code shape.
/// let domestic = Phone::new().domestic_only();
/// assert!(domestic.validate("01012345678").is_ok());
/// assert!(domestic.validate("201012345678").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Phone {
    pattern: Regex,
    domestic_only: bool,
}

impl Phone {
    /// Creates a phone validator accepting both the domestic and the
    /// country-code shape.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(PHONE_PATTERN).expect("hardcoded phone pattern is valid"),
            domestic_only: false,
        }
    }

    /// Rejects the 12-digit country-code shape, accepting only `01x` numbers.
    #[must_use = "builder methods must be chained or built"]
    pub fn domestic_only(mut self) -> Self {
        self.domestic_only = true;
        self
    }

    /// Strips every character that is not an ASCII digit.
    fn extract_digits(input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_phone",
                "Phone number cannot be empty",
            ));
        }

        let cleaned = Self::extract_digits(input);

        if !self.pattern.is_match(&cleaned) {
            return Err(ValidationError::new(
                "invalid_phone",
                "Not an Egyptian mobile number",
            )
            .with_param("digits", cleaned)
            .with_help("Expected 01x followed by 8 digits, optionally prefixed with 20"));
        }

        // The pattern admits only lengths 11 and 12; 12 means country code.
        if self.domestic_only && cleaned.len() == 12 {
            return Err(ValidationError::new(
                "country_code_not_allowed",
                "Country-code numbers are not accepted here",
            )
            .with_param("digits", cleaned));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: "Phone".into(),
            description: Some(
                format!(
                    "Validates Egyptian mobile numbers ({})",
                    if self.domestic_only {
                        "domestic only"
                    } else {
                        "domestic or country code"
                    }
                )
                .into(),
            ),
            complexity: ValidationComplexity::Expensive,
            cacheable: true,
            estimated_time: Some(std::time::Duration::from_micros(2)),
            tags: vec!["identity".into(), "phone".into(), "egypt".into()],
            version: Some("1.0.0".into()),
            custom: Vec::new(),
        }
    }
}

/// Creates a phone validator accepting both shapes.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::phone;
/// use identity_validator::foundation::Validate;
///
/// assert!(phone().validate("01234567890").is_ok());
/// ```
#[must_use]
pub fn phone() -> Phone {
    Phone::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod domestic {
        use super::*;

        #[test]
        fn test_all_carrier_prefixes() {
            let v = Phone::new();
            assert!(v.validate("01012345678").is_ok());
            assert!(v.validate("01198765432").is_ok());
            assert!(v.validate("01234567890").is_ok());
            assert!(v.validate("01555555555").is_ok());
        }

        #[test]
        fn test_unknown_carrier_prefix() {
            let v = Phone::new();
            assert!(v.validate("01812345678").is_err());
            assert!(v.validate("01912345678").is_err());
        }

        #[test]
        fn test_wrong_length() {
            let v = Phone::new();
            assert!(v.validate("0101234567").is_err()); // 10 digits
            assert!(v.validate("010123456789").is_err()); // 12 digits, not 201x
        }
    }

    mod country_code {
        use super::*;

        #[test]
        fn test_valid_country_code_numbers() {
            let v = Phone::new();
            assert!(v.validate("201012345678").is_ok());
            assert!(v.validate("201234567890").is_ok());
        }

        #[test]
        fn test_plus_prefix_stripped() {
            let v = Phone::new();
            assert!(v.validate("+201012345678").is_ok());
        }

        #[test]
        fn test_domestic_only_rejects_country_code() {
            let v = Phone::new().domestic_only();
            assert!(v.validate("01012345678").is_ok());
            let err = v.validate("201012345678").unwrap_err();
            assert_eq!(err.code.as_ref(), "country_code_not_allowed");
        }
    }

    mod normalization {
        use super::*;

        #[test]
        fn test_formatting_characters_stripped() {
            let v = Phone::new();
            assert!(v.validate("010-1234-5678").is_ok());
            assert!(v.validate("010 1234 5678").is_ok());
            assert!(v.validate("(010) 1234 5678").is_ok());
        }

        #[test]
        fn test_letters_dropped_not_matched() {
            // Stripping leaves too few digits; rejection comes from the
            // shape, not from the letters themselves.
            let v = Phone::new();
            assert!(v.validate("01012abc678").is_err());
        }

        #[test]
        fn test_extract_digits() {
            assert_eq!(Phone::extract_digits("+20 (10) 1234-5678"), "201012345678");
            assert_eq!(Phone::extract_digits("abc"), "");
        }
    }

    #[test]
    fn test_empty_rejected_with_code() {
        let v = Phone::new();
        let err = v.validate("").unwrap_err();
        assert_eq!(err.code.as_ref(), "empty_phone");
    }

    #[test]
    fn test_error_carries_cleaned_digits() {
        let v = Phone::new();
        let err = v.validate("010-1234").unwrap_err();
        assert_eq!(err.param("digits"), Some("0101234"));
    }
}

//! Username validator.

use crate::foundation::{Validate, ValidationComplexity, ValidationError, ValidatorMetadata};

// ============================================================================
// USERNAME VALIDATOR
// ============================================================================

/// Validates usernames.
///
/// A username is 3 to 20 characters of ASCII letters, digits and underscore.
/// The bounds are adjustable for callers with different policies; the
/// character set is not.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::Username;
/// use identity_validator::foundation::Validate;
///
/// let username = Username::new();
/// assert!(username.validate("ramy_gomaa").is_ok());
/// assert!(username.validate("ramy8123").is_ok());
/// assert!(username.validate("ab").is_err()); // too short
/// assert!(username.validate("ramy gomaa").is_err()); // space
///
/// // Custom length policy
/// let short = Username::new().min_len(2);
/// assert!(short.validate("ab").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Username {
    min: usize,
    max: usize,
}

impl Username {
    /// Creates a username validator with the default 3..=20 length bounds.
    #[must_use]
    pub fn new() -> Self {
        Self { min: 3, max: 20 }
    }

    /// Sets the minimum length (in characters).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_len(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Sets the maximum length (in characters).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_len(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    fn is_allowed(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }
}

impl Default for Username {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Username {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_username",
                "Username cannot be empty",
            ));
        }

        // The charset is pure ASCII, so byte length equals character count
        // for any input that can still pass. Check the charset first so
        // multi-byte input is rejected for its characters, not its length.
        if let Some(bad) = input.bytes().find(|&b| !Self::is_allowed(b)) {
            return Err(ValidationError::new(
                "invalid_username",
                "Username may only contain letters, digits and underscore",
            )
            .with_param("found", bad.escape_ascii().to_string()));
        }

        let len = input.len();
        if len < self.min {
            return Err(ValidationError::min_length("username", self.min, len));
        }
        if len > self.max {
            return Err(ValidationError::max_length("username", self.max, len));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: "Username".into(),
            description: Some(
                format!(
                    "Validates usernames ({}-{} chars, letters/digits/underscore)",
                    self.min, self.max
                )
                .into(),
            ),
            complexity: ValidationComplexity::Linear,
            cacheable: true,
            estimated_time: Some(std::time::Duration::from_nanos(200)),
            tags: vec!["identity".into(), "username".into()],
            version: Some("1.0.0".into()),
            custom: Vec::new(),
        }
    }
}

/// Creates a username validator with the default 3..=20 length bounds.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::username;
/// use identity_validator::foundation::Validate;
///
/// assert!(username().validate("ramy_gomaa").is_ok());
/// ```
#[must_use]
pub fn username() -> Username {
    Username::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        let v = Username::new();
        assert!(v.validate("ramy_gomaa").is_ok());
        assert!(v.validate("ramy8123").is_ok());
        assert!(v.validate("___").is_ok());
        assert!(v.validate("A1_").is_ok());
    }

    #[test]
    fn test_length_boundaries() {
        let v = Username::new();
        assert!(v.validate("abc").is_ok()); // exactly 3
        assert!(v.validate(&"a".repeat(20)).is_ok()); // exactly 20
        assert!(v.validate("ab").is_err()); // 2
        assert!(v.validate(&"a".repeat(21)).is_err()); // 21
    }

    #[test]
    fn test_boundary_error_codes() {
        let v = Username::new();
        assert_eq!(v.validate("ab").unwrap_err().code.as_ref(), "min_length");
        assert_eq!(
            v.validate(&"a".repeat(21)).unwrap_err().code.as_ref(),
            "max_length"
        );
    }

    #[test]
    fn test_rejects_space() {
        let v = Username::new();
        assert!(v.validate("ramy gomaa").is_err());
    }

    #[test]
    fn test_rejects_punctuation() {
        let v = Username::new();
        assert!(v.validate("ramy@8123").is_err());
        assert!(v.validate("ramy-gomaa").is_err());
    }

    #[test]
    fn test_rejects_non_ascii() {
        let v = Username::new();
        let err = v.validate("rämy_gomaa").unwrap_err();
        assert_eq!(err.code.as_ref(), "invalid_username");
    }

    #[test]
    fn test_empty_rejected_with_code() {
        let v = Username::new();
        let err = v.validate("").unwrap_err();
        assert_eq!(err.code.as_ref(), "empty_username");
    }

    #[test]
    fn test_custom_bounds() {
        let v = Username::new().min_len(1).max_len(5);
        assert!(v.validate("a").is_ok());
        assert!(v.validate("abcdef").is_err());
    }
}

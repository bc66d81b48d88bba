//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it succeeds when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust,ignore
//! use identity_validator::combinators::Not;
//! use identity_validator::foundation::Validate;
//!
//! // Reject anything that already looks like an email.
//! let validator = Not::new(email());
//! assert!(validator.validate("display name").is_ok());
//! assert!(validator.validate("user@example.com").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// The `Not` combinator reverses the validation result:
/// - If the inner validator succeeds, `Not` fails
/// - If the inner validator fails, `Not` succeeds
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The validator to invert
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::combinators::not;
/// use identity_validator::foundation::Validate;
///
/// let validator = not(email());
/// assert!(validator.validate("display name").is_ok());
/// assert!(validator.validate("user@example.com").is_err());
/// ```
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::traits::ValidateExt;

    struct Contains {
        substring: &'static str,
    }

    impl Validate for Contains {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.contains(self.substring) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "contains",
                    format!("Must contain '{}'", self.substring),
                ))
            }
        }
    }

    #[test]
    fn test_not_inverts_success() {
        let validator = Not::new(Contains { substring: "@" });
        assert!(validator.validate("user@example.com").is_err());
    }

    #[test]
    fn test_not_inverts_failure() {
        let validator = Not::new(Contains { substring: "@" });
        assert!(validator.validate("user_01").is_ok());
    }

    #[test]
    fn test_not_via_ext() {
        let validator = Contains { substring: "@" }.not();
        assert!(validator.validate("user_01").is_ok());
        assert!(validator.validate("user@example.com").is_err());
    }

    #[test]
    fn test_double_negation() {
        let validator = Contains { substring: "@" }.not().not();
        assert!(validator.validate("user@example.com").is_ok());
        assert!(validator.validate("user_01").is_err());
    }
}

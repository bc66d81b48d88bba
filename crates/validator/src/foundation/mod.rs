//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//! - **Metadata**: `ValidatorMetadata`, `ValidationComplexity`
//! - **Clock**: `Clock`, `SystemClock`, `FixedClock`
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input type, providing compile-time guarantees:
//!
//! ```rust,ignore
//! use identity_validator::foundation::Validate;
//!
//! struct MinLength { min: usize }
//!
//! impl Validate for MinLength {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose using logical combinators:
//!
//! ```rust,ignore
//! let login = email().or(username());
//! ```
//!
//! ## 3. Rich Error Information
//!
//! Errors are structured and contain detailed information:
//!
//! ```rust,ignore
//! let error = ValidationError::new("invalid_length", "National ID must be 14 digits")
//!     .with_field("national_id")
//!     .with_param("expected", "14")
//!     .with_param("actual", "13");
//! ```
//!
// Module declarations
pub mod clock;
pub mod error;
pub mod metadata;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorParams, ErrorSeverity, ValidationError, ValidationErrors};
pub use metadata::{ValidationComplexity, ValidatorMetadata};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the validation foundation.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::prelude::*;
///
/// let error = ValidationError::new("invalid_email", "Not a valid email address");
/// ```
pub mod prelude {
    pub use super::{
        Clock, ErrorSeverity, FixedClock, SystemClock, Validate, ValidateExt, ValidationComplexity,
        ValidationError, ValidationErrors, ValidatorMetadata,
    };
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value and returns a more detailed result.
///
/// This is a convenience function for one-off validations.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::validate_value;
///
/// let result = validate_value("user@example.com", &email())?;
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

/// Validates a value with multiple validators.
///
/// All validators must pass for this to succeed.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::validate_with_all;
///
/// let result = validate_with_all("user_01", &[&username_a, &username_b])?;
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Validates a value with multiple validators (at least one must pass).
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::validate_with_any;
///
/// // A login identifier may be an email or a username.
/// let result = validate_with_any("user@example.com", validators)?;
/// ```
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => {
                errors.add(e);
            }
        }
    }

    Err(errors)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod foundation_tests {
    use super::*;

    // Simple test validators for the utility helpers
    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validate_value() {
        let validator = AlwaysValid;
        assert!(validate_value("test", &validator).is_ok());
    }

    #[test]
    fn test_validate_with_all_success() {
        let result = validate_with_all("test", &[&AlwaysValid, &AlwaysValid]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_with_all_failure() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&valid, &fails];
        let result = validate_with_all("test", validators);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_with_any_success() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid];
        let result = validate_with_any("test", validators);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_with_any_all_fail() {
        let result = validate_with_any("test", &[&AlwaysFails, &AlwaysFails]);
        assert!(result.is_err());
    }
}

//! Presence validators for optional values.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError, ValidatorMetadata};

// ============================================================================
// REQUIRED VALIDATOR
// ============================================================================

/// Validates that an optional value is present.
///
/// The inverse of [`Optional`](crate::combinators::Optional): where `Optional`
/// waves `None` through, `Required` rejects it.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::required;
/// use identity_validator::foundation::Validate;
///
/// let validator = required::<&str>();
/// assert!(validator.validate(&Some("value")).is_ok());
/// assert!(validator.validate(&None).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Required<T> {
    _phantom: PhantomData<T>,
}

impl<T> Required<T> {
    /// Creates a new presence validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validate for Required<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Option<T>) -> Result<(), ValidationError> {
        match input {
            Some(_) => Ok(()),
            None => Err(ValidationError::required("value")),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::simple("Required")
    }
}

/// Creates a validator that requires an optional value to be present.
#[must_use]
pub fn required<T>() -> Required<T> {
    Required::new()
}

// ============================================================================
// TESTS
// ============================================================================

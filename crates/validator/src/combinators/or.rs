//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use identity_validator::combinators::Or;
//! use identity_validator::foundation::Validate;
//!
//! // A login identifier may be an email or a username.
//! let login = Or::new(email(), username());
//! assert!(login.validate("user@example.com").is_ok());
//! assert!(login.validate("user_01").is_ok());
//! assert!(login.validate("!!").is_err()); // neither
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// If the first validator passes, the second is not evaluated (short-circuits).
/// If both fail, the combined error contains both error messages.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to try
    /// * `right` - The second validator to try if the first fails
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use identity_validator::foundation::ValidateExt;
    ///
    /// let identifier = email().or(username()).or(phone());
    /// ```
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

/// Creates an `Or` combinator from two validators.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::combinators::or;
/// use identity_validator::foundation::Validate;
///
/// let login = or(email(), username());
/// assert!(login.validate("user@example.com").is_ok());
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an `OrAny` combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators and
/// want at least one to pass.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::combinators::or_any;
/// use identity_validator::foundation::Validate;
///
/// let identifier = or_any(accepted_identifier_rules);
/// assert!(identifier.validate("user@example.com").is_ok());
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Tries multiple validators until one passes.
///
/// Iterates through all validators in order, returning success as soon as
/// one validator passes. If all validators fail, returns a combined error
/// containing all individual errors.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        let count = errors.len();
        Err(
            ValidationError::new("or_any_failed", format!("All {count} alternatives failed"))
                .with_nested(errors),
        )
    }
}

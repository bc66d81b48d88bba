//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use identity_validator::combinators::And;
//! use identity_validator::foundation::Validate;
//!
//! // Both validators must pass
//! let validator = And::new(username(), starts_with_letter());
//! assert!(validator.validate("user_01").is_ok());
//! assert!(validator.validate("_user").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator to apply
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with AND logic.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use identity_validator::foundation::ValidateExt;
    ///
    /// let validator = not_empty().and(all_digits()).and(length_is(14));
    /// ```
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::combinators::and;
/// use identity_validator::foundation::Validate;
///
/// let validator = and(username(), starts_with_letter());
/// assert!(validator.validate("user_01").is_ok());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::combinators::and_all;
/// use identity_validator::foundation::Validate;
///
/// let validator = and_all(profile_rules);
/// assert!(validator.validate("user_01").is_ok());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines multiple validators with logical AND.
///
/// All validators in the collection must pass for this validator to succeed.
/// Validation stops at the first failure (short-circuits).
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use crate::foundation::ValidatorMetadata;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length("", self.min, input.len()))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Returns metadata about this validator.
    ///
    /// Override this to provide introspection capabilities.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }

    /// Returns the name of this validator.
    ///
    /// Used for debugging and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::prelude::*;
///
/// let login = email().or(username());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use identity_validator::prelude::*;
    ///
    /// let validator = username().and(email());
    /// assert!(validator.validate("hello").is_err()); // not an email
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to succeed.
    /// Short-circuits on the first success.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use identity_validator::prelude::*;
    ///
    /// // Accounts may sign in with either identifier.
    /// let login = email().or(username());
    /// assert!(login.validate("user@example.com").is_ok());
    /// assert!(login.validate("user_01").is_ok());
    /// ```
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes validation conditional based on a predicate.
    ///
    /// The validator only runs if the condition returns `true`.
    /// If the condition returns `false`, validation is skipped.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use identity_validator::prelude::*;
    ///
    /// // Only check the phone shape when the field was filled in.
    /// let validator = phone().when(|s: &str| !s.is_empty());
    /// assert!(validator.validate("").is_ok()); // skipped
    /// ```
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Lifts a string validator over an optional form field.
    ///
    /// The lifted validator succeeds if the field is `None` or if the
    /// present value passes.
    fn optional(self) -> Optional<Self>
    where
        Self: Validate<Input = str>,
    {
        Optional::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================

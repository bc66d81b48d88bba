//! OPTIONAL combinator - skips validation for absent form fields

use crate::foundation::{Validate, ValidationError};

/// Lifts a string validator over an optional form field.
///
/// `None` passes; `Some(value)` delegates to the inner validator. Use
/// [`Required`](crate::validators::Required) when absence must reject
/// instead.
///
/// # Examples
///
/// ```
/// use identity_validator::prelude::*;
///
/// // The phone field on this form may be left blank.
/// let field = phone().optional();
/// assert!(field.validate(&None).is_ok());
/// assert!(field.validate(&Some("010-1234-5678".to_string())).is_ok());
/// assert!(field.validate(&Some("0101234".to_string())).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate<Input = str>,
{
    type Input = Option<String>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

pub fn optional<V>(validator: V) -> Optional<V>
where
    V: Validate<Input = str>,
{
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{email, phone};

    #[test]
    fn test_missing_phone_passes() {
        let field = Optional::new(phone());
        assert!(field.validate(&None).is_ok());
    }

    #[test]
    fn test_present_phone_is_validated() {
        let field = Optional::new(phone());
        assert!(field.validate(&Some("01012345678".to_string())).is_ok());
        assert!(field.validate(&Some("0101234".to_string())).is_err());
    }

    #[test]
    fn test_present_value_keeps_its_error() {
        let field = optional(email());
        let err = field
            .validate(&Some("userexample.com".to_string()))
            .unwrap_err();
        assert_eq!(err.code.as_ref(), "invalid_email");
    }

    #[test]
    fn test_via_ext() {
        let field = email().optional();
        assert!(field.validate(&None).is_ok());
        assert!(field.validate(&Some("user@example.com".to_string())).is_ok());
    }
}

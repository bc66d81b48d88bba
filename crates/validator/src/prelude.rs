//! Prelude module with commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use identity_validator::prelude::*;
//!
//! let login = email().or(username());
//! assert!(login.validate("user@example.com").is_ok());
//! assert!(login.validate("user_01").is_ok());
//! ```

// Foundation types
pub use crate::foundation::{
    Clock, ErrorParams, ErrorSeverity, FixedClock, SystemClock, Validate, ValidateExt,
    ValidationComplexity, ValidationError, ValidationErrors, ValidationResult,
    ValidationResultMulti, ValidatorMetadata, validate_value, validate_with_all, validate_with_any,
};

// Combinators
pub use crate::combinators::{
    And, AndAll, Not, Optional, Or, OrAny, When, and, and_all, not, optional, or, or_any, when,
};

// Field validators and their factories
pub use crate::validators::{
    Email, Governorate, NationalId, Phone, Required, Username, email, governorate,
    is_known_governorate, national_id, phone, required, username,
};

// Boolean facade
pub use crate::profile::{
    validate_email, validate_national_id, validate_phone_number, validate_username,
};

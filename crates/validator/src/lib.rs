//! # Identity Validator
//!
//! Composable validation for Egyptian identity data: email addresses,
//! usernames, mobile phone numbers and national identification numbers.
//!
//! ## Features
//!
//! - **Type-safe**: validators are generic over their input type
//! - **Composable**: combine validators with `and`, `or`, `not`, `when`
//! - **Structured errors**: every rejection carries a code and parameters
//! - **Deterministic time**: the national ID validator takes an injectable
//!   clock, so date boundaries are testable
//!
//! ## Quick Start
//!
//! ```
//! use identity_validator::prelude::*;
//!
//! // Typed API: structured errors
//! let result = national_id().validate("29813251234567");
//! assert_eq!(result.unwrap_err().code.as_ref(), "invalid_date");
//!
//! // Boolean facade: optional inputs, yes/no answers
//! assert!(validate_phone_number(Some("010-1234-5678")));
//! assert!(!validate_phone_number(None));
//! ```
//!
//! ## Composition
//!
//! ```
//! use identity_validator::prelude::*;
//!
//! // A login identifier may be an email address or a username.
//! let login = email().or(username());
//! assert!(login.validate("user@example.com").is_ok());
//! assert!(login.validate("user_01").is_ok());
//! assert!(login.validate("!!").is_err());
//! ```

// ValidationError carries params and nested errors inline; validators are
// cheap to construct, so the large Err variant is acceptable.
#![allow(clippy::result_large_err)]
// Combinator chains produce deeply nested generic types by construction.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod profile;
pub mod validators;

//! Identity field validators.
//!
//! Each validator covers one field of an identity record:
//!
//! | Validator | Input | Checks |
//! |-----------|-------|--------|
//! | [`Email`] | `str` | anchored `local@domain.tld` pattern |
//! | [`Username`] | `str` | 3 to 20 word characters |
//! | [`Phone`] | `str` | Egyptian mobile number, domestic or `20`-prefixed |
//! | [`NationalId`] | `str` | 14-digit Egyptian national ID |
//! | [`Governorate`] | `str` | two-digit governorate code |
//! | [`Required`] | `Option<T>` | value is present |
//!
//! Every validator has a lowercase factory function (`email()`, `phone()`,
//! ...) for use in combinator chains.

pub mod email;
pub mod governorate;
pub mod national_id;
pub mod nullable;
pub mod phone;
pub mod username;

pub use email::{Email, email};
pub use governorate::{Governorate, governorate, is_known_governorate};
pub use national_id::{NationalId, national_id};
pub use nullable::{Required, required};
pub use phone::{Phone, phone};
pub use username::{Username, username};

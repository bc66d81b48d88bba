//! Combinators for composing validators
//!
//! Combinators wrap one or more validators and derive a new validator from
//! them. They are the glue of the crate: leaf validators stay small and
//! single-purpose, and callers assemble richer rules from them.
//!
//! | Combinator | Semantics |
//! |---|---|
//! | [`And`] | both validators must pass (short-circuits) |
//! | [`Or`] | at least one validator must pass |
//! | [`Not`] | inverts the inner validator |
//! | [`Optional`] | `None` passes, `Some` delegates |
//! | [`When`] | runs the inner validator only if a predicate holds |
//!
//! Most code reaches these through the
//! [`ValidateExt`](crate::foundation::ValidateExt) methods rather than the
//! structs directly.

pub mod and;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, OrAny, or, or_any};
pub use when::{When, when};

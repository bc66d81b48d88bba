//! Egyptian governorate codes.
//!
//! The national ID embeds a two-digit code naming the governorate where the
//! holder was registered at birth. The set of issued codes is fixed: 01-04
//! (Cairo, Alexandria, Port Said, Suez), 11-35 (the remaining governorates),
//! 88 (issued abroad) and 99 (unknown/other).

use crate::foundation::ValidationError;
use crate::validator;

/// Every issued governorate code, sorted for binary search.
const GOVERNORATE_CODES: [u8; 31] = [
    1, 2, 3, 4, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, 35, 88, 99,
];

/// Returns true if `code` is an issued governorate code.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::is_known_governorate;
///
/// assert!(is_known_governorate(1));
/// assert!(is_known_governorate(88));
/// assert!(!is_known_governorate(0));
/// assert!(!is_known_governorate(36));
/// ```
#[must_use]
pub fn is_known_governorate(code: u8) -> bool {
    GOVERNORATE_CODES.binary_search(&code).is_ok()
}

validator! {
    /// Validates a two-digit governorate code string such as `"01"` or `"88"`.
    #[derive(Default)]
    pub Governorate for str;
    rule(input) {
        input.len() == 2
            && input.bytes().all(|b| b.is_ascii_digit())
            && is_known_governorate((input.as_bytes()[0] - b'0') * 10 + (input.as_bytes()[1] - b'0'))
    }
    error(input) {
        ValidationError::new("unknown_governorate", "Not an issued governorate code")
            .with_param("code", input.to_string())
    }
    fn governorate();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_table_is_sorted_and_deduplicated() {
        let mut sorted = GOVERNORATE_CODES;
        sorted.sort_unstable();
        assert_eq!(sorted, GOVERNORATE_CODES);
        for pair in GOVERNORATE_CODES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_known_codes() {
        for code in [1, 2, 3, 4, 11, 23, 35, 88, 99] {
            assert!(is_known_governorate(code), "code {code:02} should be known");
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in [0, 5, 10, 36, 50, 87, 89, 98, 100] {
            assert!(!is_known_governorate(code), "code {code:02} should be unknown");
        }
    }

    #[test]
    fn test_gap_between_04_and_11() {
        for code in 5..=10 {
            assert!(!is_known_governorate(code));
        }
    }

    #[test]
    fn test_string_validator_accepts_issued_codes() {
        let v = governorate();
        assert!(v.validate("01").is_ok());
        assert!(v.validate("35").is_ok());
        assert!(v.validate("99").is_ok());
    }

    #[test]
    fn test_string_validator_rejects() {
        let v = Governorate;
        assert!(v.validate("00").is_err());
        assert!(v.validate("36").is_err());
        assert!(v.validate("1").is_err()); // must be two digits
        assert!(v.validate("011").is_err());
        assert!(v.validate("a1").is_err());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn test_string_validator_error_code() {
        let err = Governorate.validate("00").unwrap_err();
        assert_eq!(err.code.as_ref(), "unknown_governorate");
        assert_eq!(err.param("code"), Some("00"));
    }
}

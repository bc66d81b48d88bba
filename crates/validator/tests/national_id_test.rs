//! Date-boundary tests for the national ID validator with a pinned clock.

use chrono::NaiveDate;
use identity_validator::foundation::{FixedClock, Validate};
use identity_validator::validators::NationalId;
use rstest::rstest;

fn at(year: i32, month: u32, day: u32) -> NationalId<FixedClock> {
    NationalId::with_clock(FixedClock::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
    ))
}

// ============================================================================
// FUTURE DATE BOUNDARY
// ============================================================================

#[test]
fn birth_date_equal_to_today_is_accepted() {
    // ID encodes 2024-06-01; clock reads 2024-06-01.
    assert!(at(2024, 6, 1).validate("32406011234567").is_ok());
}

#[test]
fn birth_date_one_day_ahead_is_rejected() {
    let err = at(2024, 6, 1).validate("32406021234567").unwrap_err();
    assert_eq!(err.code.as_ref(), "future_date");
}

#[test]
fn birth_date_one_day_behind_is_accepted() {
    assert!(at(2024, 6, 1).validate("32405311234567").is_ok());
}

#[test]
fn verdict_flips_as_the_clock_advances() {
    let id = "32406021234567"; // 2024-06-02
    assert!(at(2024, 6, 1).validate(id).is_err());
    assert!(at(2024, 6, 2).validate(id).is_ok());
}

// ============================================================================
// CALENDAR EDGE CASES
// ============================================================================

#[rstest]
#[case("30002291234567")] // 2000-02-29, leap year
#[case("29602291234567")] // 1996-02-29, leap year
#[case("29812311234567")] // December 31st
#[case("30001011234567")] // January 1st 2000
fn real_dates_are_accepted(#[case] input: &str) {
    assert!(at(2026, 1, 15).validate(input).is_ok(), "expected valid: {input:?}");
}

#[rstest]
#[case("30102291234567")] // 2001-02-29 does not exist
#[case("29902291234567")] // 1999-02-29 does not exist
#[case("29804311234567")] // April 31st
#[case("29800151234567")] // month 00
#[case("29801001234567")] // day 00
fn impossible_dates_are_rejected(#[case] input: &str) {
    let err = at(2026, 1, 15).validate(input).unwrap_err();
    assert_eq!(err.code.as_ref(), "invalid_date", "input: {input:?}");
}

// ============================================================================
// GATE ORDERING
// ============================================================================

#[test]
fn shape_is_checked_before_the_date() {
    // Month 13 would also fail, but the letters stop decoding first.
    let err = at(2026, 1, 15).validate("2981325AB34567").unwrap_err();
    assert_eq!(err.code.as_ref(), "not_numeric");
}

#[test]
fn century_is_checked_before_the_date() {
    // Century 9 and month 13, century wins.
    let err = at(2026, 1, 15).validate("99813251234567").unwrap_err();
    assert_eq!(err.code.as_ref(), "invalid_century");
}

#[test]
fn date_is_checked_before_the_governorate() {
    // Month 13 and governorate 00, date wins.
    let err = at(2026, 1, 15).validate("29813250034567").unwrap_err();
    assert_eq!(err.code.as_ref(), "invalid_date");
}

// ============================================================================
// GOVERNORATE GATE
// ============================================================================

#[rstest]
#[case("01")]
#[case("04")]
#[case("11")]
#[case("35")]
#[case("88")]
#[case("99")]
fn issued_governorate_codes_pass(#[case] code: &str) {
    let input = format!("2981225{code}34567");
    assert!(at(2026, 1, 15).validate(&input).is_ok(), "code {code}");
}

#[rstest]
#[case("00")]
#[case("05")]
#[case("10")]
#[case("36")]
#[case("87")]
fn unissued_governorate_codes_fail(#[case] code: &str) {
    let input = format!("2981225{code}34567");
    let err = at(2026, 1, 15).validate(&input).unwrap_err();
    assert_eq!(err.code.as_ref(), "unknown_governorate", "code {code}");
    assert_eq!(err.param("code"), Some(code));
}

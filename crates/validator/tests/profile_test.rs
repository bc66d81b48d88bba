//! End-to-end tests for the boolean validation facade.

use identity_validator::any_of;
use identity_validator::prelude::*;
use rstest::rstest;

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case("user@example.com")]
#[case("user@mail.company.com")]
#[case("ramy.gomaa_21@mail.co")]
#[case("USER@MAIL.COM")]
fn email_accepts(#[case] input: &str) {
    assert!(validate_email(Some(input)), "expected valid: {input:?}");
}

#[rstest]
#[case("userexample.com")]
#[case("user@")]
#[case("user@mail.c")]
#[case("user name@mail.com")]
#[case("")]
fn email_rejects(#[case] input: &str) {
    assert!(!validate_email(Some(input)), "expected invalid: {input:?}");
}

#[test]
fn email_is_case_insensitive() {
    assert_eq!(
        validate_email(Some("User@Mail.Com")),
        validate_email(Some("user@mail.com"))
    );
}

// ============================================================================
// USERNAME
// ============================================================================

#[rstest]
#[case("abc")] // lower bound
#[case("a2345678901234567890")] // upper bound, 20 chars
#[case("ramy_gomaa")]
#[case("User_01")]
fn username_accepts(#[case] input: &str) {
    assert!(validate_username(Some(input)), "expected valid: {input:?}");
}

#[rstest]
#[case("ab")] // one below the lower bound
#[case("a23456789012345678901")] // one above the upper bound, 21 chars
#[case("user name")]
#[case("user-name")]
#[case("rämy")]
#[case("")]
fn username_rejects(#[case] input: &str) {
    assert!(!validate_username(Some(input)), "expected invalid: {input:?}");
}

// ============================================================================
// PHONE
// ============================================================================

#[rstest]
#[case("01012345678")]
#[case("01112345678")]
#[case("01212345678")]
#[case("01512345678")]
#[case("201012345678")]
#[case("+201012345678")]
#[case("010-1234-5678")]
#[case("(010) 1234 5678")]
fn phone_accepts(#[case] input: &str) {
    assert!(validate_phone_number(Some(input)), "expected valid: {input:?}");
}

#[rstest]
#[case("01312345678")] // prefix 013 not issued
#[case("0101234567")] // too short
#[case("010123456789")] // 12 digits without the 20 country code
#[case("2010123456789")] // 13 digits
#[case("00123456789")]
#[case("abc")]
#[case("")]
fn phone_rejects(#[case] input: &str) {
    assert!(!validate_phone_number(Some(input)), "expected invalid: {input:?}");
}

#[test]
fn phone_formatting_does_not_change_the_verdict() {
    assert_eq!(
        validate_phone_number(Some("010-1234-5678")),
        validate_phone_number(Some("01012345678"))
    );
}

// ============================================================================
// NATIONAL ID
// ============================================================================

#[rstest]
#[case("29812251234567")] // 1998-12-25, Dakahlia
#[case("30002291234567")] // leap day 2000-02-29
#[case("29812250134567")] // governorate 01
fn national_id_accepts(#[case] input: &str) {
    assert!(validate_national_id(Some(input)), "expected valid: {input:?}");
}

#[rstest]
#[case("2981225123456")] // 13 digits
#[case("298122512345678")] // 15 digits
#[case("2981225AB34567")] // letters
#[case("19812251234567")] // century digit 1
#[case("29813251234567")] // month 13
#[case("29812321234567")] // day 32
#[case("30102291234567")] // 2001 is not a leap year
#[case("29812250034567")] // governorate 00
#[case("")]
fn national_id_rejects(#[case] input: &str) {
    assert!(!validate_national_id(Some(input)), "expected invalid: {input:?}");
}

// ============================================================================
// ABSENT FIELDS
// ============================================================================

#[test]
fn missing_fields_are_invalid() {
    assert!(!validate_email(None));
    assert!(!validate_username(None));
    assert!(!validate_phone_number(None));
    assert!(!validate_national_id(None));
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[rstest]
#[case(Some("user@example.com"))]
#[case(Some("not an email"))]
#[case(None)]
fn repeated_calls_agree(#[case] input: Option<&str>) {
    let first = validate_email(input);
    for _ in 0..3 {
        assert_eq!(validate_email(input), first);
    }
}

// ============================================================================
// FIELD POLICIES OVER OPTIONAL INPUTS
// ============================================================================

#[test]
fn optional_phone_field_skips_when_blank() {
    let field = phone().optional();
    assert!(field.validate(&None).is_ok());
    assert!(field.validate(&Some("010-1234-5678".to_string())).is_ok());
    assert!(field.validate(&Some("0101234".to_string())).is_err());
}

#[test]
fn required_national_id_field_rejects_when_blank() {
    let field = required::<String>();
    assert!(field.validate(&None).is_err());
    assert!(field.validate(&Some("29812251234567".to_string())).is_ok());
}

#[test]
fn optional_and_required_agree_on_present_values() {
    // Presence policy differs only on None; a filled field is judged the
    // same way by both.
    let value = Some("01012345678".to_string());
    assert!(phone().optional().validate(&value).is_ok());
    assert!(required::<String>().validate(&value).is_ok());
}

#[test]
fn login_accepts_either_identifier() {
    let login = any_of![email(), username()];
    assert!(login.validate("user@example.com").is_ok());
    assert!(login.validate("user_01").is_ok());
    assert!(login.validate("!!").is_err());
}

#[test]
fn login_over_dynamic_rules() {
    let email_rule = email();
    let username_rule = username();
    let rules: [&dyn Validate<Input = str>; 2] = [&email_rule, &username_rule];
    assert!(validate_with_any("ramy_gomaa", &rules).is_ok());

    let errors = validate_with_any("!!", &rules).unwrap_err();
    assert_eq!(errors.len(), 2);
}

//! Validating a registration form.
//!
//! Run with: cargo run --example registration

use identity_validator::any_of;
use identity_validator::prelude::*;

#[derive(Debug)]
struct RegistrationForm {
    email: Option<String>,
    username: Option<String>,
    phone: Option<String>,
    national_id: Option<String>,
}

fn main() {
    println!("=== Identity Validator Examples ===\n");

    boolean_facade();
    typed_errors();
    form_fields();
    login_identifiers();
}

/// The simple path: one boolean per field, missing fields are invalid.
fn boolean_facade() {
    println!("--- Boolean facade ---");

    let form = RegistrationForm {
        email: Some("ramy.gomaa_21@mail.co".to_string()),
        username: Some("ramy_gomaa".to_string()),
        phone: Some("010-1234-5678".to_string()),
        national_id: None,
    };

    println!(
        "email:       {}",
        validate_email(form.email.as_deref())
    );
    println!(
        "username:    {}",
        validate_username(form.username.as_deref())
    );
    println!(
        "phone:       {}",
        validate_phone_number(form.phone.as_deref())
    );
    println!(
        "national id: {}",
        validate_national_id(form.national_id.as_deref())
    );
    println!();
}

/// The typed path: structured errors explain what went wrong.
fn typed_errors() {
    println!("--- Typed errors ---");

    let inputs = [
        "29812251234567", // valid
        "2981225123456",  // 13 digits
        "29813251234567", // month 13
        "29812250034567", // governorate 00
    ];

    let validator = national_id();
    for input in inputs {
        match validator.validate(input) {
            Ok(()) => println!("{input}: ok"),
            Err(e) => println!("{input}: [{}] {}", e.code, e.message),
        }
    }
    println!();
}

/// Field-level policy: the phone is optional, the national ID is not.
fn form_fields() {
    println!("--- Form fields ---");

    let form = RegistrationForm {
        email: Some("user@example.com".to_string()),
        username: Some("user_01".to_string()),
        phone: None,
        national_id: None,
    };

    // A blank phone field passes; a filled one must be a real number.
    let phone_field = phone().optional();
    println!("phone (blank):  {}", phone_field.validate(&form.phone).is_ok());
    println!(
        "phone (filled): {}",
        phone_field
            .validate(&Some("01012345678".to_string()))
            .is_ok()
    );
    println!(
        "phone (junk):   {}",
        phone_field.validate(&Some("0101234".to_string())).is_ok()
    );

    // The national ID must be present before its content is checked.
    match required().validate(&form.national_id) {
        Ok(()) => println!("national id present"),
        Err(e) => println!("national id: [{}] {}", e.code, e.message),
    }
    println!();
}

/// A login identifier may be an email address or a username.
fn login_identifiers() {
    println!("--- Login identifiers ---");

    let login = any_of![email(), username()];
    for input in ["user@example.com", "user_01", "!!"] {
        println!("login {input:?}: {}", login.validate(input).is_ok());
    }

    // Same policy over a dynamic rule set.
    let email_rule = email();
    let username_rule = username();
    let rules: [&dyn Validate<Input = str>; 2] = [&email_rule, &username_rule];
    match validate_with_any("ramy_gomaa", &rules) {
        Ok(()) => println!("dynamic rules: ok"),
        Err(errors) => println!("dynamic rules: {} rejections", errors.len()),
    }
}

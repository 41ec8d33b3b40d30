//! End-to-end batch validation scenarios.

use fluent_schema::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn signup_form() -> BatchValidator {
    batch! {
        "username" => coerce::string().min_length(3, None).max_length(20, None),
        "email" => coerce::string().email(None),
        "age" => coerce::int().min(13, "Must be at least 13").max(150, None),
        "newsletter" => coerce::boolean().default(false),
        "tags" => coerce::array(coerce::string()).max_size(5, None).default(vec![]),
    }
}

#[test]
fn valid_form_parses_every_field() {
    let outcome = signup_form().validate(&json!({
        "username": "  ada_lovelace  ",
        "email": "ada@example.com",
        "age": "36",
        "newsletter": "yes",
        "tags": "[math, engines]",
    }));

    assert!(outcome.is_success());
    let values = outcome.into_values().unwrap();
    assert_eq!(values["username"], json!("ada_lovelace"));
    assert_eq!(values["age"], json!(36));
    assert_eq!(values["newsletter"], json!(true));
    assert_eq!(values["tags"], json!(["math", "engines"]));
}

#[test]
fn defaults_fill_missing_fields() {
    let outcome = signup_form().validate(&json!({
        "username": "ada",
        "email": "ada@example.com",
        "age": 36,
    }));

    assert!(outcome.is_success());
    assert_eq!(outcome.value("newsletter"), Some(&json!(false)));
    assert_eq!(outcome.value("tags"), Some(&json!([])));
}

#[test]
fn each_field_fails_independently() {
    let outcome = signup_form().validate(&json!({
        "username": "ab",
        "email": "not-an-email",
        "age": 7,
        "newsletter": true,
    }));

    assert!(outcome.is_failure());
    assert_eq!(outcome.field_errors("username"), ["String too short: 2 < 3"]);
    assert_eq!(outcome.field_errors("email"), ["Invalid email address"]);
    assert_eq!(outcome.field_errors("age"), ["Must be at least 13"]);
    // Valid fields still produce values.
    assert_eq!(outcome.value("newsletter"), Some(&json!(true)));
}

#[test]
fn into_values_reports_all_failures_in_field_order() {
    let err = signup_form()
        .validate(&json!({
            "username": "",
            "email": "ada@example.com",
            "age": "x",
        }))
        .into_values()
        .unwrap_err();

    assert_eq!(
        err.errors(),
        ["[username] Value is required", "[age] Cannot parse 'x' as int"]
    );
}

#[test]
fn multi_error_fields_flatten_one_entry_per_message() {
    let validator = batch! {
        "code" => string().min_length(5, None).matches(&regex::Regex::new(r"[a-z]+").unwrap(), None),
    };
    let err = validator
        .validate(&json!({"code": "AB"}))
        .into_values()
        .unwrap_err();

    assert_eq!(
        err.errors(),
        ["[code] String too short: 2 < 5", "[code] Does not match pattern"]
    );
}

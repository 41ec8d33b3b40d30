//! Property tests for engine invariants.

use fluent_schema::prelude::*;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    /// Any i32 printed as text coerces back to itself.
    #[test]
    fn int_round_trips_through_text(n in any::<i32>()) {
        let outcome = coerce::int().safe_parse(&json!(n.to_string()));
        prop_assert_eq!(outcome.into_value(), Some(n));
    }

    /// Any i64 printed as text coerces back to itself.
    #[test]
    fn long_round_trips_through_text(n in any::<i64>()) {
        let outcome = coerce::long().safe_parse(&json!(n.to_string()));
        prop_assert_eq!(outcome.into_value(), Some(n));
    }

    /// Finite doubles round-trip: Rust's float formatting is re-parseable.
    #[test]
    fn double_round_trips_through_text(n in -1.0e12f64..1.0e12f64) {
        let outcome = coerce::double().safe_parse(&json!(n.to_string()));
        prop_assert_eq!(outcome.into_value(), Some(n));
    }

    /// Strict int never accepts string input, numeric-looking or not.
    #[test]
    fn strict_int_rejects_all_strings(s in ".*") {
        prop_assert!(int().safe_parse(&json!(s)).is_failure());
    }

    /// Coerced string output is a fixed point: re-parsing it changes nothing.
    #[test]
    fn string_coercion_is_idempotent(s in ".*") {
        let schema = coerce::string();
        if let Some(v) = schema.safe_parse(&json!(s)).into_value() {
            prop_assert_eq!(schema.safe_parse(&json!(v.clone())).into_value(), Some(v));
        }
    }

    /// The outcome invariant holds for arbitrary string input on every engine.
    #[test]
    fn success_iff_no_errors(s in ".*") {
        let outcome = coerce::int().safe_parse(&json!(s));
        prop_assert_eq!(outcome.is_success(), outcome.errors().is_empty());

        let outcome = coerce::boolean().safe_parse(&json!(s));
        prop_assert_eq!(outcome.is_success(), outcome.errors().is_empty());

        let outcome = string().safe_parse(&json!(s));
        prop_assert_eq!(outcome.is_success(), outcome.errors().is_empty());
    }

    /// A shared schema gives identical outcomes on repeated calls.
    #[test]
    fn validation_is_stateless(s in ".*") {
        let schema = coerce::int().min(0, None).max(100, None);
        let input = json!(s);
        prop_assert_eq!(schema.safe_parse(&input), schema.safe_parse(&input));
    }

    /// Every element of a validated int array obeys the item refinements.
    #[test]
    fn array_items_all_pass_refinements(items in proptest::collection::vec(-50i32..50, 0..8)) {
        let schema = array(int().min(0, None)).default(vec![]);
        let input = json!(items);
        match schema.safe_parse(&input).into_value() {
            Some(values) => prop_assert!(values.iter().all(|&v| v >= 0)),
            None => prop_assert!(items.iter().any(|&v| v < 0)),
        }
    }
}

/// FieldLookup: construction, lenient and presence-aware access, and strict
/// decoding with defaults or errors.
use lenient_json::{Coerced, FieldLookup, JsonValue, LenientError, TargetKind};
use serde::Deserialize;
use serde_json::json;
use std::cell::Cell;

/// An API payload that drifted from its declared schema.
fn drifted_user() -> FieldLookup {
    FieldLookup::from_json_str(
        r#"{
            "id": "42",
            "admin": "Y",
            "age": 31.9,
            "score": "7.5",
            "name": 1234,
            "verified": 1,
            "nickname": null,
            "notes": "xyz",
            "tags": ["a", "b"],
            "address": {"city": "Lisbon"}
        }"#,
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn from_json_str_accepts_object() {
    let lookup = drifted_user();
    assert_eq!(lookup.len(), 10);
    assert!(!lookup.is_empty());
    assert!(lookup.keys().any(|k| k == "admin"));
}

#[test]
fn from_json_str_rejects_malformed_text() {
    let err = FieldLookup::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, LenientError::JsonParse(_)));
}

#[test]
fn from_value_rejects_non_object() {
    let err = FieldLookup::from_value(json!([1, 2])).unwrap_err();
    assert!(matches!(err, LenientError::NotAnObject { found: "array" }));
    assert_eq!(err.to_string(), "expected a JSON object, found array");
}

#[test]
fn parse_via_from_str_and_try_from() {
    let a: FieldLookup = r#"{"k":1}"#.parse().unwrap();
    let b = FieldLookup::try_from(json!({"k": 1})).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_lookup_from_default() {
    let lookup = FieldLookup::default();
    assert!(lookup.is_empty());
    assert_eq!(lookup.int("anything"), 0);
}

// ============================================================================
// Lenient access
// ============================================================================

#[test]
fn lenient_access_coerces_drifted_fields() {
    let user = drifted_user();
    assert_eq!(user.int("id"), 42);
    assert!(user.bool("admin"));
    assert_eq!(user.int("age"), 31);
    assert_eq!(user.double("score"), 7.5);
    assert_eq!(user.int("score"), 0);
    assert_eq!(user.string("name"), "1234");
    assert!(user.bool("verified"));
}

#[test]
fn lenient_access_on_absent_key_gives_zero_value() {
    let user = drifted_user();
    assert!(!user.bool("missing"));
    assert_eq!(user.int("missing"), 0);
    assert_eq!(user.double("missing"), 0.0);
    assert_eq!(user.string("missing"), "");
}

#[test]
fn containers_coerce_to_zero_value() {
    let user = drifted_user();
    assert_eq!(user.string("tags"), "");
    assert_eq!(user.int("address"), 0);
}

#[test]
fn generic_coerce_by_type() {
    let user = drifted_user();
    assert_eq!(user.coerce::<i64>("id"), 42);
    assert_eq!(user.coerce::<String>("verified"), "1");
}

#[test]
fn coerce_kind_at_runtime() {
    let user = drifted_user();
    assert_eq!(user.coerce_kind("id", TargetKind::Double), Coerced::Double(42.0));
    assert_eq!(user.coerce_kind("missing", TargetKind::Bool), Coerced::Bool(false));
}

#[test]
fn get_returns_scalar_view() {
    let user = drifted_user();
    assert_eq!(user.get("age"), Some(JsonValue::Number(31.9)));
    assert_eq!(user.get("nickname"), Some(JsonValue::Null));
    assert_eq!(user.get("tags"), Some(JsonValue::Null));
    assert_eq!(user.get("missing"), None);
    assert_eq!(user.get_raw("tags"), Some(&json!(["a", "b"])));
}

#[test]
fn repeated_calls_are_identical() {
    let user = drifted_user();
    for _ in 0..3 {
        assert_eq!(user.int("id"), 42);
        assert_eq!(user.string("age"), "31.9");
    }
}

#[test]
fn large_integers_keep_every_digit() {
    let lookup = FieldLookup::from_json_str(
        r#"{"id":1234567890123456789,"n":9007199254740993,"neg":-9007199254740993}"#,
    )
    .unwrap();
    assert_eq!(lookup.string("id"), "1234567890123456789");
    assert_eq!(lookup.int("id"), 1234567890123456789);
    assert_eq!(lookup.int("n"), 9007199254740993);
    assert_eq!(lookup.int("neg"), -9007199254740993);
    assert_eq!(lookup.string_if_present("n"), Some("9007199254740993".to_string()));
    assert_eq!(lookup.int_if_present("id"), Some(1234567890123456789));
    assert_eq!(
        lookup.coerce_kind("id", TargetKind::String),
        Coerced::String("1234567890123456789".to_string())
    );
}

#[test]
fn integers_above_i64_saturate_but_print_exactly() {
    let lookup = FieldLookup::from_json_str(r#"{"huge":18446744073709551615}"#).unwrap();
    assert_eq!(lookup.int("huge"), i64::MAX);
    assert_eq!(lookup.string("huge"), "18446744073709551615");
}

#[test]
fn float_fields_still_use_float_rules() {
    let lookup = FieldLookup::from_json_str(r#"{"f":2.0,"g":-3.7}"#).unwrap();
    assert_eq!(lookup.string("f"), "2");
    assert_eq!(lookup.int("g"), -3);
}

// ============================================================================
// Presence variants
// ============================================================================

#[test]
fn presence_absent_key_is_none() {
    let lookup = FieldLookup::from_json_str("{}").unwrap();
    assert_eq!(lookup.bool_if_present("k"), None);
    assert_eq!(lookup.int_if_present("k"), None);
    assert_eq!(lookup.double_if_present("k"), None);
    assert_eq!(lookup.string_if_present("k"), None);
}

#[test]
fn presence_uncoercible_value_is_some_zero() {
    let lookup = FieldLookup::from_json_str(r#"{"k":"xyz"}"#).unwrap();
    assert_eq!(lookup.int_if_present("k"), Some(0));
    assert_eq!(lookup.bool_if_present("k"), Some(false));
    assert_eq!(lookup.double_if_present("k"), Some(0.0));
}

#[test]
fn presence_explicit_null_is_some_zero() {
    let lookup = FieldLookup::from_json_str(r#"{"k":null}"#).unwrap();
    assert!(lookup.contains("k"));
    assert_eq!(lookup.bool_if_present("k"), Some(false));
    assert_eq!(lookup.string_if_present("k"), Some(String::new()));
}

#[test]
fn presence_coercible_value() {
    let user = drifted_user();
    assert_eq!(user.int_if_present("id"), Some(42));
    assert_eq!(user.string_if_present("verified"), Some("1".to_string()));
    assert_eq!(user.coerce_if_present::<f64>("score"), Some(7.5));
}

// ============================================================================
// Strict decode with default
// ============================================================================

#[test]
fn decode_or_returns_exact_match() {
    let user = drifted_user();
    assert_eq!(user.decode_or("age", 0.0_f64), 31.9);
    assert_eq!(user.decode_or("notes", String::new()), "xyz");
    assert_eq!(
        user.decode_or("tags", Vec::<String>::new()),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn decode_or_does_not_coerce_across_types() {
    let user = drifted_user();
    assert_eq!(user.decode_or("id", -1_i64), -1);
    assert!(!user.decode_or("admin", false));
    assert_eq!(user.decode_or("name", "unknown".to_string()), "unknown");
}

#[test]
fn decode_or_uses_default_for_absent_and_null() {
    let user = drifted_user();
    assert_eq!(user.decode_or("missing", 5_i64), 5);
    assert_eq!(user.decode_or("nickname", "anon".to_string()), "anon");
}

#[test]
fn decode_or_decodes_structs() {
    #[derive(Debug, Deserialize, PartialEq, Default)]
    struct Address {
        city: String,
    }

    let user = drifted_user();
    let address: Address = user.decode_or("address", Address::default());
    assert_eq!(address.city, "Lisbon");
    let fallback: Address = user.decode_or("tags", Address::default());
    assert_eq!(fallback, Address::default());
}

#[test]
fn decode_or_else_runs_factory_only_on_failure() {
    let user = drifted_user();
    let calls = Cell::new(0);
    let make_default = || {
        calls.set(calls.get() + 1);
        0.0_f64
    };

    assert_eq!(user.decode_or_else("age", make_default), 31.9);
    assert_eq!(calls.get(), 0);

    assert_eq!(user.decode_or_else("score", make_default), 0.0);
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// Strict decode with errors
// ============================================================================

#[test]
fn decode_missing_field_is_error() {
    let user = drifted_user();
    let err = user.decode::<i64>("missing").unwrap_err();
    assert!(matches!(err, LenientError::MissingField { ref field } if field == "missing"));
    assert_eq!(err.to_string(), "missing field `missing`");
}

#[test]
fn decode_type_mismatch_names_field() {
    let user = drifted_user();
    let err = user.decode::<i64>("id").unwrap_err();
    assert!(matches!(err, LenientError::Field { ref field, .. } if field == "id"));
    assert!(err.to_string().starts_with("field `id`: "));
}

#[test]
fn decode_exact_match() {
    let user = drifted_user();
    assert_eq!(user.decode::<String>("id").unwrap(), "42");
    assert_eq!(user.decode::<Option<String>>("nickname").unwrap(), None);
}

#[test]
fn decode_if_present_absent_and_null_are_none() {
    let user = drifted_user();
    assert_eq!(user.decode_if_present::<String>("missing").unwrap(), None);
    assert_eq!(user.decode_if_present::<String>("nickname").unwrap(), None);
    assert_eq!(
        user.decode_if_present::<String>("notes").unwrap(),
        Some("xyz".to_string())
    );
}

#[test]
fn decode_if_present_mismatch_is_error() {
    let user = drifted_user();
    let err = user.decode_if_present::<bool>("admin").unwrap_err();
    assert!(matches!(err, LenientError::Field { ref field, .. } if field == "admin"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn fallback_paths_emit_events_without_panicking() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("lenient_json=trace"))
        .with_test_writer()
        .try_init();

    let user = drifted_user();
    assert_eq!(user.int("notes"), 0);
    assert_eq!(user.int("missing"), 0);
    assert_eq!(user.decode_or("notes", 1_i64), 1);
}

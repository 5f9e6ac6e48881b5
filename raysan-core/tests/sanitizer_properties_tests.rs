// raysan-core/tests/sanitizer_properties_tests.rs
//! End-to-end behavior of the `Sanitizer` through its public API.

use std::sync::Arc;

use anyhow::{bail, Result};
use test_log::test;

use raysan_core::{
    create_custom_rule, needs_sanitization, sanitize_html, RuleRegistry, SanitizationConfig,
    SanitizationEngine, Sanitizer, Value, ValueKind,
};

fn nested_arrays(levels: usize, leaf: Value) -> Value {
    (0..levels).fold(leaf, |inner, _| Value::Array(vec![inner]))
}

fn sample_inputs() -> Vec<Value> {
    vec![
        Value::from("a\0b"),
        Value::from("  <script>alert(1)</script>  hello \u{200B}world\u{1b}[1m!\u{1b}[0m  "),
        Value::from("<scr<script>x</script>ipt>steal()</script> tail"),
        Value::from("bell\x07\x7f and\ttabs\n"),
        Value::from(f64::NAN),
        Value::from(f64::INFINITY),
        Value::from(42.0),
        Value::Bool(true),
        Value::Null,
        Value::object([
            ("__proto__", Value::object([("admin", Value::Bool(true))])),
            ("constructor", Value::Null),
            ("name", Value::from(" Ada\0 ")),
            (
                "items",
                Value::Array(vec![
                    Value::object([("prototype", Value::from(1.0)), ("ok", Value::from(f64::NAN))]),
                    Value::from("<b>x</b>"),
                ]),
            ),
        ]),
        nested_arrays(6, Value::object([("__proto__", Value::Null)])),
    ]
}

#[test]
fn test_null_byte_is_removed() {
    let result = Sanitizer::new().sanitize(&Value::from("a\0b"), None);
    assert_eq!(result.sanitized, Value::from("ab"));
    assert_eq!(result.original, Value::from("a\0b"));
    assert!(result.applied_rules.contains(&"remove_null_bytes".to_string()));
}

#[test]
fn test_proto_key_dropped_at_every_reachable_level() {
    let poisoned = |inner: Value| Value::object([("__proto__", Value::Null), ("child", inner)]);
    let value = poisoned(poisoned(poisoned(Value::Null)));
    let result = Sanitizer::new().sanitize(&value, None);

    let mut node = &result.sanitized;
    for _ in 0..3 {
        assert!(node.get("__proto__").is_none(), "found __proto__ in {:?}", node);
        node = node.get("child").expect("child key survives");
    }
    assert_eq!(node, &Value::Null);
}

#[test]
fn test_proto_key_beyond_max_depth_survives() {
    let value = Value::object([(
        "child",
        Value::object([("__proto__", Value::Null)]),
    )]);
    let config = SanitizationConfig {
        max_depth: 1,
        ..Default::default()
    };
    let result = Sanitizer::new().sanitize(&value, Some(&config));
    assert!(result.sanitized.get("child").and_then(|c| c.get("__proto__")).is_some());
}

#[test]
fn test_non_finite_numbers_become_zero() {
    let sanitizer = Sanitizer::new();
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = sanitizer.sanitize(&Value::from(n), None);
        assert_eq!(result.sanitized, Value::from(0.0));
        assert_eq!(result.applied_rules, ["sanitize_numbers"]);
    }
    let finite = sanitizer.sanitize(&Value::from(1.5), None);
    assert!(finite.applied_rules.is_empty());
}

#[test]
fn test_second_pass_is_a_no_op() {
    let sanitizer = Sanitizer::new();
    for input in sample_inputs() {
        let once = sanitizer.sanitize(&input, None).sanitized;
        let twice = sanitizer.sanitize(&once, None);
        assert_eq!(twice.sanitized, once, "not idempotent for {:?}", input);
        assert!(twice.applied_rules.is_empty(), "rules applied on second pass: {:?}", twice.applied_rules);
    }
}

#[test]
fn test_depth_bound_leaves_deep_content_alone() {
    let config = SanitizationConfig {
        max_depth: 2,
        ..Default::default()
    };
    let leaf = Value::object([("__proto__", Value::from("x\0y"))]);
    let input = nested_arrays(5, leaf.clone());
    let result = Sanitizer::new().sanitize(&input, Some(&config));

    assert_eq!(result.sanitized, input);
    let mut node = &result.sanitized;
    for _ in 0..5 {
        node = &node.as_array().expect("array level")[0];
    }
    assert_eq!(node, &leaf);
}

#[test]
fn test_top_level_string_is_flat_sanitized_but_nested_strings_are_not() {
    let input = Value::Array(vec![Value::from("x\0y")]);
    let result = Sanitizer::new().sanitize(&input, None);
    assert_eq!(result.sanitized, input);

    let strict = SanitizationConfig {
        enable_strict_mode: true,
        ..Default::default()
    };
    let result = Sanitizer::new().sanitize(&input, Some(&strict));
    assert_eq!(result.sanitized, Value::Array(vec![Value::from("xy")]));
}

#[test]
fn test_strict_mode_filters_after_rules() {
    let strict = SanitizationConfig {
        enable_strict_mode: true,
        ..Default::default()
    };
    let input = Value::object([
        ("café", Value::from(1.0)),
        ("title", Value::from("naïve résumé")),
        ("$id", Value::from(f64::NAN)),
    ]);
    let result = Sanitizer::new().sanitize(&input, Some(&strict));
    assert_eq!(
        result.sanitized,
        Value::object([("title", Value::from("nave rsum")), ("$id", Value::from(0.0))])
    );
    assert_eq!(result.metadata.sanitized_type, ValueKind::Object);
}

#[test]
fn test_deep_pass_can_be_disabled() {
    let config = SanitizationConfig {
        enable_deep_sanitization: false,
        ..Default::default()
    };
    let input = Value::Array(vec![Value::object([("__proto__", Value::Null)])]);
    let result = Sanitizer::new().sanitize(&input, Some(&config));
    assert_eq!(result.sanitized, input);
}

#[test]
fn test_invalid_json_returns_none() {
    let sanitizer = Sanitizer::new();
    assert_eq!(sanitizer.sanitize_json(r#"{"a":1,}"#), None);
    assert_eq!(
        sanitizer.sanitize_json(r#"{"a":" x ","__proto__":1}"#),
        Some(Value::object([("a", Value::from(" x "))]))
    );
}

#[test]
fn test_needs_sanitization_examples() {
    assert!(!needs_sanitization(&Value::from("clean text")));
    assert!(needs_sanitization(&Value::from("a<b")));
}

#[test]
fn test_sanitize_html_example() {
    assert_eq!(
        sanitize_html(r#"<div onclick="x()">hi</div>"#, Some(&["div"]), None),
        "<div>hi</div>"
    );
}

#[test]
fn test_custom_rule_round_trip() {
    let registry = Arc::new(RuleRegistry::new());
    let sanitizer = Sanitizer::with_registry(Arc::clone(&registry));
    registry.add_custom_rule(create_custom_rule(
        "uppercase_strings",
        "Uppercases every string",
        1_000,
        |v| v.is_string(),
        |v, _| match v {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            _ => bail!("expected a string"),
        },
    ));

    let result = sanitizer.sanitize(&Value::from("ab"), None);
    assert_eq!(result.sanitized, Value::from("AB"));
    assert_eq!(result.applied_rules.first().map(String::as_str), Some("uppercase_strings"));

    assert!(registry.remove_rule("uppercase_strings"));
    let result = sanitizer.sanitize(&Value::from("ab"), None);
    assert_eq!(result.sanitized, Value::from("ab"));
    assert!(!result.applied_rules.contains(&"uppercase_strings".to_string()));
}

#[test]
fn test_failing_custom_rule_never_escapes() -> Result<()> {
    let sanitizer = Sanitizer::new();
    sanitizer.registry().add_custom_rule(create_custom_rule(
        "always_fails",
        "",
        500,
        |_| true,
        |_, _| bail!("rule exploded"),
    ));
    let result = sanitizer.sanitize(&Value::from(" a\0 "), None);
    assert_eq!(result.sanitized, Value::from("a"));
    assert_eq!(result.warnings, ["Rule 'always_fails' failed: rule exploded"]);
    Ok(())
}

#[test]
fn test_type_guarded_entry_points() {
    let sanitizer = Sanitizer::new();
    let number = Value::from(1.0);

    let result = sanitizer.sanitize_string(&number, None);
    assert_eq!(result.warnings, ["Input is not a string"]);
    assert_eq!(result.sanitized, number);

    assert_eq!(sanitizer.sanitize_object(&Value::Null, None).warnings, ["Input is not an object"]);
    assert_eq!(sanitizer.sanitize_array(&Value::from("x"), None).warnings, ["Input is not an array"]);

    let ok = sanitizer.sanitize_array(&Value::Array(vec![]), None);
    assert!(ok.warnings.is_empty());
}

#[test]
fn test_batch_sanitize_preserves_order() {
    let inputs = [Value::from("a\0"), Value::from(f64::NAN), Value::Null];
    let results = Sanitizer::new().batch_sanitize(&inputs, None);
    let sanitized: Vec<Value> = results.into_iter().map(|r| r.sanitized).collect();
    assert_eq!(sanitized, [Value::from("a"), Value::from(0.0), Value::Null]);
}

#[test]
fn test_registry_copy_is_independent() {
    let sanitizer = Sanitizer::new();
    let mut rules = sanitizer.sanitization_rules();
    let builtin_count = rules.len();
    rules.clear();
    assert_eq!(sanitizer.sanitization_rules().len(), builtin_count);
}

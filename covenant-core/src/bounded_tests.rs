use super::*;
use rustc_hash::FxHashMap;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[test]
fn test_short_scalars_are_untouched() {
    assert_eq!(render(&Value::Integer(42), 40), "42");
    assert_eq!(render(&Value::Nil, 40), "nil");
    assert_eq!(render(&Value::from("hello"), 40), "\"hello\"");
    assert_eq!(render(&Value::Char('x'), 40), "'x'");
}

#[test]
fn test_elide_keeps_head_and_tail() {
    assert_eq!(elide(ALPHABET, 10), "abcd...xyz");
    assert_eq!(elide(ALPHABET, 10).chars().count(), 10);
    assert_eq!(elide("abcdef", 3), "abc");
    assert_eq!(elide("abc", 10), "abc");
}

#[test]
fn test_zero_budget_is_unbounded() {
    assert_eq!(elide(ALPHABET, 0), ALPHABET);
    let list = Value::List((1..=30).map(Value::Integer).collect());
    assert_eq!(render(&list, 0), list.to_string());
}

#[test]
fn test_long_string_is_elided_inside_quotes() {
    let rendered = render(&Value::from(ALPHABET), 12);
    assert_eq!(rendered, "\"abcd...xyz\"");
}

#[test]
fn test_small_list_fits() {
    let list = Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    assert_eq!(render(&list, 40), "[1, 2, 3]");
    assert_eq!(render(&Value::List(vec![]), 40), "[]");
}

#[test]
fn test_large_list_is_truncated() {
    let list = Value::List((1..=100).map(Value::Integer).collect());
    assert_eq!(
        render(&list, 40),
        "[1, 2, 3, 4, 5, 6, 7, 8, ...(92 more)]"
    );
}

#[test]
fn test_remainder_marker_counts_against_budget() {
    let list = Value::List((0..10_000).map(Value::Integer).collect());
    let rendered = render(&list, DEFAULT_EVIDENCE_LENGTH);
    assert!(rendered.chars().count() <= DEFAULT_EVIDENCE_LENGTH);
    assert!(rendered.ends_with("more)]"));

    let tight = Value::List((1..=21).map(Value::Integer).collect());
    assert_eq!(render(&tight, 20), "[1, 2, ...(19 more)]");
    assert_eq!(render(&tight, 10), "[...(21 more)]");
}

#[test]
fn test_list_elements_are_capped() {
    let list = Value::List(vec![Value::from(ALPHABET)]);
    let rendered = render(&list, 200);
    assert!(rendered.starts_with("[\"abcdefgh"));
    assert!(rendered.contains("..."));
    assert!(rendered.chars().count() <= 2 + DEFAULT_ELEMENT_LENGTH);
}

#[test]
fn test_map_renders_sorted_entries() {
    let mut map = FxHashMap::default();
    map.insert("b".to_string(), Value::from("x"));
    map.insert("a".to_string(), Value::Integer(1));
    assert_eq!(render(&Value::Map(map), 40), "{a: 1, b: \"x\"}");
}

#[test]
fn test_render_default_uses_evidence_budget() {
    let list = Value::List((1..=100).map(Value::Integer).collect());
    assert_eq!(render_default(&list), render(&list, DEFAULT_EVIDENCE_LENGTH));
}

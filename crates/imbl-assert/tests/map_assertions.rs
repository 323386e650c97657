mod common;

use imbl::HashMap;
use imbl_assert::checks::{
    check_contains_all_entries_of, check_contains_entry, check_contains_key,
    check_contains_only_keys, check_contains_value, check_does_not_contain_entry,
    check_does_not_contain_key, check_has_size, check_is_empty, check_is_not_empty,
};
use imbl_assert::{assert_that, AssertError, Representation};

use common::{hash_map, ord_map, pairs, single_entry, two_entries};

fn repr() -> Representation {
    Representation::default()
}

#[test]
fn passing_chain_covers_every_assertion() {
    let actual = two_entries();
    let chain = assert_that(&actual)
        .is_not_empty()
        .has_size(2)
        .contains_key(&"key-1".to_string())
        .does_not_contain_key(&"key-3".to_string())
        .contains_value(&"value-2".to_string())
        .contains_entry(&"key-1".to_string(), &"value-1".to_string())
        .does_not_contain_entry(&"key-1".to_string(), &"value-2".to_string())
        .contains_all_entries_of(&pairs(&[("key-2", "value-2")]))
        .contains_only_keys(&["key-2".to_string(), "key-1".to_string()])
        .contains_only(&pairs(&[("key-2", "value-2"), ("key-1", "value-1")]));
    assert!(std::ptr::eq(chain.actual(), &actual));

    let empty: HashMap<String, String> = HashMap::new();
    assert_that(&empty).is_empty().has_size(0);
}

#[test]
fn is_empty_reports_actual() {
    let err = check_is_empty(&single_entry(), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting empty but was:\n  <HashMap((key, value))>\n"
    );
}

#[test]
fn is_not_empty_reports_fixed_message() {
    let empty: HashMap<String, String> = HashMap::new();
    let err = check_is_not_empty(&empty).unwrap_err();
    assert_eq!(err.to_string(), "\nExpecting actual not to be empty\n");
}

#[test]
fn has_size_reports_both_sizes() {
    let err = check_has_size(&two_entries(), 3, &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpected size: <3> but was: <2> in:\n  <HashMap((key-1, value-1), (key-2, value-2))>\n"
    );
    assert_eq!(err.info().context.get("expected").map(String::as_str), Some("3"));
    assert_eq!(err.info().context.get("actual").map(String::as_str), Some("2"));
}

#[test]
fn key_lookups_report_the_key() {
    let actual = ord_map(&[("a", 1), ("b", 2)]);

    let err = check_contains_key(&actual, &"z".to_string(), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1), (b, 2))>\nto contain key:\n  <z>\n"
    );

    let err = check_does_not_contain_key(&actual, &"a".to_string(), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1), (b, 2))>\nnot to contain key:\n  <a>\n"
    );
}

#[test]
fn contains_value_reports_the_value() {
    let actual = ord_map(&[("a", 1)]);
    let err = check_contains_value(&actual, &7, &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1))>\nto contain value:\n  <7>\n"
    );
}

#[test]
fn entry_lookups_compare_values() -> Result<(), AssertError> {
    let actual = ord_map(&[("a", 1)]);
    check_contains_entry(&actual, &"a".to_string(), &1, &repr())?;
    check_does_not_contain_entry(&actual, &"a".to_string(), &2, &repr())?;
    check_does_not_contain_entry(&actual, &"b".to_string(), &1, &repr())?;

    let err = check_contains_entry(&actual, &"a".to_string(), &2, &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1))>\nto contain:\n  <(a, 2)>\nbut could not find:\n  <(a, 2)>\n"
    );

    let err = check_does_not_contain_entry(&actual, &"a".to_string(), &1, &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1))>\nnot to contain:\n  <(a, 1)>\nbut found:\n  <(a, 1)>\n"
    );
    Ok(())
}

#[test]
fn contains_all_entries_of_lists_missing_entries() {
    let actual = two_entries();
    let expected = hash_map(&[("key-1", "value-1"), ("key-4", "value-4")]);

    let err = check_contains_all_entries_of(&actual, Some(&expected), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <HashMap((key-1, value-1), (key-2, value-2))>\n\
         to contain:\n  <HashMap((key-1, value-1), (key-4, value-4))>\n\
         but could not find:\n  <HashMap((key-4, value-4))>\n"
    );

    let err = check_contains_all_entries_of::<_, Vec<(String, String)>>(&actual, None, &repr())
        .unwrap_err();
    assert_eq!(err.to_string(), "Expected entries should not be null");
}

#[test]
fn contains_only_keys_uses_containment_shapes() {
    let actual = ord_map(&[("a", 1), ("b", 2)]);

    let err = check_contains_only_keys(&actual, Some(&["a".to_string()][..]), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1), (b, 2))>\nto contain only:\n  <[a]>\n\
         but the following elements were unexpected:\n  <[b]>\n"
    );

    let keys = ["a".to_string(), "c".to_string()];
    let err = check_contains_only_keys(&actual, Some(&keys[..]), &repr()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nExpecting:\n  <OrdMap((a, 1), (b, 2))>\nto contain only:\n  <[a, c]>\n\
         elements not found:\n  <[c]>\nand elements not expected:\n  <[b]>\n"
    );

    let err = check_contains_only_keys(&actual, None, &repr()).unwrap_err();
    assert!(matches!(err, AssertError::Usage(_)));
    assert_eq!(err.to_string(), "Expected keys should not be null");
}

#[test]
#[should_panic(expected = "to contain key:\n  <missing>")]
fn fluent_contains_key_panics() {
    assert_that(&single_entry()).contains_key(&"missing".to_string());
}

#[test]
#[should_panic(expected = "Expected size: <5>")]
fn fluent_has_size_panics_after_passing_links() {
    assert_that(&two_entries()).is_not_empty().has_size(5);
}

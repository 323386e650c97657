//! Failure message templates.
//!
//! Every template starts and ends with a newline and wraps rendered values
//! in `<...>`, so messages are stable byte for byte.

/// Message raised when expected entries are missing.
pub const NULL_EXPECTED_ENTRIES: &str = "Expected entries should not be null";
/// Message raised when expected keys are missing.
pub const NULL_EXPECTED_KEYS: &str = "Expected keys should not be null";

/// Actual contains everything expected plus extra elements.
pub fn should_contain_only_unexpected(actual: &str, expected: &str, unexpected: &str) -> String {
    format!(
        "\nExpecting:\n  <{actual}>\nto contain only:\n  <{expected}>\nbut the following elements were unexpected:\n  <{unexpected}>\n"
    )
}

/// Actual misses expected elements, and possibly holds extra ones.
pub fn should_contain_only_diff(
    actual: &str,
    expected: &str,
    not_found: &str,
    unexpected: &str,
) -> String {
    format!(
        "\nExpecting:\n  <{actual}>\nto contain only:\n  <{expected}>\nelements not found:\n  <{not_found}>\nand elements not expected:\n  <{unexpected}>\n"
    )
}

/// Actual was expected to hold no entries.
pub fn should_be_empty(actual: &str) -> String {
    format!("\nExpecting empty but was:\n  <{actual}>\n")
}

/// Actual was expected to hold at least one entry.
pub fn should_not_be_empty() -> String {
    "\nExpecting actual not to be empty\n".to_string()
}

/// Entry count differs from the expected size.
pub fn should_have_size(actual: &str, actual_size: usize, expected_size: usize) -> String {
    format!("\nExpected size: <{expected_size}> but was: <{actual_size}> in:\n  <{actual}>\n")
}

/// Key is not bound.
pub fn should_contain_key(actual: &str, key: &str) -> String {
    format!("\nExpecting:\n  <{actual}>\nto contain key:\n  <{key}>\n")
}

/// Key is bound but should not be.
pub fn should_not_contain_key(actual: &str, key: &str) -> String {
    format!("\nExpecting:\n  <{actual}>\nnot to contain key:\n  <{key}>\n")
}

/// No entry holds the value.
pub fn should_contain_value(actual: &str, value: &str) -> String {
    format!("\nExpecting:\n  <{actual}>\nto contain value:\n  <{value}>\n")
}

/// Shared by `contains_entry` and `contains_all_entries_of`.
pub fn should_contain(actual: &str, expected: &str, not_found: &str) -> String {
    format!("\nExpecting:\n  <{actual}>\nto contain:\n  <{expected}>\nbut could not find:\n  <{not_found}>\n")
}

/// A forbidden entry is present.
pub fn should_not_contain(actual: &str, unexpected: &str, found: &str) -> String {
    format!("\nExpecting:\n  <{actual}>\nnot to contain:\n  <{unexpected}>\nbut found:\n  <{found}>\n")
}

use std::fmt::Display;
use std::hash::Hash;

use imbl_assert_core::errors::{AssertError, ErrorInfo};
use imbl_assert_core::{ElementOrdering, Representation};

use crate::diff::{key_diff, EntryDiff};
use crate::entries::{ActualMap, EntrySource};
use crate::messages;

fn null_entries() -> AssertError {
    AssertError::Usage(
        ErrorInfo::new("null-expected-entries", messages::NULL_EXPECTED_ENTRIES)
            .with_hint("pass Some(entries), or call the non-optional variant"),
    )
}

fn render_entries<S, K, V>(shape: &S, entries: &[(&K, &V)], repr: &Representation) -> String
where
    S: EntrySource + ?Sized,
    K: Display + ?Sized,
    V: Display + ?Sized,
{
    let rendered = entries
        .iter()
        .map(|(key, value)| repr.render_entry(*key, *value))
        .collect();
    repr.render_container(shape.container_name(), shape.ordering(), rendered)
}

/// Renders a whole entry source, e.g. `HashMap((k, v))`.
pub fn render_source<S>(source: &S, repr: &Representation) -> String
where
    S: EntrySource + ?Sized,
    S::Key: Display,
    S::Value: Display,
{
    let entries: Vec<_> = source.entries().collect();
    render_entries(source, &entries, repr)
}

fn render_keys<K: Display>(keys: &[&K], ordering: ElementOrdering, repr: &Representation) -> String {
    let rendered = keys.iter().map(|key| repr.render_value(*key)).collect();
    repr.render_container(None, ordering, rendered)
}

/// Verifies that `actual` holds exactly the entries in `expected`, as sets.
///
/// `None` for `expected` is a usage error reported before any comparison.
/// On mismatch the message lists only the unexpected entries when nothing
/// is missing, otherwise both the missing and the unexpected entries.
pub fn check_contains_only<A, E>(
    actual: &A,
    expected: Option<&E>,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    E: EntrySource<Key = A::Key, Value = A::Value> + ?Sized,
    A::Key: Hash + Eq + Display,
    A::Value: Hash + Eq + Display,
{
    let expected = expected.ok_or_else(null_entries)?;
    let diff = EntryDiff::compute(actual, expected);
    if diff.is_empty() {
        return Ok(());
    }

    let actual_text = render_source(actual, repr);
    let expected_text = render_source(expected, repr);
    let unexpected_text = render_entries(actual, &diff.unexpected, repr);
    let message = if diff.not_found.is_empty() {
        messages::should_contain_only_unexpected(&actual_text, &expected_text, &unexpected_text)
    } else {
        let not_found_text = render_entries(expected, &diff.not_found, repr);
        messages::should_contain_only_diff(
            &actual_text,
            &expected_text,
            &not_found_text,
            &unexpected_text,
        )
    };
    Err(AssertError::mismatch("contains-only", message)
        .with_context("unexpected", diff.unexpected.len().to_string())
        .with_context("not_found", diff.not_found.len().to_string()))
}

/// Verifies that the keys of `actual` are exactly `expected`, as sets.
pub fn check_contains_only_keys<A>(
    actual: &A,
    expected: Option<&[A::Key]>,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Hash + Eq + Display,
    A::Value: Display,
{
    let expected = expected.ok_or_else(|| {
        AssertError::usage("null-expected-keys", messages::NULL_EXPECTED_KEYS)
    })?;
    let (unexpected, not_found) = key_diff(actual.entries().map(|(key, _)| key), expected.iter());
    if unexpected.is_empty() && not_found.is_empty() {
        return Ok(());
    }

    let actual_text = render_source(actual, repr);
    let expected_keys: Vec<&A::Key> = expected.iter().collect();
    let expected_text = render_keys(&expected_keys, ElementOrdering::Ordered, repr);
    let unexpected_text = render_keys(&unexpected, actual.ordering(), repr);
    let message = if not_found.is_empty() {
        messages::should_contain_only_unexpected(&actual_text, &expected_text, &unexpected_text)
    } else {
        let not_found_text = render_keys(&not_found, ElementOrdering::Ordered, repr);
        messages::should_contain_only_diff(
            &actual_text,
            &expected_text,
            &not_found_text,
            &unexpected_text,
        )
    };
    Err(AssertError::mismatch("contains-only-keys", message))
}

/// Verifies that every entry of `expected` is present in `actual`.
pub fn check_contains_all_entries_of<A, E>(
    actual: &A,
    expected: Option<&E>,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    E: EntrySource<Key = A::Key, Value = A::Value> + ?Sized,
    A::Key: Hash + Eq + Display,
    A::Value: Hash + Eq + Display,
{
    let expected = expected.ok_or_else(null_entries)?;
    let diff = EntryDiff::compute(actual, expected);
    if diff.not_found.is_empty() {
        return Ok(());
    }
    let message = messages::should_contain(
        &render_source(actual, repr),
        &render_source(expected, repr),
        &render_entries(expected, &diff.not_found, repr),
    );
    Err(AssertError::mismatch("contains-all-entries-of", message)
        .with_context("not_found", diff.not_found.len().to_string()))
}

/// Verifies that `actual` maps `key` to `value`.
pub fn check_contains_entry<A>(
    actual: &A,
    key: &A::Key,
    value: &A::Value,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: PartialEq + Display,
{
    if actual.value_of(key) == Some(value) {
        return Ok(());
    }
    let entry = repr.render_entry(key, value);
    let message = messages::should_contain(&render_source(actual, repr), &entry, &entry);
    Err(AssertError::mismatch("contains-entry", message))
}

/// Verifies that `actual` does not map `key` to `value`.
pub fn check_does_not_contain_entry<A>(
    actual: &A,
    key: &A::Key,
    value: &A::Value,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: PartialEq + Display,
{
    if actual.value_of(key) != Some(value) {
        return Ok(());
    }
    let entry = repr.render_entry(key, value);
    let message = messages::should_not_contain(&render_source(actual, repr), &entry, &entry);
    Err(AssertError::mismatch("does-not-contain-entry", message))
}

/// Verifies that `key` is bound in `actual`.
pub fn check_contains_key<A>(actual: &A, key: &A::Key, repr: &Representation) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: Display,
{
    if actual.value_of(key).is_some() {
        return Ok(());
    }
    let message = messages::should_contain_key(&render_source(actual, repr), &repr.render_value(key));
    Err(AssertError::mismatch("contains-key", message))
}

/// Verifies that `key` is not bound in `actual`.
pub fn check_does_not_contain_key<A>(
    actual: &A,
    key: &A::Key,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: Display,
{
    if actual.value_of(key).is_none() {
        return Ok(());
    }
    let message =
        messages::should_not_contain_key(&render_source(actual, repr), &repr.render_value(key));
    Err(AssertError::mismatch("does-not-contain-key", message))
}

/// Verifies that some entry of `actual` has `value`.
pub fn check_contains_value<A>(
    actual: &A,
    value: &A::Value,
    repr: &Representation,
) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: PartialEq + Display,
{
    if actual.entries().any(|(_, candidate)| candidate == value) {
        return Ok(());
    }
    let message =
        messages::should_contain_value(&render_source(actual, repr), &repr.render_value(value));
    Err(AssertError::mismatch("contains-value", message))
}

/// Verifies that `actual` has no entries.
pub fn check_is_empty<A>(actual: &A, repr: &Representation) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: Display,
{
    if actual.entry_count() == 0 {
        return Ok(());
    }
    Err(AssertError::mismatch(
        "is-empty",
        messages::should_be_empty(&render_source(actual, repr)),
    ))
}

/// Verifies that `actual` has at least one entry.
pub fn check_is_not_empty<A>(actual: &A) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
{
    if actual.entry_count() > 0 {
        return Ok(());
    }
    Err(AssertError::mismatch("is-not-empty", messages::should_not_be_empty()))
}

/// Verifies that `actual` holds exactly `expected` entries.
pub fn check_has_size<A>(actual: &A, expected: usize, repr: &Representation) -> Result<(), AssertError>
where
    A: ActualMap + ?Sized,
    A::Key: Display,
    A::Value: Display,
{
    let size = actual.entry_count();
    if size == expected {
        return Ok(());
    }
    let message = messages::should_have_size(&render_source(actual, repr), size, expected);
    Err(AssertError::mismatch("has-size", message)
        .with_context("expected", expected.to_string())
        .with_context("actual", size.to_string()))
}

use std::fmt::Display;
use std::hash::Hash;

use imbl_assert_core::{AssertionInfo, Representation, SoftAssertions};

use crate::checks;
use crate::entries::{ActualMap, EntrySource};

/// Fluent assertions over a borrowed map.
///
/// Every assertion returns `self` so calls chain. A failing assertion panics
/// at the caller with the rendered message, unless the assertion was started
/// from a [`SoftAssertions`] collector (see [`SoftMapAssertions`]).
///
/// ```
/// use imbl::HashMap;
/// use imbl_assert::assert_that;
///
/// let actual = HashMap::unit("key", "value");
/// assert_that(&actual)
///     .has_size(1)
///     .contains_key(&"key")
///     .contains_only(&[("key", "value")]);
/// ```
#[derive(Debug)]
pub struct MapAssert<'a, M: ?Sized> {
    actual: &'a M,
    info: AssertionInfo<'a>,
}

/// Starts a fluent assertion chain on `actual`.
pub fn assert_that<M: ActualMap + ?Sized>(actual: &M) -> MapAssert<'_, M> {
    MapAssert::new(actual, AssertionInfo::new())
}

impl<'a, M> MapAssert<'a, M>
where
    M: ActualMap + ?Sized,
{
    /// Creates an assertion over `actual` routed through `info`.
    pub fn new(actual: &'a M, info: AssertionInfo<'a>) -> Self {
        Self { actual, info }
    }

    /// The map under test.
    pub fn actual(&self) -> &'a M {
        self.actual
    }

    /// Prefixes failure messages with `[description] `.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info.set_description(description);
        self
    }

    /// Replaces generated failure messages with `message`.
    pub fn with_fail_message(mut self, message: impl Into<String>) -> Self {
        self.info.set_overriding_message(message);
        self
    }

    /// Renders failure messages with `representation`.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.info.set_representation(representation);
        self
    }

    /// Asserts that the map's entries are exactly `expected`, compared as sets.
    #[track_caller]
    pub fn contains_only<E>(self, expected: &E) -> Self
    where
        E: EntrySource<Key = M::Key, Value = M::Value> + ?Sized,
        M::Key: Hash + Eq + Display,
        M::Value: Hash + Eq + Display,
    {
        self.contains_only_opt(Some(expected))
    }

    /// Like [`MapAssert::contains_only`]; `None` fails with
    /// `Expected entries should not be null`.
    #[track_caller]
    pub fn contains_only_opt<E>(self, expected: Option<&E>) -> Self
    where
        E: EntrySource<Key = M::Key, Value = M::Value> + ?Sized,
        M::Key: Hash + Eq + Display,
        M::Value: Hash + Eq + Display,
    {
        let result = checks::check_contains_only(self.actual, expected, self.info.representation());
        self.info.report("contains_only", result);
        self
    }

    /// Asserts that the map's keys are exactly `keys`, compared as sets.
    #[track_caller]
    pub fn contains_only_keys(self, keys: &[M::Key]) -> Self
    where
        M::Key: Hash + Eq + Display,
        M::Value: Display,
    {
        self.contains_only_keys_opt(Some(keys))
    }

    /// Like [`MapAssert::contains_only_keys`]; `None` is a usage error.
    #[track_caller]
    pub fn contains_only_keys_opt(self, keys: Option<&[M::Key]>) -> Self
    where
        M::Key: Hash + Eq + Display,
        M::Value: Display,
    {
        let result = checks::check_contains_only_keys(self.actual, keys, self.info.representation());
        self.info.report("contains_only_keys", result);
        self
    }

    /// Asserts that every entry of `expected` is present.
    #[track_caller]
    pub fn contains_all_entries_of<E>(self, expected: &E) -> Self
    where
        E: EntrySource<Key = M::Key, Value = M::Value> + ?Sized,
        M::Key: Hash + Eq + Display,
        M::Value: Hash + Eq + Display,
    {
        let result = checks::check_contains_all_entries_of(
            self.actual,
            Some(expected),
            self.info.representation(),
        );
        self.info.report("contains_all_entries_of", result);
        self
    }

    /// Asserts that `key` maps to `value`.
    #[track_caller]
    pub fn contains_entry(self, key: &M::Key, value: &M::Value) -> Self
    where
        M::Key: Display,
        M::Value: PartialEq + Display,
    {
        let result = checks::check_contains_entry(self.actual, key, value, self.info.representation());
        self.info.report("contains_entry", result);
        self
    }

    /// Asserts that `key` does not map to `value`.
    #[track_caller]
    pub fn does_not_contain_entry(self, key: &M::Key, value: &M::Value) -> Self
    where
        M::Key: Display,
        M::Value: PartialEq + Display,
    {
        let result =
            checks::check_does_not_contain_entry(self.actual, key, value, self.info.representation());
        self.info.report("does_not_contain_entry", result);
        self
    }

    /// Asserts that `key` is bound.
    #[track_caller]
    pub fn contains_key(self, key: &M::Key) -> Self
    where
        M::Key: Display,
        M::Value: Display,
    {
        let result = checks::check_contains_key(self.actual, key, self.info.representation());
        self.info.report("contains_key", result);
        self
    }

    /// Asserts that `key` is not bound.
    #[track_caller]
    pub fn does_not_contain_key(self, key: &M::Key) -> Self
    where
        M::Key: Display,
        M::Value: Display,
    {
        let result = checks::check_does_not_contain_key(self.actual, key, self.info.representation());
        self.info.report("does_not_contain_key", result);
        self
    }

    /// Asserts that some entry has `value`.
    #[track_caller]
    pub fn contains_value(self, value: &M::Value) -> Self
    where
        M::Key: Display,
        M::Value: PartialEq + Display,
    {
        let result = checks::check_contains_value(self.actual, value, self.info.representation());
        self.info.report("contains_value", result);
        self
    }

    /// Asserts that the map has no entries.
    #[track_caller]
    pub fn is_empty(self) -> Self
    where
        M::Key: Display,
        M::Value: Display,
    {
        let result = checks::check_is_empty(self.actual, self.info.representation());
        self.info.report("is_empty", result);
        self
    }

    /// Asserts that the map has at least one entry.
    #[track_caller]
    pub fn is_not_empty(self) -> Self {
        let result = checks::check_is_not_empty(self.actual);
        self.info.report("is_not_empty", result);
        self
    }

    /// Asserts that the map holds exactly `expected` entries.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self
    where
        M::Key: Display,
        M::Value: Display,
    {
        let result = checks::check_has_size(self.actual, expected, self.info.representation());
        self.info.report("has_size", result);
        self
    }
}

/// Starts map assertions whose failures are collected rather than raised.
pub trait SoftMapAssertions {
    /// Starts a collecting assertion chain on `actual`.
    fn assert_that<'a, M: ActualMap + ?Sized>(&'a self, actual: &'a M) -> MapAssert<'a, M>;
}

impl SoftMapAssertions for SoftAssertions {
    fn assert_that<'a, M: ActualMap + ?Sized>(&'a self, actual: &'a M) -> MapAssert<'a, M> {
        MapAssert::new(actual, AssertionInfo::collecting(self))
    }
}

use std::collections::HashSet;
use std::hash::Hash;

use crate::entries::EntrySource;

/// Entry-set difference between an actual mapping and expected entries.
///
/// Both sides borrow from their sources and keep source iteration order.
/// Duplicate expected entries appear at most once in `not_found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDiff<'a, K, V> {
    /// Entries of the actual mapping absent from the expected entries.
    pub unexpected: Vec<(&'a K, &'a V)>,
    /// Expected entries absent from the actual mapping.
    pub not_found: Vec<(&'a K, &'a V)>,
}

impl<'a, K, V> EntryDiff<'a, K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    /// Computes `actual − expected` and `expected − actual` over `(key, value)` pairs.
    pub fn compute<A, E>(actual: &'a A, expected: &'a E) -> Self
    where
        A: EntrySource<Key = K, Value = V> + ?Sized,
        E: EntrySource<Key = K, Value = V> + ?Sized,
    {
        let actual_set: HashSet<(&K, &V)> = actual.entries().collect();
        let expected_set: HashSet<(&K, &V)> = expected.entries().collect();

        let mut seen = HashSet::new();
        let unexpected = actual
            .entries()
            .filter(|entry| !expected_set.contains(entry) && seen.insert(*entry))
            .collect();

        let mut seen = HashSet::new();
        let not_found = expected
            .entries()
            .filter(|entry| !actual_set.contains(entry) && seen.insert(*entry))
            .collect();

        Self {
            unexpected,
            not_found,
        }
    }

    /// Whether the two entry sets are equal.
    pub fn is_empty(&self) -> bool {
        self.unexpected.is_empty() && self.not_found.is_empty()
    }
}

/// Keys of `actual` absent from `expected`, and keys of `expected` absent from `actual`.
pub(crate) fn key_diff<'a, K>(
    actual: impl Iterator<Item = &'a K>,
    expected: impl Iterator<Item = &'a K> + Clone,
) -> (Vec<&'a K>, Vec<&'a K>)
where
    K: Hash + Eq + 'a,
{
    let actual: Vec<&K> = actual.collect();
    let actual_set: HashSet<&K> = actual.iter().copied().collect();
    let expected_set: HashSet<&K> = expected.clone().collect();

    let unexpected = actual
        .into_iter()
        .filter(|key| !expected_set.contains(key))
        .collect();
    let mut seen = HashSet::new();
    let not_found = expected
        .filter(|key| !actual_set.contains(key) && seen.insert(*key))
        .collect();
    (unexpected, not_found)
}

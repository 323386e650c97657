use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::hash::{BuildHasher, Hash};

use imbl::{HashMap, OrdMap, Vector};
use imbl_assert_core::ElementOrdering;

/// Boxed iterator over borrowed entries.
pub type Entries<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

/// A collection that can be viewed as a sequence of key/value entries.
///
/// Implemented for the `imbl` maps, `imbl::Vector<(K, V)>`, the std maps
/// and plain sequences of pairs, so any of them can be passed as expected
/// entries.
pub trait EntrySource {
    /// Key type of the entries.
    type Key;
    /// Value type of the entries.
    type Value;

    /// Type name used when rendering the container; `None` renders as `[..]`.
    fn container_name(&self) -> Option<&'static str>;

    /// Whether iteration order is meaningful for rendering.
    fn ordering(&self) -> ElementOrdering;

    /// Iterates over the entries in the container's natural order.
    fn entries(&self) -> Entries<'_, Self::Key, Self::Value>;

    /// Number of entries, duplicates included.
    fn entry_count(&self) -> usize;
}

/// A key/value mapping with unique keys that assertions can be run against.
pub trait ActualMap: EntrySource {
    /// Looks up the value bound to `key`.
    fn value_of(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K, V> EntrySource for HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        Some("HashMap")
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Unordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> ActualMap for HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> EntrySource for OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        Some("OrdMap")
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> ActualMap for OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> EntrySource for Vector<(K, V)>
where
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        Some("Vector")
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter().map(|(key, value)| (key, value)))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> EntrySource for [(K, V)] {
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        None
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter().map(|(key, value)| (key, value)))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, const N: usize> EntrySource for [(K, V); N] {
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        None
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        self.as_slice().entries()
    }

    fn entry_count(&self) -> usize {
        N
    }
}

impl<K, V> EntrySource for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        None
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        self.as_slice().entries()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> EntrySource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        Some("BTreeMap")
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Ordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> EntrySource for StdHashMap<K, V, S>
where
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn container_name(&self) -> Option<&'static str> {
        Some("HashMap")
    }

    fn ordering(&self) -> ElementOrdering {
        ElementOrdering::Unordered
    }

    fn entries(&self) -> Entries<'_, K, V> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

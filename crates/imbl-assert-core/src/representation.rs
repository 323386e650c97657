use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Whether a container's iteration order carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementOrdering {
    /// Iteration order is part of the container's identity (sequences, sorted maps).
    Ordered,
    /// Iteration order is an artefact of hashing.
    Unordered,
}

/// Rendering configuration used when building failure messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Representation {
    /// Containers longer than this print their head and tail around `...`.
    #[serde(default = "Representation::default_max_elements")]
    pub max_elements_for_printing: usize,
    /// Sort the rendered elements of unordered containers.
    #[serde(default = "Representation::default_sort_unordered")]
    pub sort_unordered: bool,
}

impl Representation {
    const fn default_max_elements() -> usize {
        1000
    }

    const fn default_sort_unordered() -> bool {
        true
    }

    /// Returns a copy with a different element limit.
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements_for_printing = max;
        self
    }

    /// Renders a single value.
    pub fn render_value<T: Display + ?Sized>(&self, value: &T) -> String {
        value.to_string()
    }

    /// Renders a key/value pair as `(key, value)`.
    pub fn render_entry<K, V>(&self, key: &K, value: &V) -> String
    where
        K: Display + ?Sized,
        V: Display + ?Sized,
    {
        format!("({key}, {value})")
    }

    /// Renders already formatted elements as `Name(a, b)`, or `[a, b]` when
    /// the container has no name.
    pub fn render_container(
        &self,
        name: Option<&str>,
        ordering: ElementOrdering,
        mut elements: Vec<String>,
    ) -> String {
        if ordering == ElementOrdering::Unordered && self.sort_unordered {
            elements.sort();
        }
        let body = self.join_elements(&elements);
        match name {
            Some(name) => format!("{name}({body})"),
            None => format!("[{body}]"),
        }
    }

    fn join_elements(&self, elements: &[String]) -> String {
        let max = self.max_elements_for_printing;
        if elements.len() <= max {
            return elements.join(", ");
        }
        let head = max / 2;
        let tail = max - head;
        let mut shown: Vec<&str> = elements[..head].iter().map(String::as_str).collect();
        shown.push("...");
        shown.extend(elements[elements.len() - tail..].iter().map(String::as_str));
        shown.join(", ")
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self {
            max_elements_for_printing: Self::default_max_elements(),
            sort_unordered: Self::default_sort_unordered(),
        }
    }
}

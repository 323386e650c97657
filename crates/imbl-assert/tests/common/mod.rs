#![allow(dead_code)]

use imbl::{HashMap, OrdMap};

pub fn single_entry() -> HashMap<String, String> {
    HashMap::unit("key".to_string(), "value".to_string())
}

pub fn two_entries() -> HashMap<String, String> {
    hash_map(&[("key-1", "value-1"), ("key-2", "value-2")])
}

pub fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn hash_map(raw: &[(&str, &str)]) -> HashMap<String, String> {
    pairs(raw).into_iter().collect()
}

pub fn ord_map(raw: &[(&str, i64)]) -> OrdMap<String, i64> {
    raw.iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

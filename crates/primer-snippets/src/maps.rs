//! String-keyed maps: insertion, removal, existence checks and equality.
//!
//! `IndexMap` keeps insertion order so transcripts print the same way every
//! run; equality between two maps still ignores that order.

use crate::{Context, Snippet, Topic, Transcript};
use indexmap::IndexMap;

/// The stored value, or the value type's default when the key is missing.
pub fn lookup_or_default<V: Clone + Default>(map: &IndexMap<String, V>, key: &str) -> V {
    map.get(key).cloned().unwrap_or_default()
}

/// Value plus a found flag. A missing key yields the default and `false`.
pub fn lookup<V: Clone + Default>(map: &IndexMap<String, V>, key: &str) -> (V, bool) {
    match map.get(key) {
        Some(v) => (v.clone(), true),
        None => (V::default(), false),
    }
}

pub fn presence<V>(map: &IndexMap<String, V>, key: &str) -> &'static str {
    if map.contains_key(key) {
        "found"
    } else {
        "not found"
    }
}

pub struct Maps;

impl Snippet for Maps {
    fn topic(&self) -> Topic {
        Topic::Maps
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let mut m: IndexMap<String, String> = IndexMap::new();
        m.insert("name".into(), "harsh".into());
        m.insert("surname".into(), "badagandi".into());

        out.line(format!("{} {}", m["name"], m["surname"]));
        out.line(format!("missing key: {:?}", lookup_or_default(&m, "age")));
        out.line(m.len());

        m.shift_remove("surname");
        out.line(format!("surname after delete: {}", presence(&m, "surname")));

        m.clear();
        out.line(format!("after clear: {}", m.len()));

        let mp = IndexMap::from([("price".to_string(), 10), ("tv".to_string(), 1)]);
        out.line(format!("{mp:?}"));

        let (v, ok) = lookup(&mp, "price");
        if ok {
            out.line("all good");
        } else {
            out.line("NOT GOOD");
        }
        out.line(v);

        let mp1 = IndexMap::from([("tv".to_string(), 1), ("price".to_string(), 10)]);
        out.line(mp == mp1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> IndexMap<String, String> {
        IndexMap::from([
            ("name".to_string(), "harsh".to_string()),
            ("surname".to_string(), "badagandi".to_string()),
        ])
    }

    #[test]
    fn test_missing_key_yields_default() {
        assert_eq!(lookup_or_default(&people(), "age"), "");

        let prices = IndexMap::from([("price".to_string(), 10)]);
        assert_eq!(lookup_or_default(&prices, "tv"), 0);
    }

    #[test]
    fn test_lookup_reports_presence() {
        let prices = IndexMap::from([("price".to_string(), 10)]);
        assert_eq!(lookup(&prices, "price"), (10, true));
        assert_eq!(lookup(&prices, "tv"), (0, false));
    }

    #[test]
    fn test_delete_then_check() {
        let mut m = people();
        assert_eq!(presence(&m, "surname"), "found");

        m.shift_remove("surname");
        assert_eq!(presence(&m, "surname"), "not found");
        assert_eq!(m.len(), 1);

        m.clear();
        assert!(m.is_empty());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = IndexMap::from([("price".to_string(), 10), ("tv".to_string(), 1)]);
        let b = IndexMap::from([("tv".to_string(), 1), ("price".to_string(), 10)]);
        assert_eq!(a, b);

        let c = IndexMap::from([("price".to_string(), 11), ("tv".to_string(), 1)]);
        assert_ne!(a, c);
    }
}

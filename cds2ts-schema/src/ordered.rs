//! Insertion-ordered string-keyed map.
//!
//! CSN documents are JSON objects whose key order carries meaning: elements
//! and enum members must be rendered in the order they were declared. This
//! map keeps that order and deserializes either from a JSON object or from a
//! JSON array of `[name, value]` pairs.

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Map from names to values that iterates in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value.
    ///
    /// An existing key keeps its position and has its value replaced; the
    /// previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object or an array of [name, value] pairs")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }

            fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_element::<(String, V)>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_document_order() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).expect("Failed to parse");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_pair_array() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"[["b", 1], ["a", 2]]"#).expect("Failed to parse");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.keys().next(), Some("b"));
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("first", 1);
        map.insert("second", 2);
        assert_eq!(map.insert("first", 10), Some(1));

        let entries: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(entries, [("first", &10), ("second", &2)]);
    }

    #[test]
    fn test_from_iterator_and_into_iter() {
        let map: OrderedMap<bool> = [("x", true), ("y", false)].into_iter().collect();
        assert_eq!(map.get("y"), Some(&false));
        assert_eq!(map.get("z"), None);

        let owned: Vec<(String, bool)> = map.into_iter().collect();
        assert_eq!(owned[0], ("x".to_string(), true));
    }

    #[test]
    fn test_empty() {
        let map: OrderedMap<u8> = serde_json::from_str("{}").expect("Failed to parse");
        assert!(map.is_empty());
        assert_eq!(OrderedMap::<u8>::default(), map);
    }

    #[test]
    fn test_rejects_scalar() {
        assert!(serde_json::from_str::<OrderedMap<u8>>("42").is_err());
    }
}

//! Parameter store: the generic payload container of every message.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};
use crate::value::Value;

/// Mapping from parameter keys to values.
///
/// Keys are unique. Iteration follows insertion order; overwriting a key
/// keeps its position and removing one keeps the order of the rest.
/// Equality compares key/value pairs and ignores order.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    entries: Vec<(String, Value)>,
}

impl ParameterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns the value under `key`, `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Mutable access to the value under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Strict read: an unset key is an error instead of `None`.
    pub fn require(&self, key: &str) -> CoreResult<&Value> {
        self.get(key).ok_or_else(|| CoreError::unset(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Returns true if `key` holds a value (including `Null`).
    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Removes `key`, returning whether a value was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    /// Number of keys set, including those holding `Null`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Converts into a JSON object with the same key order.
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect()
    }
}

impl PartialEq for ParameterStore {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for ParameterStore {}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}

impl IntoIterator for ParameterStore {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for ParameterStore {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }
}

impl Serialize for ParameterStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParameterStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Map::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unset_is_not_null() {
        let mut store = ParameterStore::new();
        assert_eq!(store.get("cancelID"), None);
        assert!(!store.has("cancelID"));

        store.set("cancelID", Value::Null);
        assert_eq!(store.get("cancelID"), Some(&Value::Null));
        assert!(store.has("cancelID"));
    }

    #[test]
    fn set_is_fluent_and_overwrites_in_place() {
        let mut store = ParameterStore::new();
        store.set("a", 1).set("b", 2).set("a", "one");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some(&Value::from("one")));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut store: ParameterStore = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert!(store.remove("b"));
        assert!(!store.remove("b"));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn require_reports_unset_key() {
        let store = ParameterStore::new();
        assert_eq!(store.require("timeout"), Err(CoreError::unset("timeout")));
    }

    #[test]
    fn equality_ignores_order() {
        let left: ParameterStore = [("a", 1), ("b", 2)].into_iter().collect();
        let right: ParameterStore = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(left, right);

        let other: ParameterStore = [("a", 1), ("b", 3)].into_iter().collect();
        assert_ne!(left, other);
    }

    #[test]
    fn deep_equality_of_nested_stores() {
        let mut inner = ParameterStore::new();
        inner.set("x", true);
        let mut left = ParameterStore::new();
        left.set("inner", inner.clone());
        let mut right = ParameterStore::new();
        right.set("inner", inner);
        assert_eq!(left, right);

        right
            .get_mut("inner")
            .and_then(|v| match v {
                Value::Store(s) => Some(s),
                _ => None,
            })
            .unwrap()
            .set("x", false);
        assert_ne!(left, right);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut store = ParameterStore::new();
        store.set("zeta", 1).set("alpha", 2);
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);

        let parsed: ParameterStore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store);
        assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn json_objects_keep_key_order() {
        let store = ParameterStore::from(
            serde_json::json!({"zeta": 1, "alpha": 2})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);

        let map = store.to_json_map();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
            proptest::collection::vec(any::<u8>(), 0..8).prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                proptest::collection::vec(("[a-z]{1,4}", inner), 0..4)
                    .prop_map(|pairs| Value::Store(pairs.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn set_then_get_returns_value(key in "[a-zA-Z]{1,12}", value in arb_value()) {
            let mut store = ParameterStore::new();
            store.set(key.clone(), value.clone());
            prop_assert_eq!(store.get(&key), Some(&value));
        }

        #[test]
        fn never_set_key_is_unset(keys in proptest::collection::vec("[a-z]{1,6}", 0..6), probe in "[A-Z]{1,6}") {
            let store: ParameterStore = keys.into_iter().map(|k| (k, Value::Null)).collect();
            prop_assert_eq!(store.get(&probe), None);
        }
    }
}

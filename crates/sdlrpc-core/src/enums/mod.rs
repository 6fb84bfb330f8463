//! Enum tables: closed value sets with key/value lookup in both directions.
//!
//! A table maps a symbolic key (e.g. `SamplingRate_8KHZ`) to its canonical
//! protocol value (e.g. `"8KHZ"`). Misses return `None` so callers can probe
//! unknown values coming from newer protocol versions.

mod tables;

pub use tables::{
    AUDIO_STREAMING_STATE, AUDIO_TYPE, BITS_PER_SAMPLE, FUNCTION_ID, HMI_LEVEL, RESULT,
    SAMPLING_RATE, STRING_TABLE_NAMES, SYSTEM_CONTEXT, string_table,
};

use crate::error::{CoreError, CoreResult};

/// Immutable, injective key → value mapping with its inverse.
#[derive(Debug, Clone, Copy)]
pub struct EnumTable<V: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, V)],
}

impl<V: PartialEq + 'static> EnumTable<V> {
    /// Creates a table.
    ///
    /// Duplicate keys or values are a programming error and trip a debug
    /// assertion; use [`EnumTable::try_new`] for tables built at runtime.
    pub fn new(name: &'static str, entries: &'static [(&'static str, V)]) -> Self {
        debug_assert!(
            Self::check(name, entries).is_ok(),
            "enum table `{name}` is not injective"
        );
        Self { name, entries }
    }

    /// Creates a table, rejecting duplicate keys or values.
    pub fn try_new(name: &'static str, entries: &'static [(&'static str, V)]) -> CoreResult<Self> {
        Self::check(name, entries)?;
        Ok(Self { name, entries })
    }

    fn check(name: &'static str, entries: &'static [(&'static str, V)]) -> CoreResult<()> {
        for (index, (key, value)) in entries.iter().enumerate() {
            for (other_key, other_value) in &entries[index + 1..] {
                if key == other_key {
                    return Err(CoreError::DuplicateEnumKey { table: name, key: *key });
                }
                if value == other_value {
                    return Err(CoreError::DuplicateEnumValue {
                        table: name,
                        first: *key,
                        second: *other_key,
                    });
                }
            }
        }
        Ok(())
    }

    /// Name of the value set, e.g. `"SamplingRate"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the canonical value for a symbolic key.
    pub fn value_for_key(&self, key: &str) -> Option<&'static V> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v))
    }

    /// Returns the symbolic key for a canonical value.
    pub fn key_for_value(&self, value: &V) -> Option<&'static str> {
        self.entries
            .iter()
            .find_map(|(k, v)| (v == value).then_some(*k))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.value_for_key(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.key_for_value(value).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Iterates over `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnumTable<&'static str> {
    /// Returns true if `value` is one of the table's canonical strings.
    pub fn contains_str(&self, value: &str) -> bool {
        self.entries.iter().any(|(_, v)| *v == value)
    }
}

//! Parameter values.
//!
//! [`Value`] is the payload type of a [`ParameterStore`]: scalars, byte
//! sequences, nested stores, and ordered sequences. [`ParamValue`] maps Rust
//! types onto it for the typed accessors built on top.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::store::ParameterStore;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Explicit null, distinct from an unset parameter.
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Raw bytes held inside the parameter tree.
    Bytes(Vec<u8>),
    /// A nested store (struct-valued parameter).
    Store(ParameterStore),
    Array(Vec<Value>),
}

/// The kind of a [`Value`], used in schemas and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Bytes,
    Store,
    Array,
    /// Any kind is accepted.
    Any,
}

impl ValueKind {
    /// Lowercase name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Store => "store",
            Self::Array => "array",
            Self::Any => "any",
        }
    }

    /// Returns true if a value of kind `found` satisfies this kind.
    pub fn accepts(self, found: ValueKind) -> bool {
        self == Self::Any || self == found
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Store(_) => ValueKind::Store,
            Self::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_store(&self) -> Option<&ParameterStore> {
        match self {
            Self::Store(store) => Some(store),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the bytes of a `Bytes` value, or of an array whose items are
    /// all numbers in `0..=255` (the shape bytes take after a JSON trip).
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes.clone()),
            Self::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u8, u16, u32, u64);

impl From<f64> for Value {
    /// Non-finite floats have no number representation and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<ParameterStore> for Value {
    fn from(value: ParameterStore) -> Self {
        Self::Store(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::Array(value.into_iter().map(Self::String).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Store(ParameterStore::from(map)),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::String(s.clone()),
            Value::Bytes(bytes) => Self::Array(
                bytes
                    .iter()
                    .map(|b| Self::Number(Number::from(*b)))
                    .collect(),
            ),
            Value::Store(store) => Self::Object(store.to_json_map()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Bytes(bytes) => serializer.collect_seq(bytes),
            Self::Store(store) => store.serialize(serializer),
            Self::Array(items) => serializer.collect_seq(items),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

/// A Rust type that can be read from and written to a [`Value`].
///
/// `KIND` is the value kind the type is stored as; `ELEMENT` is the item
/// kind for sequence types.
pub trait ParamValue: Sized {
    const KIND: ValueKind;
    const ELEMENT: Option<ValueKind> = None;

    /// Reads the type out of a value, `None` on a kind mismatch.
    fn from_value(value: &Value) -> Option<Self>;

    /// Converts into a storable value.
    fn into_value(self) -> Value;
}

impl ParamValue for Value {
    const KIND: ValueKind = ValueKind::Any;

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn into_value(self) -> Value {
        self
    }
}

impl ParamValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ParamValue for i64 {
    const KIND: ValueKind = ValueKind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl ParamValue for u32 {
    const KIND: ValueKind = ValueKind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|n| u32::try_from(n).ok())
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl ParamValue for u64 {
    const KIND: ValueKind = ValueKind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl ParamValue for f64 {
    const KIND: ValueKind = ValueKind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl ParamValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl ParamValue for Vec<u8> {
    const KIND: ValueKind = ValueKind::Bytes;

    fn from_value(value: &Value) -> Option<Self> {
        value.to_bytes()
    }

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

impl ParamValue for ParameterStore {
    const KIND: ValueKind = ValueKind::Store;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_store().cloned()
    }

    fn into_value(self) -> Value {
        Value::Store(self)
    }
}

macro_rules! impl_param_array {
    ($($ty:ty => $element:expr),*) => {
        $(
            impl ParamValue for Vec<$ty> {
                const KIND: ValueKind = ValueKind::Array;
                const ELEMENT: Option<ValueKind> = Some($element);

                fn from_value(value: &Value) -> Option<Self> {
                    value
                        .as_array()?
                        .iter()
                        .map(<$ty as ParamValue>::from_value)
                        .collect()
                }

                fn into_value(self) -> Value {
                    Value::Array(self.into_iter().map(ParamValue::into_value).collect())
                }
            }
        )*
    };
}

impl_param_array!(
    String => ValueKind::String,
    u32 => ValueKind::Number,
    i64 => ValueKind::Number,
    ParameterStore => ValueKind::Store
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(5).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(vec![1u8, 2]).kind(), ValueKind::Bytes);
        assert!(ValueKind::Any.accepts(ValueKind::Store));
        assert!(!ValueKind::Number.accepts(ValueKind::String));
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
    }

    #[test]
    fn optional_values() {
        assert_eq!(Value::from(None::<u32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn json_conversion_nested() {
        let json = json!({
            "numTicks": 5,
            "sliderFooter": ["min", "max"],
            "nested": { "flag": true, "nothing": null }
        });
        let value = Value::from(json.clone());
        let store = value.as_store().unwrap();
        assert_eq!(store.get("numTicks"), Some(&Value::from(5)));
        assert_eq!(
            store.get("sliderFooter"),
            Some(&Value::from(vec!["min".to_string(), "max".to_string()]))
        );
        let nested = store.get("nested").and_then(Value::as_store).unwrap();
        assert_eq!(nested.get("nothing"), Some(&Value::Null));

        assert_eq!(serde_json::Value::from(&value), json);
    }

    #[test]
    fn bytes_encode_as_number_arrays() {
        let value = Value::from(vec![0u8, 127, 255]);
        assert_eq!(serde_json::Value::from(&value), json!([0, 127, 255]));

        let back = Value::from(json!([0, 127, 255]));
        assert_eq!(back.to_bytes(), Some(vec![0, 127, 255]));
        assert_eq!(Value::from(json!([256])).to_bytes(), None);
    }

    #[test]
    fn param_value_reads() {
        assert_eq!(u32::from_value(&Value::from(8000)), Some(8000));
        assert_eq!(u32::from_value(&Value::from(-1)), None);
        assert_eq!(u32::from_value(&Value::from("8000")), None);
        assert_eq!(String::from_value(&Value::from("hi")), Some("hi".to_string()));
        assert_eq!(bool::from_value(&Value::from(false)), Some(false));
        assert_eq!(
            Vec::<String>::from_value(&Value::from(vec!["a".to_string()])),
            Some(vec!["a".to_string()])
        );
        assert_eq!(
            Vec::<String>::from_value(&Value::Array(vec![Value::from(1)])),
            None
        );
        assert_eq!(<Vec<u32> as ParamValue>::ELEMENT, Some(ValueKind::Number));
    }

    #[test]
    fn serde_roundtrip_through_json_text() {
        let value = Value::from(json!({"a": [1, "two", null], "b": {"c": 1.5}}));
        let text = serde_json::to_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }
}

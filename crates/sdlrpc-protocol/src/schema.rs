//! Declarative message schemas.
//!
//! A message schema is a table of [`ParamSpec`]s. Typed access goes through
//! [`Param<T>`] constants, which pair a spec with the Rust type its value is
//! read as, so every message shares one accessor implementation instead of
//! carrying its own getters and setters.
//!
//! ```rust
//! use sdlrpc_protocol::{MessageType, Param, Schema};
//!
//! const VOLUME: Param<u32> = Param::required("volume");
//! static SET_VOLUME: Schema = Schema {
//!     function: "SetVolume",
//!     message_type: MessageType::Request,
//!     params: &[VOLUME.spec()],
//! };
//!
//! assert!(SET_VOLUME.param("volume").is_some_and(|p| p.required));
//! ```

use std::fmt;
use std::marker::PhantomData;

use sdlrpc_core::{ParamValue, ParameterStore, Value, ValueKind, string_table};

use crate::catalog::Violation;
use crate::message::MessageType;

/// Declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Scalar(ValueKind),
    /// A sequence whose items all have the given kind.
    ArrayOf(ValueKind),
    /// A string drawn from the named enum table.
    Enum(&'static str),
}

impl ParamType {
    /// The declared type of a Rust parameter type.
    pub const fn of<T: ParamValue>() -> Self {
        match T::ELEMENT {
            Some(element) => Self::ArrayOf(element),
            None => Self::Scalar(T::KIND),
        }
    }

    /// Kind of the value as stored in the parameter store.
    pub fn stored_kind(self) -> ValueKind {
        match self {
            Self::Scalar(kind) => kind,
            Self::ArrayOf(_) => ValueKind::Array,
            Self::Enum(_) => ValueKind::String,
        }
    }

    /// Returns true if `value` has the declared shape.
    ///
    /// Enum membership is not part of this check.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Scalar(ValueKind::Bytes) => value.to_bytes().is_some(),
            Self::Scalar(kind) => kind.accepts(value.kind()),
            Self::ArrayOf(element) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| element.accepts(item.kind()))),
            Self::Enum(_) => value.as_str().is_some(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::ArrayOf(kind) => write!(f, "array of {kind}"),
            Self::Enum(table) => write!(f, "{table}"),
        }
    }
}

/// One declared parameter of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as it appears in the store, e.g. `"numTicks"`.
    pub key: &'static str,
    /// Declared type the value is checked against.
    pub ty: ParamType,
    /// Required for a well-formed message. Never enforced on set or get.
    pub required: bool,
}

/// A typed parameter key.
///
/// `T` is the Rust type values are read as; the spec is what schemas and
/// the catalog see.
pub struct Param<T> {
    spec: ParamSpec,
    _type: PhantomData<fn() -> T>,
}

impl<T: ParamValue> Param<T> {
    /// Declares a parameter a well-formed message must carry.
    pub const fn required(key: &'static str) -> Self {
        Self::declare(key, ParamType::of::<T>(), true)
    }

    /// Declares a parameter that may be absent.
    pub const fn optional(key: &'static str) -> Self {
        Self::declare(key, ParamType::of::<T>(), false)
    }
}

impl Param<String> {
    /// A string parameter restricted to the values of the named enum table.
    pub const fn enumerated(key: &'static str, table: &'static str, required: bool) -> Self {
        Self::declare(key, ParamType::Enum(table), required)
    }
}

impl<T> Param<T> {
    const fn declare(key: &'static str, ty: ParamType, required: bool) -> Self {
        Self {
            spec: ParamSpec { key, ty, required },
            _type: PhantomData,
        }
    }

    /// The store key.
    pub const fn key(&self) -> &'static str {
        self.spec.key
    }

    /// The declaration, for use in [`Schema::params`].
    pub const fn spec(&self) -> ParamSpec {
        self.spec
    }
}

impl<T> Clone for Param<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Param<T> {}

impl<T> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Param").field(&self.spec).finish()
    }
}

/// Declaration of one message: its function, kind, and parameters.
#[derive(Debug)]
pub struct Schema {
    /// Function name, as in the `FunctionID` table.
    pub function: &'static str,
    /// Kind of message this schema declares.
    pub message_type: MessageType,
    /// Declared parameters. Undeclared keys are still allowed on messages.
    pub params: &'static [ParamSpec],
}

impl Schema {
    /// The declaration of `key`, if any.
    pub fn param(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|spec| spec.key == key)
    }

    /// Keys of the required parameters, in declaration order.
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.key)
    }

    /// Turns declared byte parameters that hold number arrays back into
    /// [`Value::Bytes`].
    ///
    /// JSON has no byte type, so bytes travel as arrays of numbers. Arrays
    /// with an item outside `0..=255` are left as they are.
    pub fn restore_bytes(&self, store: &mut ParameterStore) {
        for spec in self.params {
            if spec.ty != ParamType::Scalar(ValueKind::Bytes) {
                continue;
            }
            let Some(value) = store.get_mut(spec.key) else {
                continue;
            };
            if !matches!(value, Value::Array(_)) {
                continue;
            }
            if let Some(bytes) = value.to_bytes() {
                *value = Value::Bytes(bytes);
            }
        }
    }

    /// Lists how `store` departs from this schema.
    ///
    /// Undeclared keys are not reported.
    pub fn check_params(&self, store: &ParameterStore) -> Vec<Violation> {
        let mut violations = Vec::new();
        for spec in self.params {
            let Some(value) = store.get(spec.key) else {
                if spec.required {
                    violations.push(Violation::MissingRequired { key: spec.key });
                }
                continue;
            };
            if !spec.ty.matches(value) {
                violations.push(Violation::KindMismatch {
                    key: spec.key,
                    expected: spec.ty,
                    found: value.kind(),
                });
                continue;
            }
            if let (ParamType::Enum(table), Some(text)) = (spec.ty, value.as_str()) {
                let known = string_table(table).is_none_or(|t| t.contains_str(text));
                if !known {
                    violations.push(Violation::UnknownEnumValue {
                        key: spec.key,
                        table,
                        value: text.to_string(),
                    });
                }
            }
        }
        violations
    }
}

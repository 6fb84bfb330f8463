//! The structured envelope: a parameter store read through typed keys.

use sdlrpc_core::{CoreError, CoreResult, ParamValue, ParameterStore, Value};

use crate::schema::Param;

/// Exclusive owner of one [`ParameterStore`], with typed access.
///
/// Typed access is driven by [`Param<T>`] keys. A parameter holding a value
/// of another kind reads as unset through [`RpcStruct::get`]; the strict
/// [`RpcStruct::require`] reports it instead. Undeclared keys can be set and
/// read through the untyped accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcStruct {
    parameters: ParameterStore,
}

impl RpcStruct {
    /// Creates an envelope with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying store.
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Mutable access to the underlying store, bypassing typed keys.
    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }

    /// Consumes the envelope, returning its store.
    pub fn into_parameters(self) -> ParameterStore {
        self.parameters
    }

    /// Reads a declared parameter; unset and wrong-kind values are `None`.
    pub fn get<T: ParamValue>(&self, param: &Param<T>) -> Option<T> {
        self.parameters.get(param.key()).and_then(T::from_value)
    }

    /// Strict read: fails when the parameter is unset or of another kind.
    pub fn require<T: ParamValue>(&self, param: &Param<T>) -> CoreResult<T> {
        let value = self.parameters.require(param.key())?;
        T::from_value(value).ok_or_else(|| CoreError::KindMismatch {
            key: param.key().to_string(),
            expected: param.spec().ty.stored_kind(),
            found: value.kind(),
        })
    }

    /// Stores a declared parameter, replacing any previous value.
    pub fn set<T: ParamValue>(&mut self, param: &Param<T>, value: T) -> &mut Self {
        self.parameters.set(param.key(), value.into_value());
        self
    }

    /// Sets the parameter, or removes it on `None`.
    pub fn set_optional<T: ParamValue>(&mut self, param: &Param<T>, value: Option<T>) -> &mut Self {
        match value {
            Some(value) => self.set(param, value),
            None => {
                self.parameters.remove(param.key());
                self
            }
        }
    }

    /// Removes the parameter, returning whether it was set.
    pub fn clear<T>(&mut self, param: &Param<T>) -> bool {
        self.parameters.remove(param.key())
    }

    /// Reads any parameter by key, declared or not.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Stores any value under `key` without a declaration.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.parameters.set(key, value);
        self
    }

    /// Removes `key`, returning whether it was set.
    pub fn remove_parameter(&mut self, key: &str) -> bool {
        self.parameters.remove(key)
    }
}

impl From<ParameterStore> for RpcStruct {
    fn from(parameters: ParameterStore) -> Self {
        Self { parameters }
    }
}

impl TryFrom<Value> for RpcStruct {
    type Error = CoreError;

    /// Builds an envelope from a store value. Null yields an empty envelope;
    /// any other non-mapping value is malformed.
    fn try_from(value: Value) -> CoreResult<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Store(parameters) => Ok(Self { parameters }),
            other => Err(CoreError::malformed(format!(
                "parameters must be a mapping, got {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for RpcStruct {
    type Error = CoreError;

    fn try_from(value: serde_json::Value) -> CoreResult<Self> {
        Self::try_from(Value::from(value))
    }
}

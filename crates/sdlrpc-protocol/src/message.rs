//! The RPC message: a parameter envelope plus protocol metadata.

use std::fmt;

use sdlrpc_core::{CoreResult, FUNCTION_ID, ParamValue, Value};
use serde::{Deserialize, Serialize};

use crate::rpc_struct::RpcStruct;
use crate::schema::Param;

/// Kind of an RPC message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Expects a response carrying the same correlation id.
    Request,
    Response,
    /// Fire-and-forget, never correlated.
    Notification,
}

impl MessageType {
    /// Name used in the record form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Response => "Response",
            Self::Notification => "Notification",
        }
    }

    /// Returns true for the kinds that carry a correlation id.
    pub fn is_correlated(self) -> bool {
        !matches!(self, Self::Notification)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the remote operation a message invokes.
///
/// Either the symbolic name (`"Slider"`) or the numeric function code
/// (`0x1A`). Codes are resolved to names through [`FUNCTION_ID`] when they
/// are stored on a message; unknown codes stay codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionId {
    /// Symbolic name, known to the function table or not.
    Name(String),
    /// Numeric code. Messages keep a code only when it does not resolve.
    Code(u32),
}

impl FunctionId {
    /// Converts a known code into its name. Names and unknown codes are
    /// returned unchanged.
    pub fn resolve(self) -> Self {
        match self {
            Self::Code(code) => FUNCTION_ID
                .key_for_value(&code)
                .map_or(Self::Code(code), |name| Self::Name(name.to_string())),
            name => name,
        }
    }

    /// The symbolic name, if this id is one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Code(_) => None,
        }
    }

    /// The numeric code, looked up for names.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Name(name) => FUNCTION_ID.value_for_key(name).copied(),
            Self::Code(code) => Some(*code),
        }
    }

    /// Returns true if the function table knows this id.
    pub fn is_known(&self) -> bool {
        match self {
            Self::Name(name) => FUNCTION_ID.contains_key(name),
            Self::Code(code) => FUNCTION_ID.contains_value(code),
        }
    }
}

impl From<&str> for FunctionId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FunctionId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u32> for FunctionId {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Code(code) => write!(f, "{code:#06x}"),
        }
    }
}

/// Opaque token matching a response to its request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrelationId {
    /// Sequence number, the usual form.
    Number(u64),
    Text(String),
}

impl From<&str> for CorrelationId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for CorrelationId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<u64> for CorrelationId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<u32> for CorrelationId {
    fn from(id: u32) -> Self {
        Self::Number(u64::from(id))
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// An RPC message, owned in memory until handed to a transport.
///
/// No setter fails. Required parameters, function id legality, and
/// correlation pairing are checked (if at all) by the layers that build and
/// send messages, see [`crate::SchemaCatalog::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcMessage {
    message_type: MessageType,
    function_id: Option<FunctionId>,
    correlation_id: Option<CorrelationId>,
    bulk_data: Option<Vec<u8>>,
    payload_protected: bool,
    params: RpcStruct,
}

impl RpcMessage {
    /// Creates an empty message of the given kind.
    pub fn new(message_type: MessageType) -> Self {
        Self::with_params(message_type, RpcStruct::new())
    }

    /// Creates a message around existing parameters.
    pub fn with_params(message_type: MessageType, params: RpcStruct) -> Self {
        Self {
            message_type,
            function_id: None,
            correlation_id: None,
            bulk_data: None,
            payload_protected: false,
            params,
        }
    }

    /// Request, response, or notification.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Changes the kind. Callers set this once; it is not guarded.
    pub fn set_message_type(&mut self, message_type: MessageType) -> &mut Self {
        self.message_type = message_type;
        self
    }

    /// The function id as stored: a name, or an unresolved code.
    pub fn function_id(&self) -> Option<&FunctionId> {
        self.function_id.as_ref()
    }

    /// The symbolic function name, if set and resolved.
    pub fn function_name(&self) -> Option<&str> {
        self.function_id.as_ref().and_then(FunctionId::name)
    }

    /// Sets the function id, resolving numeric codes to names.
    ///
    /// An unknown code is kept as a code and reported with a `warn` event.
    pub fn set_function_id(&mut self, function_id: impl Into<FunctionId>) -> &mut Self {
        if let FunctionId::Code(code) = self.assign_function_id(function_id.into()) {
            tracing::warn!(code = *code, "unknown function code, keeping raw value");
        }
        self
    }

    /// Resolves and stores the id without logging.
    pub(crate) fn assign_function_id(&mut self, function_id: FunctionId) -> &FunctionId {
        self.function_id.insert(function_id.resolve())
    }

    /// The correlation id. Always `None` for notifications.
    pub fn correlation_id(&self) -> Option<&CorrelationId> {
        if self.message_type.is_correlated() {
            self.correlation_id.as_ref()
        } else {
            None
        }
    }

    /// Sets the correlation id. Notifications keep it hidden.
    pub fn set_correlation_id(&mut self, correlation_id: impl Into<CorrelationId>) -> &mut Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Removes the correlation id.
    pub fn clear_correlation_id(&mut self) -> &mut Self {
        self.correlation_id = None;
        self
    }

    /// Out-of-band binary payload.
    ///
    /// This is the message's own copy; do not mutate it in place.
    pub fn bulk_data(&self) -> Option<&[u8]> {
        self.bulk_data.as_deref()
    }

    /// Stores a copy of `data`, or clears bulk data on `None`.
    ///
    /// `Some(&[])` keeps an empty payload, which is not the same as none.
    pub fn set_bulk_data(&mut self, data: Option<&[u8]>) -> &mut Self {
        self.bulk_data = data.map(<[u8]>::to_vec);
        self
    }

    /// Whether the transport must encrypt the parameter payload.
    pub fn is_payload_protected(&self) -> bool {
        self.payload_protected
    }

    /// Marks the parameter payload for encryption by the transport.
    pub fn set_payload_protected(&mut self, protected: bool) -> &mut Self {
        self.payload_protected = protected;
        self
    }

    /// The parameter envelope.
    pub fn params(&self) -> &RpcStruct {
        &self.params
    }

    /// Mutable access to the parameter envelope.
    pub fn params_mut(&mut self) -> &mut RpcStruct {
        &mut self.params
    }

    /// Consumes the message, returning its parameters.
    pub fn into_params(self) -> RpcStruct {
        self.params
    }

    /// Reads a declared parameter, `None` when unset.
    pub fn get<T: ParamValue>(&self, param: &Param<T>) -> Option<T> {
        self.params.get(param)
    }

    /// Strict read of a declared parameter.
    pub fn require<T: ParamValue>(&self, param: &Param<T>) -> CoreResult<T> {
        self.params.require(param)
    }

    /// Stores a declared parameter.
    pub fn set<T: ParamValue>(&mut self, param: &Param<T>, value: T) -> &mut Self {
        self.params.set(param, value);
        self
    }

    /// Removes a declared parameter, returning whether it was set.
    pub fn clear<T>(&mut self, param: &Param<T>) -> bool {
        self.params.clear(param)
    }

    /// Reads any parameter by key, declared or not.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.params.parameter(key)
    }

    /// Stores any value under `key`, declared or not.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.set_parameter(key, value);
        self
    }
}

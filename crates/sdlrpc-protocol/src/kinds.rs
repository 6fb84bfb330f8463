//! Request, response, and notification specializations of [`RpcMessage`].

use std::ops::{Deref, DerefMut};

use sdlrpc_core::{ParamValue, Value};

use crate::message::{CorrelationId, FunctionId, MessageType, RpcMessage};
use crate::schema::{Param, Schema};

/// A request: function id plus the correlation id its response will echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcRequest(RpcMessage);

impl RpcRequest {
    pub fn new(function: impl Into<FunctionId>, correlation_id: impl Into<CorrelationId>) -> Self {
        let mut message = RpcMessage::new(MessageType::Request);
        message
            .set_function_id(function)
            .set_correlation_id(correlation_id);
        Self(message)
    }

    /// Creates a request for the function a schema declares.
    pub fn for_schema(schema: &Schema, correlation_id: impl Into<CorrelationId>) -> Self {
        Self::new(schema.function, correlation_id)
    }

    pub fn into_message(self) -> RpcMessage {
        self.0
    }
}

impl Deref for RpcRequest {
    type Target = RpcMessage;

    fn deref(&self) -> &RpcMessage {
        &self.0
    }
}

impl DerefMut for RpcRequest {
    fn deref_mut(&mut self) -> &mut RpcMessage {
        &mut self.0
    }
}

/// A response. Success and result code are ordinary declared parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcResponse(RpcMessage);

impl RpcResponse {
    pub const SUCCESS: Param<bool> = Param::required("success");
    pub const RESULT_CODE: Param<String> = Param::enumerated("resultCode", "Result", true);
    pub const INFO: Param<String> = Param::optional("info");

    pub fn new(function: impl Into<FunctionId>, correlation_id: impl Into<CorrelationId>) -> Self {
        let mut message = RpcMessage::new(MessageType::Response);
        message
            .set_function_id(function)
            .set_correlation_id(correlation_id);
        Self(message)
    }

    /// Creates a response carrying the request's function and correlation id.
    pub fn for_request(request: &RpcRequest) -> Self {
        let mut message = RpcMessage::new(MessageType::Response);
        if let Some(function) = request.function_id() {
            message.set_function_id(function.clone());
        }
        if let Some(correlation_id) = request.correlation_id() {
            message.set_correlation_id(correlation_id.clone());
        }
        Self(message)
    }

    /// Returns true if this response carries the request's correlation id.
    pub fn answers(&self, request: &RpcRequest) -> bool {
        match (self.correlation_id(), request.correlation_id()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }

    pub fn success(&self) -> Option<bool> {
        self.get(&Self::SUCCESS)
    }

    pub fn set_success(&mut self, success: bool) -> &mut Self {
        self.0.set(&Self::SUCCESS, success);
        self
    }

    pub fn result_code(&self) -> Option<String> {
        self.get(&Self::RESULT_CODE)
    }

    pub fn set_result_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.0.set(&Self::RESULT_CODE, code.into());
        self
    }

    pub fn info(&self) -> Option<String> {
        self.get(&Self::INFO)
    }

    pub fn set_info(&mut self, info: impl Into<String>) -> &mut Self {
        self.0.set(&Self::INFO, info.into());
        self
    }

    pub fn into_message(self) -> RpcMessage {
        self.0
    }
}

impl Deref for RpcResponse {
    type Target = RpcMessage;

    fn deref(&self) -> &RpcMessage {
        &self.0
    }
}

impl DerefMut for RpcResponse {
    fn deref_mut(&mut self) -> &mut RpcMessage {
        &mut self.0
    }
}

/// A fire-and-forget notification. It has no correlation id and exposes no
/// way to set one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcNotification(RpcMessage);

impl RpcNotification {
    pub fn new(function: impl Into<FunctionId>) -> Self {
        let mut message = RpcMessage::new(MessageType::Notification);
        message.set_function_id(function);
        Self(message)
    }

    pub fn set_function_id(&mut self, function: impl Into<FunctionId>) -> &mut Self {
        self.0.set_function_id(function);
        self
    }

    pub fn set_bulk_data(&mut self, data: Option<&[u8]>) -> &mut Self {
        self.0.set_bulk_data(data);
        self
    }

    pub fn set_payload_protected(&mut self, protected: bool) -> &mut Self {
        self.0.set_payload_protected(protected);
        self
    }

    pub fn set<T: ParamValue>(&mut self, param: &Param<T>, value: T) -> &mut Self {
        self.0.set(param, value);
        self
    }

    pub fn clear<T>(&mut self, param: &Param<T>) -> bool {
        self.0.clear(param)
    }

    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.set_parameter(key, value);
        self
    }

    pub fn into_message(self) -> RpcMessage {
        self.0
    }
}

impl Deref for RpcNotification {
    type Target = RpcMessage;

    fn deref(&self) -> &RpcMessage {
        &self.0
    }
}

/// A message sorted into its specialization by message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyMessage {
    Request(RpcRequest),
    Response(RpcResponse),
    Notification(RpcNotification),
}

impl AnyMessage {
    pub fn message(&self) -> &RpcMessage {
        match self {
            Self::Request(request) => request,
            Self::Response(response) => response,
            Self::Notification(notification) => notification,
        }
    }

    pub fn message_type(&self) -> MessageType {
        self.message().message_type()
    }

    pub fn into_message(self) -> RpcMessage {
        match self {
            Self::Request(request) => request.into_message(),
            Self::Response(response) => response.into_message(),
            Self::Notification(notification) => notification.into_message(),
        }
    }
}

impl From<RpcMessage> for AnyMessage {
    fn from(mut message: RpcMessage) -> Self {
        match message.message_type() {
            MessageType::Request => Self::Request(RpcRequest(message)),
            MessageType::Response => Self::Response(RpcResponse(message)),
            MessageType::Notification => {
                message.clear_correlation_id();
                Self::Notification(RpcNotification(message))
            }
        }
    }
}

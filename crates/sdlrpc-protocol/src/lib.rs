//! Structured RPC messages for SDL-style head-unit protocols.
//!
//! A message is an envelope of named parameters plus the metadata a
//! transport needs: kind, function id, correlation id, bulk data, and the
//! payload-protected flag. Encoding to bytes is left to the transport.
//!
//! # Typed access
//!
//! Parameters are read and written through [`Param<T>`] constants declared
//! next to each message's [`Schema`]:
//!
//! ```rust
//! use sdlrpc_protocol::messages::slider;
//!
//! let mut request = slider::request("42", 5, 1, "Volume");
//! request.set(&slider::TIMEOUT, 8000);
//!
//! assert_eq!(request.get(&slider::NUM_TICKS), Some(5));
//! assert_eq!(request.get(&slider::CANCEL_ID), None);
//! ```
//!
//! # Record form
//!
//! [`RpcRecord`] is the store object (`messageType`, `functionName`,
//! `correlationID`, `isEncrypted`, `parameters`, `bulkData`) a serializer
//! produces and consumes. Decoding takes a [`ProtocolConfig`] deciding what
//! gets logged.

mod catalog;
mod config;
mod error;
mod kinds;
mod message;
pub mod messages;
mod record;
mod rpc_struct;
mod schema;

#[cfg(test)]
mod scenario_tests;

pub use catalog::{SchemaCatalog, Violation};
pub use config::ProtocolConfig;
pub use error::{ProtocolError, ProtocolResult};
pub use kinds::{AnyMessage, RpcNotification, RpcRequest, RpcResponse};
pub use message::{CorrelationId, FunctionId, MessageType, RpcMessage};
pub use record::RpcRecord;
pub use rpc_struct::RpcStruct;
pub use schema::{Param, ParamSpec, ParamType, Schema};

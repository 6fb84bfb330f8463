//! Core types: parameter values, parameter store, enum tables, tracing.
//!
//! This crate holds the leaf pieces of the sdlrpc message layer. It knows
//! nothing about messages or schemas; `sdlrpc-protocol` builds those on top.

pub mod enums;
pub mod error;
pub mod store;
pub mod tracing;
pub mod value;

pub use enums::{EnumTable, FUNCTION_ID, STRING_TABLE_NAMES, string_table};
pub use error::{CoreError, CoreResult};
pub use store::ParameterStore;
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use value::{ParamValue, Value, ValueKind};

//! Schema catalog: declared messages looked up by function and kind.

use std::collections::HashMap;
use std::fmt;

use sdlrpc_core::ValueKind;

use crate::message::{MessageType, RpcMessage};
use crate::messages;
use crate::schema::{ParamType, Schema};

/// A way a message departs from its declared schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The message has no function id to look a schema up by.
    MissingFunction,
    /// No schema is registered for the message's function.
    UnknownFunction {
        /// Name, or hex code when unresolved.
        function: String,
    },
    /// The function is declared, but not for this message type.
    WrongMessageType {
        function: String,
        found: MessageType,
    },
    /// A required parameter is unset.
    MissingRequired { key: &'static str },
    /// A parameter holds a value of another shape than declared.
    KindMismatch {
        key: &'static str,
        expected: ParamType,
        found: ValueKind,
    },
    /// An enum-typed parameter holds a string outside its table.
    UnknownEnumValue {
        key: &'static str,
        /// Name of the enum table, e.g. `"SamplingRate"`.
        table: &'static str,
        value: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFunction => f.write_str("message has no function id"),
            Self::UnknownFunction { function } => write!(f, "unknown function `{function}`"),
            Self::WrongMessageType { function, found } => {
                write!(f, "`{function}` is not declared as a {found}")
            }
            Self::MissingRequired { key } => write!(f, "missing required parameter `{key}`"),
            Self::KindMismatch {
                key,
                expected,
                found,
            } => write!(f, "parameter `{key}` holds {found}, expected {expected}"),
            Self::UnknownEnumValue { key, table, value } => {
                write!(f, "parameter `{key}` has unknown {table} value `{value}`")
            }
        }
    }
}

/// Registered message schemas.
///
/// The catalog is advisory: [`SchemaCatalog::check`] reports problems but
/// never changes or rejects a message, and messages without a schema stay
/// fully usable.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: HashMap<(&'static str, MessageType), &'static Schema>,
}

impl SchemaCatalog {
    /// A catalog with no schemas.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog with every schema shipped in [`crate::messages`].
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for &schema in messages::BUILTIN {
            catalog.register(schema);
        }
        catalog
    }

    /// Adds a schema, replacing any previous one for the same function and
    /// message type.
    pub fn register(&mut self, schema: &'static Schema) -> &mut Self {
        self.schemas
            .insert((schema.function, schema.message_type), schema);
        self
    }

    /// The schema declared for `function` as the given kind of message.
    pub fn get(&self, function: &str, message_type: MessageType) -> Option<&'static Schema> {
        let schemas: &HashMap<(&str, MessageType), &'static Schema> = &self.schemas;
        schemas.get(&(function, message_type)).copied()
    }

    /// The schema declared for a message's function and kind.
    pub fn schema_for(&self, message: &RpcMessage) -> Option<&'static Schema> {
        self.get(message.function_name()?, message.message_type())
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Lists how `message` departs from its declared schema.
    pub fn check(&self, message: &RpcMessage) -> Vec<Violation> {
        let Some(function) = message.function_id().map(ToString::to_string) else {
            return vec![Violation::MissingFunction];
        };
        if let Some(schema) = self.schema_for(message) {
            return schema.check_params(message.params().parameters());
        }
        let declared = self.schemas.keys().any(|(name, _)| *name == function);
        if declared {
            vec![Violation::WrongMessageType {
                function,
                found: message.message_type(),
            }]
        } else {
            vec![Violation::UnknownFunction { function }]
        }
    }
}

//! Record form of a message.
//!
//! A record is the store object messages are built from and flattened to:
//!
//! ```json
//! {
//!   "messageType": "Request",
//!   "functionName": "Slider",
//!   "correlationID": "42",
//!   "isEncrypted": false,
//!   "parameters": { "numTicks": 5 },
//!   "bulkData": [1, 2, 3]
//! }
//! ```
//!
//! It is what a serializer hands over and receives back, not a wire format.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProtocolConfig;
use crate::error::ProtocolResult;
use crate::kinds::AnyMessage;
use crate::message::{CorrelationId, FunctionId, MessageType, RpcMessage};
use crate::rpc_struct::RpcStruct;

/// Store-shaped view of an [`RpcMessage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcRecord {
    pub message_type: MessageType,

    /// Name or numeric function code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<FunctionId>,

    #[serde(
        rename = "correlationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correlation_id: Option<CorrelationId>,

    /// Carries the payload-protected flag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_encrypted: bool,

    /// Must be an object; absent or null means no parameters.
    #[serde(default)]
    pub parameters: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_data: Option<Vec<u8>>,
}

impl RpcRecord {
    /// Builds the message this record describes.
    ///
    /// Fails only when `parameters` is present and not an object. Unknown
    /// functions and schema violations are logged, never rejected.
    ///
    /// Parameters the catalog declares as bytes come back as
    /// [`Value::Bytes`](sdlrpc_core::Value::Bytes); undeclared byte
    /// parameters stay arrays of numbers.
    pub fn into_message(self, config: &ProtocolConfig) -> ProtocolResult<RpcMessage> {
        let params = RpcStruct::try_from(self.parameters)?;
        let mut message = RpcMessage::with_params(self.message_type, params);

        if let Some(function) = self.function_name {
            let function = message.assign_function_id(function);
            if config.warn_unknown_functions && !function.is_known() {
                warn!(function = %function, "record names an unknown function");
            }
        }
        if let Some(schema) = config.catalog.schema_for(&message) {
            schema.restore_bytes(message.params_mut().parameters_mut());
        }
        if let Some(correlation_id) = self.correlation_id {
            if self.message_type.is_correlated() {
                message.set_correlation_id(correlation_id);
            } else {
                debug!(%correlation_id, "dropping correlation id of a notification");
            }
        }
        message
            .set_bulk_data(self.bulk_data.as_deref())
            .set_payload_protected(self.is_encrypted);

        if config.check_schemas {
            for violation in config.catalog.check(&message) {
                debug!(
                    function = ?message.function_id(),
                    message_type = %self.message_type,
                    %violation,
                    "schema violation"
                );
            }
        }

        debug!(
            message_type = %self.message_type,
            parameters = message.params().parameters().len(),
            "decoded record"
        );
        Ok(message)
    }
}

impl From<&RpcMessage> for RpcRecord {
    fn from(message: &RpcMessage) -> Self {
        Self {
            message_type: message.message_type(),
            function_name: message.function_id().cloned(),
            correlation_id: message.correlation_id().cloned(),
            is_encrypted: message.is_payload_protected(),
            parameters: serde_json::Value::Object(message.params().parameters().to_json_map()),
            bulk_data: message.bulk_data().map(<[u8]>::to_vec),
        }
    }
}

impl RpcMessage {
    /// Flattens the message to its record form.
    pub fn to_json_value(&self) -> ProtocolResult<serde_json::Value> {
        Ok(serde_json::to_value(RpcRecord::from(self))?)
    }

    /// Rebuilds a message from its record form.
    pub fn from_json_value(
        value: serde_json::Value,
        config: &ProtocolConfig,
    ) -> ProtocolResult<Self> {
        let record: RpcRecord = serde_json::from_value(value)?;
        record.into_message(config)
    }
}

impl AnyMessage {
    /// Rebuilds a message from its record form and sorts it by kind.
    pub fn from_json_value(
        value: serde_json::Value,
        config: &ProtocolConfig,
    ) -> ProtocolResult<Self> {
        RpcMessage::from_json_value(value, config).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::kinds::{RpcNotification, RpcRequest};
    use crate::messages::slider;
    use crate::schema::{Param, Schema};
    use sdlrpc_core::Value;
    use serde_json::json;

    const FIRMWARE: Param<Vec<u8>> = Param::required("firmware");
    const CHECKSUM: Param<Vec<u8>> = Param::optional("checksum");

    static UPLOAD: Schema = Schema {
        function: "PutFile",
        message_type: MessageType::Request,
        params: &[FIRMWARE.spec()],
    };

    fn upload_config() -> ProtocolConfig {
        let mut config = ProtocolConfig::default();
        config.catalog.register(&UPLOAD);
        config
    }

    #[test]
    fn record_snapshot() {
        let mut request = slider::request("42", 5, 1, "Volume");
        request
            .set(&slider::TIMEOUT, 8000)
            .set_payload_protected(true)
            .set_bulk_data(Some(&[1, 2]));

        insta::assert_json_snapshot!(RpcRecord::from(&*request), @r#"
        {
          "messageType": "Request",
          "functionName": "Slider",
          "correlationID": "42",
          "isEncrypted": true,
          "parameters": {
            "numTicks": 5,
            "position": 1,
            "sliderHeader": "Volume",
            "timeout": 8000
          },
          "bulkData": [
            1,
            2
          ]
        }
        "#);
    }

    #[test]
    fn decode_minimal_record() {
        let config = ProtocolConfig::default();
        let message = RpcMessage::from_json_value(json!({"messageType": "Notification"}), &config)
            .unwrap();
        assert_eq!(message.message_type(), MessageType::Notification);
        assert!(message.function_id().is_none());
        assert!(message.params().parameters().is_empty());
        assert!(message.bulk_data().is_none());
        assert!(!message.is_payload_protected());
    }

    #[test]
    fn decode_resolves_codes_and_numeric_correlation() {
        let config = ProtocolConfig::default();
        let message = RpcMessage::from_json_value(
            json!({
                "messageType": "Response",
                "functionName": 26,
                "correlationID": 42,
                "parameters": null,
            }),
            &config,
        )
        .unwrap();
        assert_eq!(message.function_name(), Some("Slider"));
        assert_eq!(message.correlation_id(), Some(&CorrelationId::Number(42)));
    }

    #[test]
    fn decode_rejects_non_object_parameters() {
        let config = ProtocolConfig::default();
        let err = RpcMessage::from_json_value(
            json!({"messageType": "Request", "parameters": [1, 2]}),
            &config,
        )
        .unwrap_err();
        assert!(err.is_malformed());

        let err = RpcMessage::from_json_value(json!({"functionName": "Slider"}), &config)
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Serialization(_)));
    }

    #[test]
    fn notification_record_drops_correlation() {
        let config = ProtocolConfig::default();
        let any = AnyMessage::from_json_value(
            json!({
                "messageType": "Notification",
                "functionName": "OnHMIStatus",
                "correlationID": "7",
            }),
            &config,
        )
        .unwrap();
        assert!(matches!(any, AnyMessage::Notification(_)));
        assert!(any.message().correlation_id().is_none());
    }

    #[test]
    fn round_trip_keeps_everything() {
        let mut notification = RpcNotification::new("OnAudioPassThru");
        notification
            .set_bulk_data(Some(&[9, 8, 7]))
            .set_payload_protected(true)
            .set_parameter("vendor", json!({"a": [1, 2]}));

        let value = notification.to_json_value().unwrap();
        let decoded = RpcMessage::from_json_value(value, &ProtocolConfig::default()).unwrap();
        assert_eq!(&decoded, &*notification);
    }

    #[test]
    fn checking_config_accepts_violations() {
        let config = ProtocolConfig::default().with_check_schemas(true);
        let request = RpcRequest::new("Slider", "1");
        let value = request.to_json_value().unwrap();
        let decoded = RpcMessage::from_json_value(value, &config).unwrap();
        assert_eq!(decoded.function_name(), Some("Slider"));
        assert!(!config.catalog.check(&decoded).is_empty());
    }

    #[test]
    fn unknown_function_is_kept_with_warnings_off() {
        let config = ProtocolConfig::default().with_warn_unknown_functions(false);
        let message = RpcMessage::from_json_value(
            json!({"messageType": "Request", "functionName": 28672, "correlationID": "1"}),
            &config,
        )
        .unwrap();
        assert_eq!(message.function_id(), Some(&FunctionId::Code(0x7000)));
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let mut request = RpcRequest::new("Show", "1");
        request.set_parameter("zeta", 1).set_parameter("alpha", 2);

        let value = request.to_json_value().unwrap();
        assert_eq!(
            serde_json::to_string(&value["parameters"]).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );

        let decoded = RpcMessage::from_json_value(
            json!({"messageType": "Request", "parameters": {"zeta": 1, "alpha": 2}}),
            &ProtocolConfig::default(),
        )
        .unwrap();
        assert_eq!(
            decoded.params().parameters().keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha"]
        );
    }

    #[test]
    fn declared_bytes_round_trip_exactly() {
        let config = upload_config();
        let mut request = RpcRequest::new("PutFile", "5");
        request.set(&FIRMWARE, vec![1, 2, 3]);

        let value = request.to_json_value().unwrap();
        assert_eq!(value["parameters"]["firmware"], json!([1, 2, 3]));

        let decoded = RpcMessage::from_json_value(value, &config).unwrap();
        assert_eq!(decoded.parameter("firmware"), Some(&Value::Bytes(vec![1, 2, 3])));
        assert_eq!(&decoded, &*request);
    }

    #[test]
    fn undeclared_bytes_come_back_as_numbers() {
        let config = upload_config();
        let mut request = RpcRequest::new("PutFile", "5");
        request
            .set(&FIRMWARE, vec![1])
            .set(&CHECKSUM, vec![4, 5]);

        let value = request.to_json_value().unwrap();
        let decoded = RpcMessage::from_json_value(value, &config).unwrap();
        assert_eq!(
            decoded.parameter("checksum"),
            Some(&Value::Array(vec![Value::from(4), Value::from(5)]))
        );
        assert_eq!(decoded.get(&CHECKSUM), Some(vec![4, 5]));
        assert_eq!(decoded.get(&FIRMWARE), Some(vec![1]));
    }
}

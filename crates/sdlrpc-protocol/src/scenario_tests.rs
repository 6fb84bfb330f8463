//! End-to-end message scenarios across envelope, kinds, and record form.

use sdlrpc_core::{CoreError, ParameterStore, Value};
use serde_json::json;

use crate::messages::slider;
use crate::{
    AnyMessage, CorrelationId, FunctionId, MessageType, ProtocolConfig, RpcMessage,
    RpcNotification, RpcRecord, RpcRequest, RpcStruct, SchemaCatalog,
};

#[test]
fn slider_request_from_parameters() {
    let params = RpcStruct::try_from(json!({"numTicks": 5, "position": 1, "timeout": 8000}))
        .unwrap();
    let mut request = RpcMessage::with_params(MessageType::Request, params);
    request.set_function_id("Slider").set_correlation_id("42");

    assert_eq!(request.message_type(), MessageType::Request);
    assert_eq!(request.get(&slider::NUM_TICKS), Some(5));
    assert_eq!(request.correlation_id(), Some(&CorrelationId::from("42")));
    assert_eq!(request.get(&slider::TIMEOUT), Some(8000));
    assert_eq!(request.get(&slider::CANCEL_ID), None);
    assert_eq!(
        request.require(&slider::CANCEL_ID),
        Err(CoreError::unset("cancelID"))
    );
}

#[test]
fn notification_correlation_is_unset_in_any_order() {
    let notification = RpcNotification::new("OnHMIStatus");
    assert!(notification.correlation_id().is_none());

    let mut late = RpcMessage::new(MessageType::Request);
    late.set_correlation_id("9")
        .set_function_id("OnHMIStatus")
        .set_message_type(MessageType::Notification);
    assert!(late.correlation_id().is_none());

    let mut early = RpcMessage::new(MessageType::Notification);
    early.set_correlation_id("9");
    assert!(early.correlation_id().is_none());
}

#[test]
fn numeric_function_id_reads_back_symbolic() {
    let mut request = RpcRequest::new(0x1Au32, "1");
    assert_eq!(request.function_id(), Some(&FunctionId::from("Slider")));

    request.set_function_id(FunctionId::Code(0x1A));
    assert_eq!(request.function_name(), Some("Slider"));
}

#[test]
fn payload_protected_survives_round_trip() {
    let mut request = slider::request(1u64, 3, 1, "Temp");
    request.set_payload_protected(true);

    let record = RpcRecord::from(&*request);
    let decoded = record.into_message(&ProtocolConfig::default()).unwrap();
    assert!(decoded.is_payload_protected());

    let value = request.to_json_value().unwrap();
    let decoded = AnyMessage::from_json_value(value, &ProtocolConfig::default()).unwrap();
    assert!(decoded.message().is_payload_protected());
    assert_eq!(decoded.message(), &*request);
}

#[test]
fn bulk_data_is_independent_and_clearable() {
    let mut chunk = vec![10u8, 20, 30];
    let mut notification = RpcNotification::new("OnAudioPassThru");
    notification.set_bulk_data(Some(&chunk));
    chunk.fill(0);
    assert_eq!(notification.bulk_data(), Some(&[10u8, 20, 30][..]));

    notification.set_bulk_data(None);
    assert_eq!(notification.bulk_data(), None);
}

#[test]
fn null_is_not_unset() {
    let mut store = ParameterStore::new();
    store.set("info", Value::Null);
    assert_eq!(store.get("info"), Some(&Value::Null));
    assert_eq!(store.get("never"), None);
}

#[test]
fn incomplete_messages_stay_usable() {
    let mut request = RpcRequest::new("Slider", "1");
    request.set(&slider::POSITION, 2);

    assert!(!SchemaCatalog::builtin().check(&request).is_empty());
    assert_eq!(request.get(&slider::POSITION), Some(2));
    let record = RpcRecord::from(&*request);
    assert_eq!(record.parameters, json!({"position": 2}));
}

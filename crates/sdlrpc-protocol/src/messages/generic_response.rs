//! `GenericResponse`: sent by the head unit for requests it cannot parse.

use crate::kinds::RpcResponse;
use crate::message::MessageType;
use crate::schema::Schema;

pub static RESPONSE: Schema = Schema {
    function: "GenericResponse",
    message_type: MessageType::Response,
    params: &[
        RpcResponse::SUCCESS.spec(),
        RpcResponse::RESULT_CODE.spec(),
        RpcResponse::INFO.spec(),
    ],
};

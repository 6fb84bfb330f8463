//! `Slider`: shows a slider on the head unit and reports the chosen position.

use crate::kinds::{RpcRequest, RpcResponse};
use crate::message::{CorrelationId, MessageType};
use crate::schema::{Param, Schema};

pub const NUM_TICKS: Param<u32> = Param::required("numTicks");
/// Initial position, 1-based.
pub const POSITION: Param<u32> = Param::required("position");
pub const SLIDER_HEADER: Param<String> = Param::required("sliderHeader");
/// One footer for a static slider, or one per tick for a dynamic one.
pub const SLIDER_FOOTER: Param<Vec<String>> = Param::optional("sliderFooter");
/// Milliseconds.
pub const TIMEOUT: Param<u32> = Param::optional("timeout");
pub const CANCEL_ID: Param<u32> = Param::optional("cancelID");

pub const SLIDER_POSITION: Param<u32> = Param::optional("sliderPosition");

pub static REQUEST: Schema = Schema {
    function: "Slider",
    message_type: MessageType::Request,
    params: &[
        NUM_TICKS.spec(),
        POSITION.spec(),
        SLIDER_HEADER.spec(),
        SLIDER_FOOTER.spec(),
        TIMEOUT.spec(),
        CANCEL_ID.spec(),
    ],
};

pub static RESPONSE: Schema = Schema {
    function: "Slider",
    message_type: MessageType::Response,
    params: &[
        RpcResponse::SUCCESS.spec(),
        RpcResponse::RESULT_CODE.spec(),
        RpcResponse::INFO.spec(),
        SLIDER_POSITION.spec(),
    ],
};

/// A slider request with its required parameters set.
pub fn request(
    correlation_id: impl Into<CorrelationId>,
    num_ticks: u32,
    position: u32,
    header: impl Into<String>,
) -> RpcRequest {
    let mut request = RpcRequest::for_schema(&REQUEST, correlation_id);
    request
        .set(&NUM_TICKS, num_ticks)
        .set(&POSITION, position)
        .set(&SLIDER_HEADER, header.into());
    request
}

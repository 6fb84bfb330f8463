//! `CancelInteraction`: dismisses a modal interaction such as a slider.

use crate::kinds::RpcResponse;
use crate::message::MessageType;
use crate::schema::{Param, Schema};

/// Function code of the interaction to cancel.
pub const FUNCTION_ID: Param<u32> = Param::required("functionID");
/// The `cancelID` given to the interaction, if any.
pub const CANCEL_ID: Param<u32> = Param::optional("cancelID");

pub static REQUEST: Schema = Schema {
    function: "CancelInteraction",
    message_type: MessageType::Request,
    params: &[FUNCTION_ID.spec(), CANCEL_ID.spec()],
};

pub static RESPONSE: Schema = Schema {
    function: "CancelInteraction",
    message_type: MessageType::Response,
    params: &[
        RpcResponse::SUCCESS.spec(),
        RpcResponse::RESULT_CODE.spec(),
        RpcResponse::INFO.spec(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SchemaCatalog;
    use crate::kinds::RpcRequest;
    use crate::messages::slider;

    #[test]
    fn cancels_a_slider_by_code() {
        let mut prompt = slider::request("1", 3, 1, "Seat");
        prompt.set(&slider::CANCEL_ID, 77);

        let mut cancel = RpcRequest::for_schema(&REQUEST, "2");
        let code = sdlrpc_core::FUNCTION_ID
            .value_for_key("Slider")
            .copied()
            .unwrap_or_default();
        cancel
            .set(&FUNCTION_ID, code)
            .set(&CANCEL_ID, prompt.get(&slider::CANCEL_ID).unwrap_or_default());

        assert_eq!(cancel.get(&FUNCTION_ID), Some(0x1A));
        assert_eq!(cancel.get(&CANCEL_ID), Some(77));
        assert!(SchemaCatalog::builtin().check(&cancel).is_empty());
    }
}

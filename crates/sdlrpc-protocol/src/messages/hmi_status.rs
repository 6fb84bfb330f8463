//! `OnHMIStatus`: the head unit reports the app's HMI level and audio state.

use crate::message::MessageType;
use crate::schema::{Param, Schema};

pub const HMI_LEVEL: Param<String> = Param::enumerated("hmiLevel", "HMILevel", true);
pub const AUDIO_STREAMING_STATE: Param<String> =
    Param::enumerated("audioStreamingState", "AudioStreamingState", true);
pub const SYSTEM_CONTEXT: Param<String> = Param::enumerated("systemContext", "SystemContext", true);
pub const WINDOW_ID: Param<u32> = Param::optional("windowID");

pub static ON_HMI_STATUS: Schema = Schema {
    function: "OnHMIStatus",
    message_type: MessageType::Notification,
    params: &[
        HMI_LEVEL.spec(),
        AUDIO_STREAMING_STATE.spec(),
        SYSTEM_CONTEXT.spec(),
        WINDOW_ID.spec(),
    ],
};

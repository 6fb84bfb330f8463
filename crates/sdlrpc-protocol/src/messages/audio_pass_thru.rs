//! Audio pass-through: the head unit records from its microphone and
//! streams the samples back as `OnAudioPassThru` bulk data.

use sdlrpc_core::ParameterStore;

use crate::kinds::RpcResponse;
use crate::message::MessageType;
use crate::schema::{Param, Schema};

pub const INITIAL_PROMPT: Param<Vec<ParameterStore>> = Param::optional("initialPrompt");
pub const DISPLAY_TEXT_1: Param<String> = Param::optional("audioPassThruDisplayText1");
pub const DISPLAY_TEXT_2: Param<String> = Param::optional("audioPassThruDisplayText2");
pub const SAMPLING_RATE: Param<String> = Param::enumerated("samplingRate", "SamplingRate", true);
/// Milliseconds.
pub const MAX_DURATION: Param<u32> = Param::required("maxDuration");
pub const BITS_PER_SAMPLE: Param<String> =
    Param::enumerated("bitsPerSample", "BitsPerSample", true);
pub const AUDIO_TYPE: Param<String> = Param::enumerated("audioType", "AudioType", true);
pub const MUTE_AUDIO: Param<bool> = Param::optional("muteAudio");

pub static REQUEST: Schema = Schema {
    function: "PerformAudioPassThru",
    message_type: MessageType::Request,
    params: &[
        INITIAL_PROMPT.spec(),
        DISPLAY_TEXT_1.spec(),
        DISPLAY_TEXT_2.spec(),
        SAMPLING_RATE.spec(),
        MAX_DURATION.spec(),
        BITS_PER_SAMPLE.spec(),
        AUDIO_TYPE.spec(),
        MUTE_AUDIO.spec(),
    ],
};

pub static RESPONSE: Schema = Schema {
    function: "PerformAudioPassThru",
    message_type: MessageType::Response,
    params: &[
        RpcResponse::SUCCESS.spec(),
        RpcResponse::RESULT_CODE.spec(),
        RpcResponse::INFO.spec(),
    ],
};

/// Carries no parameters; the audio chunk is the bulk data.
pub static ON_AUDIO_PASS_THRU: Schema = Schema {
    function: "OnAudioPassThru",
    message_type: MessageType::Notification,
    params: &[],
};

//! Built-in message schemas.
//!
//! Each module declares its parameters as [`Param`](crate::Param)
//! constants and its schemas as statics. The catalog of every SDL message
//! lives outside this crate; these cover the kinds the crate itself is
//! tested against.

pub mod audio_pass_thru;
pub mod cancel_interaction;
pub mod generic_response;
pub mod hmi_status;
pub mod slider;

use crate::schema::Schema;

/// Every schema declared in this module.
pub static BUILTIN: &[&Schema] = &[
    &slider::REQUEST,
    &slider::RESPONSE,
    &audio_pass_thru::REQUEST,
    &audio_pass_thru::RESPONSE,
    &audio_pass_thru::ON_AUDIO_PASS_THRU,
    &hmi_status::ON_HMI_STATUS,
    &cancel_interaction::REQUEST,
    &cancel_interaction::RESPONSE,
    &generic_response::RESPONSE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use sdlrpc_core::FUNCTION_ID;

    #[test]
    fn builtin_functions_have_codes() {
        for schema in BUILTIN {
            assert!(
                FUNCTION_ID.contains_key(schema.function),
                "{} has no function code",
                schema.function
            );
        }
    }

    #[test]
    fn builtin_keys_are_unique_per_schema() {
        for schema in BUILTIN {
            let mut keys: Vec<_> = schema.params.iter().map(|spec| spec.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), schema.params.len(), "{}", schema.function);
        }
    }
}

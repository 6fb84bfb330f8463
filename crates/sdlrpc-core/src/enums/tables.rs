//! Built-in value tables and the by-name registry of string tables.

use std::sync::LazyLock;

use super::EnumTable;

/// Function identifiers: RPC name → numeric function code.
///
/// Requests and responses share a code; notifications start at `0x8000`.
pub static FUNCTION_ID: LazyLock<EnumTable<u32>> =
    LazyLock::new(|| EnumTable::new("FunctionID", FUNCTION_ID_ENTRIES));

static FUNCTION_ID_ENTRIES: &[(&str, u32)] = &[
    ("RESERVED", 0x00),
    ("RegisterAppInterface", 0x01),
    ("UnregisterAppInterface", 0x02),
    ("SetGlobalProperties", 0x03),
    ("ResetGlobalProperties", 0x04),
    ("AddCommand", 0x05),
    ("DeleteCommand", 0x06),
    ("AddSubMenu", 0x07),
    ("DeleteSubMenu", 0x08),
    ("CreateInteractionChoiceSet", 0x09),
    ("PerformInteraction", 0x0A),
    ("DeleteInteractionChoiceSet", 0x0B),
    ("Alert", 0x0C),
    ("Show", 0x0D),
    ("Speak", 0x0E),
    ("SetMediaClockTimer", 0x0F),
    ("PerformAudioPassThru", 0x10),
    ("EndAudioPassThru", 0x11),
    ("SubscribeButton", 0x12),
    ("UnsubscribeButton", 0x13),
    ("SubscribeVehicleData", 0x14),
    ("UnsubscribeVehicleData", 0x15),
    ("GetVehicleData", 0x16),
    ("ReadDID", 0x17),
    ("GetDTCs", 0x18),
    ("ScrollableMessage", 0x19),
    ("Slider", 0x1A),
    ("ShowConstantTBT", 0x1B),
    ("AlertManeuver", 0x1C),
    ("UpdateTurnList", 0x1D),
    ("ChangeRegistration", 0x1E),
    ("GenericResponse", 0x1F),
    ("PutFile", 0x20),
    ("DeleteFile", 0x21),
    ("ListFiles", 0x22),
    ("SetAppIcon", 0x23),
    ("SetDisplayLayout", 0x24),
    ("DiagnosticMessage", 0x25),
    ("SystemRequest", 0x26),
    ("SendLocation", 0x27),
    ("DialNumber", 0x28),
    ("ButtonPress", 0x29),
    ("GetInteriorVehicleData", 0x2B),
    ("SetInteriorVehicleData", 0x2C),
    ("GetWayPoints", 0x2D),
    ("SubscribeWayPoints", 0x2E),
    ("UnsubscribeWayPoints", 0x2F),
    ("GetSystemCapability", 0x30),
    ("SendHapticData", 0x31),
    ("SetCloudAppProperties", 0x32),
    ("GetCloudAppProperties", 0x33),
    ("PublishAppService", 0x34),
    ("GetAppServiceData", 0x35),
    ("GetFile", 0x36),
    ("PerformAppServiceInteraction", 0x37),
    ("UnpublishAppService", 0x38),
    ("CancelInteraction", 0x39),
    ("CloseApplication", 0x3A),
    ("ShowAppMenu", 0x3B),
    ("CreateWindow", 0x3C),
    ("DeleteWindow", 0x3D),
    ("GetInteriorVehicleDataConsent", 0x3E),
    ("ReleaseInteriorVehicleDataModule", 0x3F),
    ("SubtleAlert", 0x40),
    ("OnHMIStatus", 0x8000),
    ("OnAppInterfaceUnregistered", 0x8001),
    ("OnButtonEvent", 0x8002),
    ("OnButtonPress", 0x8003),
    ("OnVehicleData", 0x8004),
    ("OnCommand", 0x8005),
    ("OnTBTClientState", 0x8006),
    ("OnDriverDistraction", 0x8007),
    ("OnPermissionsChange", 0x8008),
    ("OnAudioPassThru", 0x8009),
    ("OnLanguageChange", 0x800A),
    ("OnKeyboardInput", 0x800B),
    ("OnTouchEvent", 0x800C),
    ("OnSystemRequest", 0x800D),
    ("OnHashChange", 0x800E),
    ("OnInteriorVehicleData", 0x800F),
    ("OnWayPointChange", 0x8010),
    ("OnRCStatus", 0x8011),
    ("OnAppServiceData", 0x8012),
    ("OnSystemCapabilityUpdated", 0x8013),
    ("OnSubtleAlertPressed", 0x8014),
    ("OnUpdateFile", 0x8015),
    ("OnUpdateSubMenu", 0x8016),
];

// Keys carry a type prefix where the canonical value starts with a digit.
pub static SAMPLING_RATE: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "SamplingRate",
        &[
            ("SamplingRate_8KHZ", "8KHZ"),
            ("SamplingRate_16KHZ", "16KHZ"),
            ("SamplingRate_22KHZ", "22KHZ"),
            ("SamplingRate_44KHZ", "44KHZ"),
        ],
    )
});

pub static BITS_PER_SAMPLE: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "BitsPerSample",
        &[
            ("BitsPerSample_8_BIT", "8_BIT"),
            ("BitsPerSample_16_BIT", "16_BIT"),
        ],
    )
});

pub static AUDIO_TYPE: LazyLock<EnumTable<&'static str>> =
    LazyLock::new(|| EnumTable::new("AudioType", &[("PCM", "PCM")]));

/// Result codes carried by every response.
pub static RESULT: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "Result",
        &[
            ("SUCCESS", "SUCCESS"),
            ("UNSUPPORTED_REQUEST", "UNSUPPORTED_REQUEST"),
            ("UNSUPPORTED_RESOURCE", "UNSUPPORTED_RESOURCE"),
            ("DISALLOWED", "DISALLOWED"),
            ("REJECTED", "REJECTED"),
            ("ABORTED", "ABORTED"),
            ("IGNORED", "IGNORED"),
            ("RETRY", "RETRY"),
            ("IN_USE", "IN_USE"),
            ("VEHICLE_DATA_NOT_AVAILABLE", "VEHICLE_DATA_NOT_AVAILABLE"),
            ("TIMED_OUT", "TIMED_OUT"),
            ("INVALID_DATA", "INVALID_DATA"),
            ("CHAR_LIMIT_EXCEEDED", "CHAR_LIMIT_EXCEEDED"),
            ("INVALID_ID", "INVALID_ID"),
            ("DUPLICATE_NAME", "DUPLICATE_NAME"),
            ("APPLICATION_NOT_REGISTERED", "APPLICATION_NOT_REGISTERED"),
            ("WRONG_LANGUAGE", "WRONG_LANGUAGE"),
            ("OUT_OF_MEMORY", "OUT_OF_MEMORY"),
            ("TOO_MANY_PENDING_REQUESTS", "TOO_MANY_PENDING_REQUESTS"),
            ("TOO_MANY_APPLICATIONS", "TOO_MANY_APPLICATIONS"),
            ("APPLICATION_REGISTERED_ALREADY", "APPLICATION_REGISTERED_ALREADY"),
            ("WARNINGS", "WARNINGS"),
            ("GENERIC_ERROR", "GENERIC_ERROR"),
            ("USER_DISALLOWED", "USER_DISALLOWED"),
            ("TRUNCATED_DATA", "TRUNCATED_DATA"),
            ("UNSUPPORTED_VERSION", "UNSUPPORTED_VERSION"),
            ("VEHICLE_DATA_NOT_ALLOWED", "VEHICLE_DATA_NOT_ALLOWED"),
            ("FILE_NOT_FOUND", "FILE_NOT_FOUND"),
            ("CANCEL_ROUTE", "CANCEL_ROUTE"),
            ("SAVED", "SAVED"),
            ("INVALID_CERT", "INVALID_CERT"),
            ("EXPIRED_CERT", "EXPIRED_CERT"),
            ("RESUME_FAILED", "RESUME_FAILED"),
            ("DATA_NOT_AVAILABLE", "DATA_NOT_AVAILABLE"),
            ("READ_ONLY", "READ_ONLY"),
            ("CORRUPTED_DATA", "CORRUPTED_DATA"),
            ("ENCRYPTION_NEEDED", "ENCRYPTION_NEEDED"),
        ],
    )
});

pub static HMI_LEVEL: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "HMILevel",
        &[
            ("HMI_FULL", "FULL"),
            ("HMI_LIMITED", "LIMITED"),
            ("HMI_BACKGROUND", "BACKGROUND"),
            ("HMI_NONE", "NONE"),
        ],
    )
});

pub static AUDIO_STREAMING_STATE: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "AudioStreamingState",
        &[
            ("AUDIBLE", "AUDIBLE"),
            ("ATTENUATED", "ATTENUATED"),
            ("NOT_AUDIBLE", "NOT_AUDIBLE"),
        ],
    )
});

pub static SYSTEM_CONTEXT: LazyLock<EnumTable<&'static str>> = LazyLock::new(|| {
    EnumTable::new(
        "SystemContext",
        &[
            ("SYSCTXT_MAIN", "MAIN"),
            ("SYSCTXT_VRSESSION", "VRSESSION"),
            ("SYSCTXT_MENU", "MENU"),
            ("SYSCTXT_HMI_OBSCURED", "HMI_OBSCURED"),
            ("SYSCTXT_ALERT", "ALERT"),
        ],
    )
});

/// Names [`string_table`] resolves.
pub const STRING_TABLE_NAMES: &[&str] = &[
    "SamplingRate",
    "BitsPerSample",
    "AudioType",
    "Result",
    "HMILevel",
    "AudioStreamingState",
    "SystemContext",
];

/// Looks up a string-valued table by its name.
///
/// Schemas refer to enum-typed parameters by table name; this is how they
/// are resolved.
pub fn string_table(name: &str) -> Option<&'static EnumTable<&'static str>> {
    let table: &'static LazyLock<EnumTable<&'static str>> = match name {
        "SamplingRate" => &SAMPLING_RATE,
        "BitsPerSample" => &BITS_PER_SAMPLE,
        "AudioType" => &AUDIO_TYPE,
        "Result" => &RESULT,
        "HMILevel" => &HMI_LEVEL,
        "AudioStreamingState" => &AUDIO_STREAMING_STATE,
        "SystemContext" => &SYSTEM_CONTEXT,
        _ => return None,
    };
    Some(LazyLock::force(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_code() {
        assert_eq!(FUNCTION_ID.value_for_key("Slider"), Some(&0x1A));
        assert_eq!(FUNCTION_ID.key_for_value(&0x1A), Some("Slider"));
        assert_eq!(FUNCTION_ID.key_for_value(&0x8009), Some("OnAudioPassThru"));
    }

    #[test]
    fn sampling_rate_prefix() {
        assert_eq!(SAMPLING_RATE.value_for_key("SamplingRate_8KHZ"), Some(&"8KHZ"));
        assert_eq!(SAMPLING_RATE.key_for_value(&"44KHZ"), Some("SamplingRate_44KHZ"));
        assert!(SAMPLING_RATE.contains_str("16KHZ"));
        assert!(!SAMPLING_RATE.contains_str("SamplingRate_16KHZ"));
    }

    #[test]
    fn registry_resolves_by_name() {
        assert_eq!(string_table("HMILevel").map(|t| t.name()), Some("HMILevel"));
        assert_eq!(string_table("Result").map(|t| t.len()), Some(37));
        assert!(string_table("FunctionID").is_none());
        assert!(string_table("Unknown").is_none());
        for name in STRING_TABLE_NAMES {
            assert_eq!(string_table(name).map(|t| t.name()), Some(*name));
        }
    }
}

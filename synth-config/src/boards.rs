//! Board profile registry.
//!
//! A closed set of named hardware profiles, one per supported board. Each
//! profile bundles the codec identity, the pin bindings the board driver
//! wires up, the feature set the firmware may rely on, and the timing
//! bounds the configuration resolver checks the audio parameters against.
//!
//! Exactly one profile is active per build, selected by a `board-*` cargo
//! feature; the guard block in `lib.rs` rejects builds that select zero or
//! several. [`PROFILE`] is the single active entry.

/// Audio codec / DAC fitted on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Codec {
    /// TI PCM5102A stereo DAC. Output only, no control bus.
    Pcm5102a,
    /// X-Powers AC101 codec (ESP32 Audio Kit v2.0 and earlier).
    Ac101,
    /// Everest ES8388 codec (ESP32 Audio Kit v2.2).
    Es8388,
}

/// I2S bus pin assignment (ESP32 GPIO numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sPins {
    /// Master clock out, if the codec needs one.
    pub mclk: Option<u8>,
    pub bclk: u8,
    /// Word select / LR clock.
    pub ws: u8,
    pub data_out: u8,
    /// Codec ADC data back to the MCU, on boards with line/mic input.
    pub data_in: Option<u8>,
}

/// I2C control bus pin assignment for codec register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cPins {
    pub sda: u8,
    pub scl: u8,
}

/// Complete pin binding set for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub i2s: I2sPins,
    /// Control bus, absent on plain-DAC boards.
    pub codec_i2c: Option<I2cPins>,
    /// Power amplifier enable, where the board has one.
    pub pa_enable: Option<u8>,
    /// WS2812 status LED strip data pin.
    pub ws2812: Option<u8>,
}

/// Capabilities the firmware may rely on for a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardFeatures {
    /// Stereo line/mic input wired to the codec ADC.
    pub line_in: bool,
    /// Headphone jack insertion detect.
    pub headphone_detect: bool,
    /// Onboard key matrix (the Audio Kit's six buttons).
    pub onboard_keys: bool,
}

/// One entry of the board profile registry.
///
/// Immutable for the life of the firmware image; constructed only as the
/// feature-gated constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardProfile {
    pub name: &'static str,
    pub codec: Codec,
    pub pins: PinMap,
    pub features: BoardFeatures,
    /// Highest sample rate the codec bus sustains on this board.
    pub max_sample_rate_hz: u32,
    /// Shortest block period that still leaves CPU headroom for the
    /// audio interrupt on this board.
    pub min_block_period_us: u32,
}

#[cfg(feature = "board-ml-synth-v2")]
mod active {
    use super::*;

    /// ML Synth V2 DIY PCB: PCM5102A DAC, output only.
    pub const PROFILE: BoardProfile = BoardProfile {
        name: "ML_SYNTH_V2",
        codec: Codec::Pcm5102a,
        pins: PinMap {
            i2s: I2sPins {
                mclk: None,
                bclk: 25,
                ws: 27,
                data_out: 26,
                data_in: None,
            },
            codec_i2c: None,
            pa_enable: None,
            ws2812: Some(21),
        },
        features: BoardFeatures {
            line_in: false,
            headphone_detect: false,
            onboard_keys: false,
        },
        max_sample_rate_hz: 48_000,
        min_block_period_us: 250,
    };
}

#[cfg(all(feature = "board-audio-kit-ac101", not(feature = "board-ml-synth-v2")))]
mod active {
    use super::*;

    /// ESP32 Audio Kit v2.0 with the AC101 codec.
    pub const PROFILE: BoardProfile = BoardProfile {
        name: "ESP32_AUDIO_KIT_AC101",
        codec: Codec::Ac101,
        pins: PinMap {
            i2s: I2sPins {
                mclk: Some(0),
                bclk: 27,
                ws: 26,
                data_out: 25,
                data_in: Some(35),
            },
            codec_i2c: Some(I2cPins { sda: 33, scl: 32 }),
            pa_enable: Some(21),
            ws2812: None,
        },
        features: BoardFeatures {
            line_in: true,
            headphone_detect: false,
            onboard_keys: true,
        },
        max_sample_rate_hz: 48_000,
        min_block_period_us: 250,
    };
}

#[cfg(all(
    feature = "board-audio-kit-es8388",
    not(any(feature = "board-ml-synth-v2", feature = "board-audio-kit-ac101"))
))]
mod active {
    use super::*;

    /// ESP32 Audio Kit v2.2 with the ES8388 codec.
    pub const PROFILE: BoardProfile = BoardProfile {
        name: "ESP32_AUDIO_KIT_ES8388",
        codec: Codec::Es8388,
        pins: PinMap {
            i2s: I2sPins {
                mclk: Some(0),
                bclk: 27,
                ws: 25,
                data_out: 26,
                data_in: Some(35),
            },
            codec_i2c: Some(I2cPins { sda: 33, scl: 32 }),
            pa_enable: Some(21),
            ws2812: None,
        },
        features: BoardFeatures {
            line_in: true,
            headphone_detect: true,
            onboard_keys: true,
        },
        max_sample_rate_hz: 96_000,
        min_block_period_us: 250,
    };
}

// Placeholder so the only diagnostic for a board-less build is the
// `compile_error!` in lib.rs, not a cascade of missing-item errors.
#[cfg(not(any(
    feature = "board-ml-synth-v2",
    feature = "board-audio-kit-ac101",
    feature = "board-audio-kit-es8388"
)))]
mod active {
    use super::*;

    pub const PROFILE: BoardProfile = BoardProfile {
        name: "UNSELECTED",
        codec: Codec::Pcm5102a,
        pins: PinMap {
            i2s: I2sPins {
                mclk: None,
                bclk: 0,
                ws: 0,
                data_out: 0,
                data_in: None,
            },
            codec_i2c: None,
            pa_enable: None,
            ws2812: None,
        },
        features: BoardFeatures {
            line_in: false,
            headphone_detect: false,
            onboard_keys: false,
        },
        max_sample_rate_hz: u32::MAX,
        min_block_period_us: 0,
    };
}

/// The single board profile active in this build.
pub const PROFILE: BoardProfile = active::PROFILE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_profile_is_internally_consistent() {
        // A codec with a register map needs a control bus; a plain DAC
        // must not claim one.
        match PROFILE.codec {
            Codec::Pcm5102a => assert!(PROFILE.pins.codec_i2c.is_none()),
            Codec::Ac101 | Codec::Es8388 => assert!(PROFILE.pins.codec_i2c.is_some()),
        }
        // Line input requires an I2S data-in pin.
        if PROFILE.features.line_in {
            assert!(PROFILE.pins.i2s.data_in.is_some());
        }
        assert!(PROFILE.max_sample_rate_hz > 0);
    }

    #[cfg(feature = "board-audio-kit-es8388")]
    #[test]
    fn es8388_profile_matches_audio_kit_v2_2() {
        assert_eq!(PROFILE.name, "ESP32_AUDIO_KIT_ES8388");
        assert_eq!(PROFILE.codec, Codec::Es8388);
        assert_eq!(PROFILE.pins.codec_i2c, Some(I2cPins { sda: 33, scl: 32 }));
        assert!(PROFILE.features.onboard_keys);
    }
}

//! End-to-end checks of the resolved configuration.
//!
//! These run against the feature set the test build was compiled with and
//! verify:
//!
//! - **Determinism:** resolving twice yields the identical configuration
//! - **Consistency:** the resolved block fits the active board's bounds
//! - **Default build:** the production defaults of the reference hardware
//!   (ES8388 Audio Kit, 48 kHz, 48-sample blocks, 16-bit, integer MIDI,
//!   no test signal, simple status)

use crate::boards::Codec;
use crate::config::{Config, CONFIG};
use crate::diag::DiagnosticMode;
use crate::format::SampleFormat;
use crate::midi::MidiFormat;
use crate::status::StatusVerbosity;

#[test]
fn resolution_is_deterministic() {
    assert_eq!(CONFIG, Config::resolve());
    assert_eq!(Config::resolve(), Config::resolve());
}

#[test]
fn resolved_timing_fits_active_board() {
    assert!(CONFIG.timing.sample_rate > 0);
    assert!(CONFIG.timing.buffer_size > 0);
    assert!(CONFIG.timing.sample_rate <= CONFIG.board.max_sample_rate_hz);
    assert!(CONFIG.timing.block_period_us() >= CONFIG.board.min_block_period_us);
}

#[cfg(all(
    feature = "board-audio-kit-es8388",
    feature = "midi-int",
    feature = "status-simple",
    not(any(feature = "saw-test", feature = "sine-test"))
))]
#[test]
fn default_build_matches_reference_hardware() {
    assert_eq!(CONFIG.board.name, "ESP32_AUDIO_KIT_ES8388");
    assert_eq!(CONFIG.board.codec, Codec::Es8388);
    assert_eq!(CONFIG.timing.sample_rate, 48_000);
    assert_eq!(CONFIG.timing.buffer_size, 48);
    assert_eq!(CONFIG.timing.block_period_us(), 1_000);
    assert_eq!(CONFIG.sample_format, SampleFormat::S16);
    assert_eq!(CONFIG.midi_format, MidiFormat::Int);
    assert_eq!(CONFIG.diagnostic, DiagnosticMode::None);
    assert_eq!(CONFIG.status, StatusVerbosity::Simple);
    assert_eq!(CONFIG.serial_baud, 115_200);
}

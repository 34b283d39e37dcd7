//! # synth-config
//!
//! Compile-time configuration surface for the ESP32 digital synthesizer
//! firmware. Every choice here is resolved before any code executes: the
//! hardware board profile, the audio-engine timing, the sample numeric
//! format, the MIDI wire format, the optional bring-up test signal and the
//! status-reporting verbosity. Downstream consumers (audio pipeline, board
//! driver, MIDI parser, status reporter) read the resolved values and never
//! mutate them.
//!
//! ## Architecture
//!
//! | Concern | Module | Purpose |
//! |---------|--------|---------|
//! | Board | [`boards`] | Closed registry of hardware profiles (codec, pins, features) |
//! | Timing | [`timing`] | Sample rate and per-block buffer size |
//! | Samples | [`format`] | Numeric sample representation |
//! | MIDI | [`midi`] | Wire format for incoming performance data |
//! | Bring-up | [`diag`] | Optional built-in test waveform |
//! | Status | [`status`] | Runtime diagnostics verbosity |
//! | Resolver | [`config`] | The single resolved [`Config`] value |
//!
//! ## Selecting a build
//!
//! Each selector group is a set of mutually exclusive cargo features. The
//! guard block below rejects ambiguous selections at compile time, so a
//! build can never silently resolve "the last profile defined":
//!
//! | Group | Features | Default |
//! |-------|----------|---------|
//! | Board profile | `board-ml-synth-v2`, `board-audio-kit-ac101`, `board-audio-kit-es8388` | `board-audio-kit-es8388` |
//! | MIDI wire format | `midi-int`, `midi-float` | `midi-int` |
//! | Sample format | `sample-16bit` | `sample-16bit` |
//! | Diagnostic signal | `saw-test`, `sine-test` | neither (normal synthesis) |
//! | Status verbosity | `status-off`, `status-simple`, `status-verbose` | `status-simple` |
//!
//! ## Quick start
//!
//! ```ignore
//! use synth_config::CONFIG;
//!
//! let buf = [0i16; CONFIG.timing.buffer_size];
//! board_driver::init(CONFIG.board);
//! midi_parser::run(CONFIG.midi_format, CONFIG.serial_baud);
//! ```
//!
//! ## Audio parameters (default build)
//!
//! - **Sample rate:** 48 000 Hz ([`timing::SAMPLE_RATE`])
//! - **Block size:** 48 samples ([`timing::SAMPLE_BUFFER_SIZE`]) → 1 ms blocks
//! - **Sample format:** `i16` (signed 16-bit)

#![no_std]

// ── Board profile: exactly one ──────────────────────────────────────────

#[cfg(not(any(
    feature = "board-ml-synth-v2",
    feature = "board-audio-kit-ac101",
    feature = "board-audio-kit-es8388"
)))]
compile_error!(
    "no board profile selected: enable exactly one of 'board-ml-synth-v2', \
     'board-audio-kit-ac101', 'board-audio-kit-es8388'"
);

#[cfg(all(feature = "board-ml-synth-v2", feature = "board-audio-kit-ac101"))]
compile_error!(
    "conflicting board profiles: 'board-ml-synth-v2' and 'board-audio-kit-ac101' are both enabled"
);

#[cfg(all(feature = "board-ml-synth-v2", feature = "board-audio-kit-es8388"))]
compile_error!(
    "conflicting board profiles: 'board-ml-synth-v2' and 'board-audio-kit-es8388' are both enabled"
);

#[cfg(all(feature = "board-audio-kit-ac101", feature = "board-audio-kit-es8388"))]
compile_error!(
    "conflicting board profiles: 'board-audio-kit-ac101' and 'board-audio-kit-es8388' are both enabled"
);

// ── MIDI wire format: exactly one ───────────────────────────────────────

#[cfg(not(any(feature = "midi-int", feature = "midi-float")))]
compile_error!("no MIDI wire format selected: enable 'midi-int' or 'midi-float'");

#[cfg(all(feature = "midi-int", feature = "midi-float"))]
compile_error!("conflicting MIDI wire formats: 'midi-int' and 'midi-float' are both enabled");

// ── Sample format: exactly one ──────────────────────────────────────────

#[cfg(not(feature = "sample-16bit"))]
compile_error!("no sample format selected: enable 'sample-16bit'");

// ── Diagnostic signal: at most one ──────────────────────────────────────

#[cfg(all(feature = "saw-test", feature = "sine-test"))]
compile_error!("multiple diagnostic modes selected: 'saw-test' and 'sine-test' are both enabled");

// ── Status verbosity: exactly one ───────────────────────────────────────

#[cfg(not(any(
    feature = "status-off",
    feature = "status-simple",
    feature = "status-verbose"
)))]
compile_error!(
    "no status verbosity selected: enable one of 'status-off', 'status-simple', 'status-verbose'"
);

#[cfg(all(feature = "status-off", feature = "status-simple"))]
compile_error!("conflicting status verbosity: 'status-off' and 'status-simple' are both enabled");

#[cfg(all(feature = "status-off", feature = "status-verbose"))]
compile_error!("conflicting status verbosity: 'status-off' and 'status-verbose' are both enabled");

#[cfg(all(feature = "status-simple", feature = "status-verbose"))]
compile_error!(
    "conflicting status verbosity: 'status-simple' and 'status-verbose' are both enabled"
);

pub mod boards;
pub mod config;
pub mod diag;
pub mod format;
pub mod midi;
pub mod status;
pub mod timing;

pub use config::{Config, CONFIG};

#[cfg(test)]
mod resolution_tests;

//! Configuration resolver.
//!
//! Combines every selector group into the single immutable [`Config`] value
//! the rest of the firmware consumes, and checks the cross-cutting
//! constraints no individual selector can see: the audio timing must be
//! feasible on the selected board. Violations fail the build; nothing here
//! substitutes a runtime default for a misconfigured parameter.

use crate::boards::{self, BoardProfile};
use crate::diag::{DiagnosticMode, DIAGNOSTIC_MODE};
use crate::format::{SampleFormat, SAMPLE_FORMAT};
use crate::midi::{MidiFormat, MIDI_FORMAT, SERIAL_BAUDRATE};
use crate::status::{StatusVerbosity, STATUS_VERBOSITY};
use crate::timing::{AudioTiming, TIMING};

/// The complete resolved build configuration.
///
/// Constructed exactly once, at compile time, as [`CONFIG`]. Consumers take
/// it (or the one field they need) by value or shared reference and never
/// write to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub board: BoardProfile,
    pub timing: AudioTiming,
    pub sample_format: SampleFormat,
    pub midi_format: MidiFormat,
    pub diagnostic: DiagnosticMode,
    pub status: StatusVerbosity,
    pub serial_baud: u32,
}

impl Config {
    /// Gather the active selection of every group.
    ///
    /// Deterministic: the same feature set always yields the same value.
    pub const fn resolve() -> Self {
        Config {
            board: boards::PROFILE,
            timing: TIMING,
            sample_format: SAMPLE_FORMAT,
            midi_format: MIDI_FORMAT,
            diagnostic: DIAGNOSTIC_MODE,
            status: STATUS_VERBOSITY,
            serial_baud: SERIAL_BAUDRATE,
        }
    }
}

/// The configuration of this build.
pub const CONFIG: Config = Config::resolve();

// Cross-cutting feasibility checks against the active board.
const _: () = assert!(
    CONFIG.timing.sample_rate <= CONFIG.board.max_sample_rate_hz,
    "sample rate exceeds what the selected board's codec bus sustains"
);
const _: () = assert!(
    CONFIG.timing.block_period_us() >= CONFIG.board.min_block_period_us,
    "buffer too small: block period is below the selected board's processing headroom"
);

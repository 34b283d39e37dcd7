//! MIDI wire format and serial link parameters.
//!
//! The MIDI parser branches its decode path entirely on the compile-time
//! [`MIDI_FORMAT`] choice; no runtime format sniffing happens. The serial
//! baud rate for the performance-data / console link lives here too.

/// Wire encoding of incoming performance data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiFormat {
    /// Controller values decoded as raw 7-bit integers.
    Int,
    /// Controller values decoded as normalized floats.
    Float,
}

/// The wire format active in this build.
#[cfg(feature = "midi-int")]
pub const MIDI_FORMAT: MidiFormat = MidiFormat::Int;

#[cfg(all(feature = "midi-float", not(feature = "midi-int")))]
pub const MIDI_FORMAT: MidiFormat = MidiFormat::Float;

#[cfg(not(any(feature = "midi-int", feature = "midi-float")))]
pub const MIDI_FORMAT: MidiFormat = MidiFormat::Int;

/// Baud rate of the serial link carrying MIDI and status traffic.
pub const SERIAL_BAUDRATE: u32 = 115_200;

const _: () = assert!(SERIAL_BAUDRATE > 0, "invalid serial baud rate");

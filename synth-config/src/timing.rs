//! Audio-engine timing parameters.
//!
//! [`SAMPLE_RATE`] and [`SAMPLE_BUFFER_SIZE`] together fix the real-time
//! deadline of the audio pipeline: one block of `SAMPLE_BUFFER_SIZE` samples
//! must be produced every `SAMPLE_BUFFER_SIZE / SAMPLE_RATE` seconds. A
//! smaller buffer lowers the latency from an incoming MIDI event to audible
//! output but raises the interrupt overhead fraction; this crate does not
//! auto-tune that trade-off, it only exposes both values together and checks
//! them against the active board's bounds (see `config.rs`).

/// Audio sample rate in Hz.
pub const SAMPLE_RATE: u32 = 48_000;

/// Samples per processing block.
pub const SAMPLE_BUFFER_SIZE: usize = 48;

const _: () = assert!(SAMPLE_RATE > 0, "invalid sample rate: must be positive");
const _: () = assert!(SAMPLE_BUFFER_SIZE > 0, "invalid buffer size: must be positive");

/// Resolved sample rate / buffer size pair.
///
/// Consumers size their buffers from `buffer_size` and schedule processing
/// from `block_period_us`; the two values are never exposed separately so a
/// feasibility check always sees both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioTiming {
    pub sample_rate: u32,
    pub buffer_size: usize,
}

impl AudioTiming {
    /// Duration of one processing block in microseconds (rounded down).
    pub const fn block_period_us(&self) -> u32 {
        (self.buffer_size as u64 * 1_000_000 / self.sample_rate as u64) as u32
    }

    /// Processing blocks per second (rounded down).
    pub const fn blocks_per_second(&self) -> u32 {
        self.sample_rate / self.buffer_size as u32
    }
}

/// The timing pair active in this build.
pub const TIMING: AudioTiming = AudioTiming {
    sample_rate: SAMPLE_RATE,
    buffer_size: SAMPLE_BUFFER_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_period_is_one_millisecond() {
        // 48 samples at 48 kHz.
        assert_eq!(TIMING.block_period_us(), 1_000);
        assert_eq!(TIMING.blocks_per_second(), 1_000);
    }

    #[test]
    fn block_period_rounds_down() {
        let t = AudioTiming {
            sample_rate: 44_100,
            buffer_size: 64,
        };
        // 64 / 44100 s = 1451.24... us
        assert_eq!(t.block_period_us(), 1_451);
    }
}

//! Audio sample numeric format.
//!
//! One format is active per build and every buffer in the pipeline uses it;
//! mixed-width buffers are not permitted. Adding a new width means adding a
//! variant, a feature gate and an alias here, not a runtime option.

/// Supported sample representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleFormat {
    /// Signed 16-bit.
    S16,
}

impl SampleFormat {
    /// Sample width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            SampleFormat::S16 => 16,
        }
    }

    /// Sample width in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

/// The sample type every audio buffer in the firmware uses.
#[cfg(feature = "sample-16bit")]
pub type Sample = i16;

/// The sample format active in this build.
#[cfg(feature = "sample-16bit")]
pub const SAMPLE_FORMAT: SampleFormat = SampleFormat::S16;

// Keeps a format-less build down to the single lib.rs compile_error.
#[cfg(not(feature = "sample-16bit"))]
pub type Sample = i16;
#[cfg(not(feature = "sample-16bit"))]
pub const SAMPLE_FORMAT: SampleFormat = SampleFormat::S16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_type_matches_declared_width() {
        assert_eq!(core::mem::size_of::<Sample>(), SAMPLE_FORMAT.bytes());
        assert_eq!(SAMPLE_FORMAT.bits(), 16);
    }
}

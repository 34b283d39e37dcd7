//! Built-in diagnostic test signals for hardware bring-up.
//!
//! When a test mode is active the audio pipeline substitutes a fixed
//! deterministic waveform for the polyphonic voice path, so the analog
//! output chain can be verified before any synthesis code is trusted.
//! Production builds select [`DiagnosticMode::None`], which is the default
//! when neither `saw-test` nor `sine-test` is enabled.

/// Test waveform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticMode {
    /// Normal synthesis; no test signal.
    None,
    /// Full-scale sawtooth at a fixed frequency.
    SawTest,
    /// Full-scale sine at a fixed frequency.
    SineTest,
}

impl DiagnosticMode {
    /// True when the build outputs a test signal instead of synthesized audio.
    pub const fn is_active(self) -> bool {
        !matches!(self, DiagnosticMode::None)
    }
}

/// The diagnostic mode active in this build.
#[cfg(feature = "saw-test")]
pub const DIAGNOSTIC_MODE: DiagnosticMode = DiagnosticMode::SawTest;

#[cfg(all(feature = "sine-test", not(feature = "saw-test")))]
pub const DIAGNOSTIC_MODE: DiagnosticMode = DiagnosticMode::SineTest;

#[cfg(not(any(feature = "saw-test", feature = "sine-test")))]
pub const DIAGNOSTIC_MODE: DiagnosticMode = DiagnosticMode::None;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(feature = "saw-test", feature = "sine-test")))]
    #[test]
    fn default_build_outputs_no_test_signal() {
        assert_eq!(DIAGNOSTIC_MODE, DiagnosticMode::None);
        assert!(!DIAGNOSTIC_MODE.is_active());
    }

    #[test]
    fn only_none_is_inactive() {
        assert!(!DiagnosticMode::None.is_active());
        assert!(DiagnosticMode::SawTest.is_active());
        assert!(DiagnosticMode::SineTest.is_active());
    }
}

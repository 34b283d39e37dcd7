//! Status-reporting verbosity.
//!
//! Controls how much runtime diagnostic text the status subsystem emits
//! over the serial link. Resolved here alongside the other selectors so the
//! whole build configuration lives in one place.

/// How chatty the status reporter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusVerbosity {
    /// No status output.
    Off,
    /// One-line periodic status.
    Simple,
    /// Full per-event reporting.
    Verbose,
}

/// The verbosity active in this build.
#[cfg(all(feature = "status-off", not(any(feature = "status-simple", feature = "status-verbose"))))]
pub const STATUS_VERBOSITY: StatusVerbosity = StatusVerbosity::Off;

#[cfg(all(feature = "status-simple", not(feature = "status-verbose")))]
pub const STATUS_VERBOSITY: StatusVerbosity = StatusVerbosity::Simple;

#[cfg(feature = "status-verbose")]
pub const STATUS_VERBOSITY: StatusVerbosity = StatusVerbosity::Verbose;

#[cfg(not(any(
    feature = "status-off",
    feature = "status-simple",
    feature = "status-verbose"
)))]
pub const STATUS_VERBOSITY: StatusVerbosity = StatusVerbosity::Simple;

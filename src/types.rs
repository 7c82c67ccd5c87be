//! Core state and error types.

/// The current state of a chronometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChronoState {
    /// Not measuring. Elapsed time is frozen.
    Stopped,

    /// Measuring. Elapsed time grows with the time source.
    Started,
}

impl ChronoState {
    /// Lowercase state name, as rendered in [`Display`](core::fmt::Display)
    /// output.
    pub fn describe(&self) -> &'static str {
        match self {
            ChronoState::Stopped => "stopped",
            ChronoState::Started => "started",
        }
    }
}

impl core::fmt::Display for ChronoState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Misuse errors raised under the strict policy.
///
/// Both indicate a redundant call on the caller's side; the chronometer
/// state is unchanged when they are returned. The relaxed policy defines the
/// same calls as no-ops and never produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChronoError {
    /// `start` was called on a chronometer that is already started.
    AlreadyStarted,

    /// `stop` was called on a chronometer that is already stopped.
    AlreadyStopped,
}

impl core::fmt::Display for ChronoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChronoError::AlreadyStarted => {
                write!(f, "chronometer is already started")
            }
            ChronoError::AlreadyStopped => {
                write!(f, "chronometer is already stopped")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChronoError {}

//! Misuse-handling policies for redundant start/stop calls.
//!
//! The state machine in [`Chronometer`](crate::Chronometer) is shared by both
//! policies; a policy only decides the outcome when `start` finds the timer
//! already started, or `stop` finds it already stopped.

use crate::types::ChronoError;

/// Strategy for handling redundant start/stop calls.
///
/// Selected at construction through the chronometer's type parameter, so the
/// choice costs nothing at runtime.
pub trait MisusePolicy {
    /// Outcome of `start` on an already-started chronometer.
    ///
    /// `Ok(())` lets the call complete as a no-op; an error aborts it with
    /// the state unchanged.
    fn redundant_start() -> Result<(), ChronoError>;

    /// Outcome of `stop` on an already-stopped chronometer.
    fn redundant_stop() -> Result<(), ChronoError>;
}

/// Error-on-misuse policy: redundant calls fail.
#[derive(Debug, Clone, Copy)]
pub struct Strict;

impl MisusePolicy for Strict {
    fn redundant_start() -> Result<(), ChronoError> {
        Err(ChronoError::AlreadyStarted)
    }

    fn redundant_stop() -> Result<(), ChronoError> {
        Err(ChronoError::AlreadyStopped)
    }
}

/// No-op-on-misuse policy: redundant calls are tolerated.
///
/// Useful when start/stop may be nested or issued from multiple call sites.
#[derive(Debug, Clone, Copy)]
pub struct Relaxed;

impl MisusePolicy for Relaxed {
    fn redundant_start() -> Result<(), ChronoError> {
        Ok(())
    }

    fn redundant_stop() -> Result<(), ChronoError> {
        Ok(())
    }
}

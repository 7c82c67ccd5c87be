//! Stopwatch state machine with policy-driven misuse handling.
//!
//! Provides [`Chronometer`] which accumulates elapsed time across start/stop
//! cycles against an injected [`TimeSource`], and [`RunGuard`] for scoped
//! measurements that pair one start with one stop on every exit path.

use core::marker::PhantomData;

use crate::command::ChronoAction;
use crate::policy::{MisusePolicy, Relaxed, Strict};
use crate::time::{Seconds, TimeSource};
use crate::types::{ChronoError, ChronoState};

/// Measures elapsed time across start/stop cycles.
///
/// A chronometer is created stopped with zero accumulated time. Each
/// completed start/stop cycle folds the measured span into the accumulated
/// total; [`elapsed`](Chronometer::elapsed) reads the total at any moment
/// without changing state. [`reset`](Chronometer::reset) zeroes the total
/// and keeps the machine in its current state.
///
/// Redundant calls are handled by the [`MisusePolicy`] type parameter:
/// [`Strict`] (the default) fails them, [`Relaxed`] treats them as no-ops.
/// See [`RelaxedChronometer`].
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `T` - Time source implementation type
/// * `P` - Misuse-handling policy
pub struct Chronometer<'t, T: TimeSource, P: MisusePolicy = Strict> {
    time_source: &'t T,
    state: ChronoState,
    accumulated: Seconds,
    // Anchor of the running span; meaningless while Stopped.
    start_time: Seconds,
    _policy: PhantomData<P>,
}

/// Chronometer that tolerates redundant start/stop calls.
///
/// `start` on a started timer and `stop` on a stopped timer are no-ops
/// instead of errors; everything else behaves exactly like [`Chronometer`].
pub type RelaxedChronometer<'t, T> = Chronometer<'t, T, Relaxed>;

impl<'t, T: TimeSource, P: MisusePolicy> Chronometer<'t, T, P> {
    /// Creates a stopped chronometer with zero accumulated time.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            state: ChronoState::Stopped,
            accumulated: 0.0,
            start_time: 0.0,
            _policy: PhantomData,
        }
    }

    /// Handles an action by dispatching to the corresponding method.
    ///
    /// Convenience for command-based control, e.g. routing [`ChronoAction`]s
    /// received over a queue without matching on them manually.
    ///
    /// # Returns
    /// * `Ok(elapsed)` - The elapsed time after the action took effect (for
    ///   `Reset`, the pre-reset value, matching [`reset`](Self::reset))
    /// * `Err` - The action was a redundant call under the strict policy
    pub fn handle_action(&mut self, action: ChronoAction) -> Result<Seconds, ChronoError> {
        match action {
            ChronoAction::Start => {
                self.start()?;
                Ok(self.elapsed())
            }
            ChronoAction::Stop => self.stop(),
            ChronoAction::Reset => Ok(self.reset()),
        }
    }

    /// Starts measuring.
    ///
    /// Anchors the running span at the time source's current reading and
    /// transitions to `Started`.
    ///
    /// # Errors
    /// `AlreadyStarted` under the strict policy if the chronometer is
    /// already started. The relaxed policy returns the current state without
    /// touching the existing anchor.
    pub fn start(&mut self) -> Result<ChronoState, ChronoError> {
        if self.state == ChronoState::Started {
            P::redundant_start()?;
            return Ok(self.state);
        }

        self.start_time = self.time_source.now();
        self.state = ChronoState::Started;
        Ok(self.state)
    }

    /// Stops measuring and returns the resulting elapsed time.
    ///
    /// Folds the running span into the accumulated total and transitions to
    /// `Stopped`.
    ///
    /// # Errors
    /// `AlreadyStopped` under the strict policy if the chronometer is
    /// already stopped. The relaxed policy returns the current total without
    /// double-counting anything.
    pub fn stop(&mut self) -> Result<Seconds, ChronoError> {
        if self.state == ChronoState::Stopped {
            P::redundant_stop()?;
            return Ok(self.accumulated);
        }

        self.accumulated += self.time_source.now() - self.start_time;
        self.state = ChronoState::Stopped;
        Ok(self.accumulated)
    }

    /// Zeroes the accumulated time and returns the pre-reset elapsed value.
    ///
    /// A started chronometer stays started: its anchor moves to the current
    /// time so it keeps running from zero. Never fails in either policy.
    pub fn reset(&mut self) -> Seconds {
        let before = self.elapsed();

        self.accumulated = 0.0;
        if self.state == ChronoState::Started {
            self.start_time = self.time_source.now();
        }

        before
    }

    /// Returns the total elapsed time.
    ///
    /// The accumulated total, plus the running span if currently started.
    /// Read-only; monotonically non-decreasing while started, frozen while
    /// stopped.
    pub fn elapsed(&self) -> Seconds {
        match self.state {
            ChronoState::Stopped => self.accumulated,
            ChronoState::Started => {
                self.accumulated + (self.time_source.now() - self.start_time)
            }
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> ChronoState {
        self.state
    }

    /// Returns true if currently measuring.
    pub fn is_started(&self) -> bool {
        self.state == ChronoState::Started
    }

    /// Returns true if currently stopped.
    pub fn is_stopped(&self) -> bool {
        self.state == ChronoState::Stopped
    }

    /// Starts the chronometer and returns a guard that stops it on drop.
    ///
    /// The stop happens on every exit path, including early returns and
    /// panic unwinding, so one `measure` always pairs exactly one start with
    /// one stop.
    ///
    /// # Errors
    /// `AlreadyStarted` under the strict policy if already started; no guard
    /// is created in that case.
    pub fn measure(&mut self) -> Result<RunGuard<'_, 't, T, P>, ChronoError> {
        self.start()?;
        Ok(RunGuard { chronometer: self })
    }
}

impl<T: TimeSource, P: MisusePolicy> core::fmt::Display for Chronometer<'_, T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Chronometer {} {:.3}>", self.state.describe(), self.elapsed())
    }
}

/// Scoped measurement created by [`Chronometer::measure`].
///
/// Holds the chronometer mutably borrowed for the duration of the scope and
/// stops it when dropped.
pub struct RunGuard<'g, 't, T: TimeSource, P: MisusePolicy> {
    chronometer: &'g mut Chronometer<'t, T, P>,
}

impl<T: TimeSource, P: MisusePolicy> RunGuard<'_, '_, T, P> {
    /// Elapsed time of the underlying chronometer, including the span
    /// currently being measured.
    pub fn elapsed(&self) -> Seconds {
        self.chronometer.elapsed()
    }
}

impl<T: TimeSource, P: MisusePolicy> Drop for RunGuard<'_, '_, T, P> {
    fn drop(&mut self) {
        // The guard holds the only reference, so the chronometer is still
        // started here and stop cannot report a redundant call.
        let _ = self.chronometer.stop();
    }
}

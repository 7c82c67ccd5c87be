//! Shared test infrastructure for chronometer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use chronometer::{Seconds, TimeSource};

/// Deterministic clock under test control.
///
/// Keeps time as integer milliseconds behind a `Cell`, so tests can advance
/// it through a shared reference while a chronometer is borrowing it. Starts
/// at an arbitrary non-zero epoch to catch code that assumes time begins at
/// zero.
pub struct TestClock {
    millis: Cell<u64>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::at_millis(123_456_789_000)
    }

    pub fn at_millis(millis: u64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    /// Moves the clock forward by a (fractional) number of seconds.
    pub fn advance_secs(&self, secs: f64) {
        self.millis.set(self.millis.get() + (secs * 1000.0) as u64);
    }
}

impl TimeSource for TestClock {
    fn now(&self) -> Seconds {
        self.millis.get() as Seconds / 1000.0
    }
}

/// Floating-point comparison with a tolerance well below the clock's
/// millisecond resolution.
pub fn approx(a: Seconds, b: Seconds) -> bool {
    (a - b).abs() < 1e-9
}

//! Time source abstraction for platform-agnostic clock injection.

/// A point in (or span of) time expressed as floating-point seconds.
pub type Seconds = f64;

/// Trait for abstracting time sources.
///
/// A chronometer never reads a clock directly; it asks its time source.
/// Implement this for your platform clock, or wrap a closure with
/// [`clock_fn`]. Implementations must be cheap and side-effect-free from the
/// caller's perspective.
pub trait TimeSource {
    /// Returns the current time in seconds.
    ///
    /// Only differences between returned values matter, so any epoch works
    /// as long as it is consistent for the lifetime of the source.
    fn now(&self) -> Seconds;
}

/// Adapts a zero-argument closure into a [`TimeSource`].
///
/// Created with [`clock_fn`].
#[derive(Debug, Clone, Copy)]
pub struct ClockFn<F>(F);

impl<F> TimeSource for ClockFn<F>
where
    F: Fn() -> Seconds,
{
    fn now(&self) -> Seconds {
        (self.0)()
    }
}

/// Wraps any `Fn() -> Seconds` closure as a [`TimeSource`].
#[inline]
pub fn clock_fn<F>(f: F) -> ClockFn<F>
where
    F: Fn() -> Seconds,
{
    ClockFn(f)
}

/// Wall-clock time source backed by the operating system.
///
/// Reports seconds since the Unix epoch. A pre-epoch system clock reads as
/// zero rather than failing; the time source contract has no error path.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Seconds {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

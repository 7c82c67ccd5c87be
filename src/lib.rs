#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Chronometer`**: Stopwatch state machine accumulating elapsed seconds across start/stop cycles
//! - **`RelaxedChronometer`**: The same machine with the no-op-on-misuse policy
//! - **`MisusePolicy`** / **`Strict`** / **`Relaxed`**: How redundant start/stop calls are handled
//! - **`TimeSource`**: Trait to implement for your clock; `clock_fn` adapts any `Fn() -> Seconds`
//! - **`RunGuard`**: Scoped measurement, started on creation and stopped on drop
//! - **`ChronometerBank`**: Fixed-capacity set of chronometers sharing one time source
//! - **`ChronoAction`**: Commands for driving chronometers without calling methods directly
//!
//! All durations are `f64` seconds. Inject a deterministic time source to make
//! timing tests exact; see the crate examples above.

pub mod chronometer;
pub mod collection;
pub mod command;
pub mod policy;
pub mod time;
pub mod types;

pub use chronometer::{Chronometer, RelaxedChronometer, RunGuard};
pub use collection::{BankError, ChronometerBank, SlotId};
pub use command::{ChronoAction, ChronoCommand};
pub use policy::{MisusePolicy, Relaxed, Strict};
pub use time::{ClockFn, Seconds, TimeSource, clock_fn};
pub use types::{ChronoError, ChronoState};

#[cfg(feature = "std")]
pub use time::SystemClock;

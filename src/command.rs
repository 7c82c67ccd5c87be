//! Command-based control for chronometers.

/// Actions for controlling chronometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChronoAction {
    /// Start measuring.
    Start,
    /// Stop measuring.
    Stop,
    /// Zero the accumulated time.
    Reset,
}

/// Command targeting a specific chronometer.
///
/// Pairs an action with an identifier so commands can be routed through a
/// [`ChronometerBank`](crate::collection::ChronometerBank) or a queue of the
/// caller's own making.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoCommand<Id> {
    pub slot: Id,
    pub action: ChronoAction,
}

impl<Id> ChronoCommand<Id> {
    /// Creates a command.
    pub fn new(slot: Id, action: ChronoAction) -> Self {
        Self { slot, action }
    }
}

use crate::chronometer::Chronometer;
use crate::command::ChronoAction;
use crate::policy::MisusePolicy;
use crate::time::{Seconds, TimeSource};
use crate::types::{ChronoError, ChronoState};

/// An identifier for a chronometer within a bank.
///
/// A simple wrapper around `usize` providing type safety for slot
/// identifiers. Users pick slot IDs when adding chronometers and use them to
/// target individual timers with commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

impl From<usize> for SlotId {
    fn from(id: usize) -> Self {
        SlotId(id)
    }
}

impl From<SlotId> for usize {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

/// Errors that can occur during bank operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// The specified slot does not hold a chronometer.
    InvalidSlot(SlotId),

    /// Attempted to add a chronometer to an occupied slot.
    DuplicateSlot(SlotId),

    /// The slot ID exceeds the bank's capacity.
    SlotOutOfBounds { id: SlotId, capacity: usize },

    /// A chronometer operation failed.
    Chrono(ChronoError),
}

impl core::fmt::Display for BankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BankError::InvalidSlot(id) => {
                write!(f, "slot {} does not hold a chronometer", id.0)
            }
            BankError::DuplicateSlot(id) => {
                write!(f, "slot {} is already occupied", id.0)
            }
            BankError::SlotOutOfBounds { id, capacity } => {
                write!(f, "slot {} exceeds bank capacity of {}", id.0, capacity)
            }
            BankError::Chrono(err) => {
                write!(f, "chronometer error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BankError {}

impl From<ChronoError> for BankError {
    fn from(err: ChronoError) -> Self {
        BankError::Chrono(err)
    }
}

/// A fixed-capacity set of chronometers sharing one time source.
///
/// Useful for instrumenting several sections of a program with one clock:
/// each section gets a slot, commands are routed by [`SlotId`], and the bank
/// can observe or control all timers at once. Storage is a plain array, so
/// no heap allocation is involved and the bank works on `no_std` targets.
///
/// All timers in a bank share the same misuse policy.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `T` - Time source implementation type
/// * `P` - Misuse-handling policy applied to every slot
/// * `MAX_SLOTS` - Maximum number of chronometers this bank can hold
pub struct ChronometerBank<'t, T: TimeSource, P: MisusePolicy, const MAX_SLOTS: usize> {
    slots: [Option<Chronometer<'t, T, P>>; MAX_SLOTS],
    time_source: &'t T,
}

impl<'t, T: TimeSource, P: MisusePolicy, const MAX_SLOTS: usize>
    ChronometerBank<'t, T, P, MAX_SLOTS>
{
    /// Creates a new empty bank.
    ///
    /// # Arguments
    /// * `time_source` - Reference to the time source shared by all slots
    pub fn new(time_source: &'t T) -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Adds a stopped chronometer in the given slot.
    ///
    /// # Errors
    /// * `DuplicateSlot` - The slot is already occupied
    /// * `SlotOutOfBounds` - The ID exceeds the bank's capacity
    pub fn add(&mut self, id: SlotId) -> Result<(), BankError> {
        let idx = id.0;

        if idx >= MAX_SLOTS {
            return Err(BankError::SlotOutOfBounds {
                id,
                capacity: MAX_SLOTS,
            });
        }

        if self.slots[idx].is_some() {
            return Err(BankError::DuplicateSlot(id));
        }

        self.slots[idx] = Some(Chronometer::new(self.time_source));
        Ok(())
    }

    /// Routes an action to the specified chronometer.
    ///
    /// # Returns
    /// * `Ok(elapsed)` - The slot's elapsed time after the action took
    ///   effect (for `Reset`, the pre-reset value)
    /// * `Err` - Invalid slot, or a redundant call under the strict policy
    pub fn handle_command(
        &mut self,
        id: SlotId,
        action: ChronoAction,
    ) -> Result<Seconds, BankError> {
        Ok(self.get_mut(id)?.handle_action(action)?)
    }

    /// Returns the elapsed time of the specified chronometer.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot is empty or out of bounds.
    pub fn elapsed(&self, id: SlotId) -> Result<Seconds, BankError> {
        Ok(self.get(id)?.elapsed())
    }

    /// Returns the state of the specified chronometer.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot is empty or out of bounds.
    pub fn state(&self, id: SlotId) -> Result<ChronoState, BankError> {
        Ok(self.get(id)?.state())
    }

    /// Sums the elapsed time of every chronometer in the bank.
    ///
    /// Started timers contribute their running span; an empty bank sums to
    /// zero.
    pub fn total_elapsed(&self) -> Seconds {
        self.slots
            .iter()
            .flatten()
            .map(|chrono| chrono.elapsed())
            .sum()
    }

    /// Stops every started chronometer in the bank.
    ///
    /// Stopped slots are skipped, so the batch never trips the strict
    /// policy's redundant-stop error.
    pub fn stop_all(&mut self) {
        for chrono in self.slots.iter_mut().flatten() {
            if chrono.is_started() {
                let _ = chrono.stop();
            }
        }
    }

    /// Resets every chronometer in the bank.
    ///
    /// Started timers stay started and keep running from zero.
    pub fn reset_all(&mut self) {
        for chrono in self.slots.iter_mut().flatten() {
            chrono.reset();
        }
    }

    /// Returns the number of chronometers currently in the bank.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the bank contains no chronometers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the bank holds a chronometer in the given slot.
    pub fn contains(&self, id: SlotId) -> bool {
        let idx = id.0;
        idx < MAX_SLOTS && self.slots[idx].is_some()
    }

    fn get(&self, id: SlotId) -> Result<&Chronometer<'t, T, P>, BankError> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .ok_or(BankError::InvalidSlot(id))
    }

    fn get_mut(&mut self, id: SlotId) -> Result<&mut Chronometer<'t, T, P>, BankError> {
        self.slots
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .ok_or(BankError::InvalidSlot(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Strict;
    use core::cell::Cell;

    struct TestClock {
        millis: Cell<u64>,
    }

    impl TestClock {
        fn new() -> Self {
            Self {
                millis: Cell::new(0),
            }
        }

        fn advance_secs(&self, secs: f64) {
            self.millis.set(self.millis.get() + (secs * 1000.0) as u64);
        }
    }

    impl TimeSource for TestClock {
        fn now(&self) -> Seconds {
            self.millis.get() as Seconds / 1000.0
        }
    }

    fn approx(a: Seconds, b: Seconds) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn can_create_empty_bank() {
        let clock = TestClock::new();
        let bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        assert_eq!(bank.len(), 0);
        assert!(bank.is_empty());
        assert!(approx(bank.total_elapsed(), 0.0));
    }

    #[test]
    fn can_add_chronometers() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.add(SlotId(1)).unwrap();

        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        assert!(bank.contains(SlotId(0)));
        assert!(bank.contains(SlotId(1)));
        assert!(!bank.contains(SlotId(2)));
    }

    #[test]
    fn rejects_duplicate_slot() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        let result = bank.add(SlotId(0));

        assert!(matches!(result, Err(BankError::DuplicateSlot(_))));
    }

    #[test]
    fn rejects_slot_out_of_bounds() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        let result = bank.add(SlotId(10));

        assert!(matches!(result, Err(BankError::SlotOutOfBounds { .. })));
    }

    #[test]
    fn routes_commands_to_slots() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.add(SlotId(1)).unwrap();

        bank.handle_command(SlotId(0), ChronoAction::Start).unwrap();
        clock.advance_secs(2.0);
        let total = bank.handle_command(SlotId(0), ChronoAction::Stop).unwrap();

        assert!(approx(total, 2.0));
        assert_eq!(bank.state(SlotId(0)).unwrap(), ChronoState::Stopped);
        // The untouched slot never ran.
        assert!(approx(bank.elapsed(SlotId(1)).unwrap(), 0.0));
    }

    #[test]
    fn command_on_empty_slot_fails() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        let result = bank.handle_command(SlotId(0), ChronoAction::Start);
        assert!(matches!(result, Err(BankError::InvalidSlot(_))));
    }

    #[test]
    fn strict_misuse_surfaces_through_bank() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.handle_command(SlotId(0), ChronoAction::Start).unwrap();
        let result = bank.handle_command(SlotId(0), ChronoAction::Start);

        assert_eq!(
            result,
            Err(BankError::Chrono(ChronoError::AlreadyStarted))
        );
    }

    #[test]
    fn total_elapsed_aggregates_slots() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.add(SlotId(1)).unwrap();

        bank.handle_command(SlotId(0), ChronoAction::Start).unwrap();
        bank.handle_command(SlotId(1), ChronoAction::Start).unwrap();
        clock.advance_secs(2.0);
        bank.handle_command(SlotId(0), ChronoAction::Stop).unwrap();
        clock.advance_secs(3.0);

        // Slot 0 measured 2s; slot 1 is still running at 5s.
        assert!(approx(bank.total_elapsed(), 7.0));
    }

    #[test]
    fn stop_all_tolerates_stopped_slots() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.add(SlotId(1)).unwrap();
        bank.handle_command(SlotId(1), ChronoAction::Start).unwrap();
        clock.advance_secs(1.0);

        bank.stop_all();

        assert_eq!(bank.state(SlotId(0)).unwrap(), ChronoState::Stopped);
        assert_eq!(bank.state(SlotId(1)).unwrap(), ChronoState::Stopped);
        assert!(approx(bank.elapsed(SlotId(1)).unwrap(), 1.0));
    }

    #[test]
    fn reset_all_keeps_started_slots_running() {
        let clock = TestClock::new();
        let mut bank = ChronometerBank::<_, Strict, 4>::new(&clock);

        bank.add(SlotId(0)).unwrap();
        bank.handle_command(SlotId(0), ChronoAction::Start).unwrap();
        clock.advance_secs(2.0);

        bank.reset_all();

        assert_eq!(bank.state(SlotId(0)).unwrap(), ChronoState::Started);
        assert!(approx(bank.elapsed(SlotId(0)).unwrap(), 0.0));

        clock.advance_secs(1.0);
        assert!(approx(bank.elapsed(SlotId(0)).unwrap(), 1.0));
    }
}

//! Fixed-length lookahead queue of pending states
//!
//! The queue is always full. Slot 0 is the active state; slots 1.. hold
//! what runs next, padded with `Idle`. Popping shifts everything left and
//! refills the tail with `Idle`, so the queue never shrinks.

use super::machine::State;

/// Number of slots, including the active one
pub const QUEUE_LEN: usize = 6;

/// Queue of pending states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateQueue {
    slots: [State; QUEUE_LEN],
}

impl Default for StateQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl StateQueue {
    /// Create a queue holding only `Idle`
    pub const fn new() -> Self {
        Self {
            slots: [State::Idle; QUEUE_LEN],
        }
    }

    /// Create a queue with explicit contents, slot 0 first
    pub const fn from_slots(slots: [State; QUEUE_LEN]) -> Self {
        Self { slots }
    }

    /// The active state (slot 0)
    pub fn active(&self) -> State {
        self.slots[0]
    }

    /// State in a given slot, or `None` past the end
    pub fn get(&self, index: usize) -> Option<State> {
        self.slots.get(index).copied()
    }

    /// All slots, slot 0 first
    pub fn as_slice(&self) -> &[State] {
        &self.slots
    }

    /// Drop the active state and move everything forward
    ///
    /// Returns the state that was replaced.
    pub fn pop(&mut self) -> State {
        let replaced = self.slots[0];
        self.slots.copy_within(1.., 0);
        self.slots[QUEUE_LEN - 1] = State::Idle;
        replaced
    }

    /// Reset every slot from `start` onwards to `Idle`
    ///
    /// Slot 0 is never touched; a `start` of 0 is treated as 1.
    pub fn clear_from(&mut self, start: usize) {
        let start = start.max(1);
        if start < QUEUE_LEN {
            self.slots[start..].fill(State::Idle);
        }
    }

    /// Replace the pending states
    ///
    /// `pending` is written from slot 1 onwards and the remaining slots are
    /// cleared to `Idle`. States beyond the queue capacity are dropped.
    pub fn schedule(&mut self, pending: &[State]) {
        let count = pending.len().min(QUEUE_LEN - 1);
        self.slots[1..=count].copy_from_slice(&pending[..count]);
        self.clear_from(count + 1);
    }
}

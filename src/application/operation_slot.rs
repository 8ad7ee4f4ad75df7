use crate::domain::error::DomainError;
use crate::domain::values::operation_state::UiOperationState;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identifies one dispatch of an operation. Only the ticket handed out by the
/// most recent `try_begin` may settle the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What happened to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerOutcome {
    /// The bridge call ran and its result was applied.
    Settled,
    /// Input failed validation; no bridge call was made.
    Rejected,
    /// The operation was already in flight; no bridge call was made.
    Ignored,
    /// The bridge call ran but a newer dispatch owns the slot, so the result was
    /// dropped. Not produced while the in-flight guard is in force.
    Superseded,
}

/// State holder for one operation, with an in-flight guard checked and set
/// under the same lock.
pub struct OperationSlot<T> {
    inner: Mutex<SlotInner<T>>,
}

struct SlotInner<T> {
    state: UiOperationState<T>,
    generation: u64,
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> OperationSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                state: UiOperationState::Idle,
                generation: 0,
            }),
        }
    }

    pub fn state(&self) -> UiOperationState<T> {
        lock(&self.inner).state.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        lock(&self.inner).state.is_in_flight()
    }

    /// Move to `InFlight` unless a call is already pending.
    pub fn try_begin(&self) -> Option<Ticket> {
        let mut inner = lock(&self.inner);
        if inner.state.is_in_flight() {
            return None;
        }
        inner.generation += 1;
        inner.state = UiOperationState::InFlight;
        Some(Ticket(inner.generation))
    }

    /// Fail locally without dispatching. Returns false if a call is pending.
    pub fn reject(&self, message: impl Into<String>) -> bool {
        let mut inner = lock(&self.inner);
        if inner.state.is_in_flight() {
            return false;
        }
        inner.generation += 1;
        inner.state = UiOperationState::Failed(message.into());
        true
    }

    /// Apply a bridge result. Returns false when `ticket` is stale.
    ///
    /// While a call is pending, `try_begin`, `reject` and `clear` all refuse, so
    /// through the coordinator a live ticket is never outdated. The generation
    /// check still holds the slot to last-dispatched-wins if a future caller
    /// bumps it mid-flight.
    pub fn settle(&self, ticket: Ticket, result: Result<T, DomainError>) -> bool {
        let mut inner = lock(&self.inner);
        if inner.generation != ticket.0 {
            return false;
        }
        inner.state = match result {
            Ok(value) => UiOperationState::Succeeded(value),
            Err(e) => UiOperationState::Failed(e.to_string()),
        };
        true
    }

    /// Drop any displayed result. A pending call is left alone.
    pub fn clear(&self) -> bool {
        let mut inner = lock(&self.inner);
        if inner.state.is_in_flight() {
            return false;
        }
        inner.generation += 1;
        inner.state = UiOperationState::Idle;
        true
    }
}

impl<T: Clone> Default for OperationSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

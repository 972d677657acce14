//! UI state and the reducer that drives it.
//!
//! # Design
//! All mutable UI state lives in one `UiState` value. Every change goes
//! through `UiState::reduce`, which returns any deferred work as data instead
//! of scheduling it. That keeps the reducer synchronous and deterministic. The
//! async side (timers) lives in `session`.

use crate::board::{PetBoard, Restore};
use crate::request_log::RequestLog;
use crate::verb::Verb;

/// Resource path every simulated request is logged against.
pub const PET_PATH: &str = "/api/pet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The user sent a request with this verb.
    Request(Verb),
    /// A previously scheduled restore is due.
    Restore(Restore),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub pets: PetBoard,
    pub log: RequestLog,
    next_invocation: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`. A returned `Restore` must be fed back as
    /// `Action::Restore` once `RESTORE_DELAY` has passed.
    pub fn reduce(&mut self, action: Action) -> Option<Restore> {
        match action {
            Action::Request(verb) => {
                let invocation = self.next_invocation;
                self.next_invocation += 1;
                let restore = self.pets.invoke(verb, invocation);
                self.log.append(verb, PET_PATH);
                restore
            }
            Action::Restore(restore) => {
                self.pets.restore(restore);
                None
            }
        }
    }
}

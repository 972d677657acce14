//! Per-verb pet visibility and mood.
//!
//! # Design
//! The board is a fixed array indexed by `Verb`, so it always holds exactly
//! one `PetState` per verb. Entries are replaced wholesale on every
//! transition, never patched field by field.
//!
//! A DELETE hides its pet and hands back a `Restore` token. Whoever drives the
//! board (see `Session`) is responsible for applying the token later. Tokens
//! are never cancelled or merged: each one resets the pet to the same
//! terminal state when applied.

use serde::Serialize;

use crate::mood::Mood;
use crate::verb::Verb;

/// Visibility and mood of the pet for one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetState {
    pub method: Verb,
    pub mood: Mood,
    pub visible: bool,
    pub color: &'static str,
}

impl PetState {
    /// Resting state every pet starts in.
    pub fn initial(method: Verb) -> Self {
        Self {
            method,
            mood: Mood::Neutral,
            visible: true,
            color: method.profile().color,
        }
    }

    /// State right after `method` was invoked.
    pub fn invoked(method: Verb) -> Self {
        Self {
            method,
            mood: method.mood(),
            visible: method != Verb::Delete,
            color: method.profile().color,
        }
    }

    /// State a deleted pet comes back in.
    pub fn restored(method: Verb) -> Self {
        Self {
            method,
            mood: Mood::Sad,
            visible: true,
            color: method.profile().color,
        }
    }
}

/// Deferred transition scheduled by an invocation, keyed by verb and the
/// invocation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Restore {
    pub verb: Verb,
    pub invocation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetBoard {
    pets: [PetState; 5],
}

impl Default for PetBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PetBoard {
    pub fn new() -> Self {
        Self {
            pets: Verb::ALL.map(PetState::initial),
        }
    }

    pub fn get(&self, verb: Verb) -> &PetState {
        &self.pets[verb.index()]
    }

    /// Pets in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PetState> {
        self.pets.iter()
    }

    /// Apply the immediate effect of a request. Returns the deferred restore
    /// the caller must schedule, if any.
    pub fn invoke(&mut self, verb: Verb, invocation: u64) -> Option<Restore> {
        self.pets[verb.index()] = PetState::invoked(verb);
        (verb == Verb::Delete).then_some(Restore { verb, invocation })
    }

    /// Apply a deferred restore, regardless of what happened since it was
    /// scheduled.
    pub fn restore(&mut self, restore: Restore) {
        self.pets[restore.verb.index()] = PetState::restored(restore.verb);
    }
}

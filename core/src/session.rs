//! Async owner of the UI state.
//!
//! # Design
//! `Session` serializes every transition through one `RwLock`, so a user
//! request and a timer callback never interleave. Restores returned by the
//! reducer are spawned as one-shot tokio tasks and are never tracked or
//! aborted. Overlapping DELETEs each get their own timer.
//!
//! Subscribers are told about every transition through a `watch` channel
//! carrying a revision counter. The counter only tells them to redraw; the
//! state itself is read with `snapshot`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};

use crate::board::Restore;
use crate::state::{Action, UiState};
use crate::verb::Verb;

/// How long a deleted pet stays hidden.
pub const RESTORE_DELAY: Duration = Duration::from_millis(2000);

struct Shared {
    state: RwLock<UiState>,
    revision: watch::Sender<u64>,
    restore_delay: Duration,
}

/// Cloneable handle to a running UI session. Must be used inside a tokio
/// runtime.
#[derive(Clone)]
pub struct Session {
    shared: Arc<Shared>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_restore_delay(RESTORE_DELAY)
    }

    pub fn with_restore_delay(restore_delay: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                state: RwLock::new(UiState::new()),
                revision,
                restore_delay,
            }),
        }
    }

    pub fn restore_delay(&self) -> Duration {
        self.shared.restore_delay
    }

    /// Send a simulated request. Its immediate effects are visible in the
    /// returned snapshot; a DELETE's restore lands `restore_delay` later.
    pub async fn send(&self, verb: Verb) -> UiState {
        let (snapshot, restore) = {
            let mut state = self.shared.state.write().await;
            let restore = state.reduce(Action::Request(verb));
            (state.clone(), restore)
        };
        self.shared.publish();
        tracing::debug!(%verb, "request applied");

        if let Some(restore) = restore {
            self.schedule(restore);
        }
        snapshot
    }

    pub async fn snapshot(&self) -> UiState {
        self.shared.state.read().await.clone()
    }

    /// Receiver that changes after every transition, timers included.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    fn schedule(&self, restore: Restore) {
        let shared = Arc::clone(&self.shared);
        tracing::debug!(
            verb = %restore.verb,
            invocation = restore.invocation,
            delay_ms = shared.restore_delay.as_millis() as u64,
            "restore scheduled"
        );
        tokio::spawn(async move {
            tokio::time::sleep(shared.restore_delay).await;
            shared.state.write().await.reduce(Action::Restore(restore));
            shared.publish();
            tracing::debug!(
                verb = %restore.verb,
                invocation = restore.invocation,
                "restore applied"
            );
        });
    }
}

impl Shared {
    fn publish(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

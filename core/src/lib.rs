//! State machine and API client core for the HTTP pets demo.
//!
//! # Overview
//! Five pets, one per HTTP verb, react to simulated requests by changing mood
//! or briefly disappearing, while a bounded log records what was sent.
//!
//! # Design
//! - `UiState::reduce` is the single synchronous transition function; it
//!   returns deferred work (`Restore`) as data.
//! - `Session` owns a `UiState` inside a tokio runtime and turns returned
//!   restores into one-shot timers.
//! - `PetClient` builds `HttpRequest` values and parses `HttpResponse` values
//!   for the mock endpoint without touching the network (host-does-IO).

pub mod board;
pub mod client;
pub mod error;
pub mod http;
pub mod mood;
pub mod request_log;
pub mod session;
pub mod state;
pub mod types;
pub mod verb;

pub use board::{PetBoard, PetState, Restore};
pub use client::PetClient;
pub use error::{ApiError, ParseVerbError};
pub use http::{HttpRequest, HttpResponse};
pub use mood::{Animation, Mood};
pub use request_log::{LogEntry, RequestLog, LOG_CAPACITY};
pub use session::{Session, RESTORE_DELAY};
pub use state::{Action, UiState, PET_PATH};
pub use types::{Envelope, EnvelopeStatus};
pub use verb::{PetProfile, Verb};

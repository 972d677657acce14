//! Error types for verb parsing and the pet API client.
//!
//! # Design
//! The state machine itself cannot fail. These errors only come from the
//! edges: turning user text into a `Verb`, and interpreting responses from the
//! mock endpoint.

use thiserror::Error;

use crate::verb::Verb;

/// A method name outside GET/POST/PUT/PATCH/DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP verb: {0}")]
pub struct ParseVerbError(pub String);

/// Errors returned by `PetClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one the verb expects.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The envelope names a different method than the request used.
    #[error("envelope is for {actual}, expected {expected}")]
    MethodMismatch { expected: Verb, actual: String },

    /// The response body could not be deserialized into an envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

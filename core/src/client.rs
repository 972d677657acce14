//! Stateless HTTP request builder and response parser for the pet endpoint.
//!
//! # Design
//! `PetClient` holds only a `base_url`. Each verb has a `build_*` method that
//! produces an `HttpRequest`; every response goes through `parse_envelope`.
//! The caller executes the actual HTTP round-trip, keeping the core free of
//! network I/O.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::PET_PATH;
use crate::types::Envelope;
use crate::verb::Verb;

#[derive(Debug, Clone)]
pub struct PetClient {
    base_url: String,
}

impl PetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}{PET_PATH}", self.base_url)
    }

    fn bare(&self, method: Verb) -> HttpRequest {
        HttpRequest {
            method,
            path: self.url(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_body(&self, method: Verb, body: &Value) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get(&self) -> HttpRequest {
        self.bare(Verb::Get)
    }

    pub fn build_create(&self, body: &Value) -> Result<HttpRequest, ApiError> {
        self.with_body(Verb::Post, body)
    }

    pub fn build_replace(&self, body: &Value) -> Result<HttpRequest, ApiError> {
        self.with_body(Verb::Put, body)
    }

    pub fn build_patch(&self, body: &Value) -> Result<HttpRequest, ApiError> {
        self.with_body(Verb::Patch, body)
    }

    pub fn build_delete(&self) -> HttpRequest {
        self.bare(Verb::Delete)
    }

    /// Build the request for any verb. `body` is ignored for GET and DELETE.
    pub fn build(&self, verb: Verb, body: &Value) -> Result<HttpRequest, ApiError> {
        if verb.has_body() {
            self.with_body(verb, body)
        } else {
            Ok(self.bare(verb))
        }
    }

    pub fn parse_envelope(&self, verb: Verb, response: HttpResponse) -> Result<Envelope, ApiError> {
        if response.status != verb.expected_status() {
            return Err(ApiError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }
        let envelope: Envelope =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if envelope.method != verb.as_str() {
            return Err(ApiError::MethodMismatch {
                expected: verb,
                actual: envelope.method,
            });
        }
        Ok(envelope)
    }
}

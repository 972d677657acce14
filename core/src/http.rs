//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; the caller executes the round-trip with whatever
//! client it likes.

use crate::verb::Verb;

/// An HTTP request described as plain data.
///
/// Built by `PetClient::build_*`. The caller executes it and hands the
/// corresponding `HttpResponse` back to `PetClient::parse_envelope`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Verb,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

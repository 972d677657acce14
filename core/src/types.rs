//! Response envelope returned by the mock pet endpoint.
//!
//! # Design
//! Defined independently of the `pet-server` crate. The integration tests
//! catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// Outcome word the endpoint reports for each verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "updated")]
    Updated,
    #[serde(rename = "partially updated")]
    PartiallyUpdated,
    #[serde(rename = "deleted")]
    Deleted,
}

/// `{ message, method, status, data }` as sent by every verb.
///
/// `data` is `None` for DELETE and free-form JSON otherwise, since write verbs
/// splice the request body into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
    pub method: String,
    pub status: EnvelopeStatus,
    pub data: Option<serde_json::Value>,
}

//! Bounded log of the requests sent from the UI.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::verb::Verb;

/// Number of entries kept; older ones are dropped first.
pub const LOG_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub method: Verb,
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

/// Insertion-ordered request log holding at most `LOG_CAPACITY` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLog {
    entries: VecDeque<LogEntry>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY + 1),
        }
    }

    pub fn append(&mut self, method: Verb, url: &str) {
        self.append_at(method, url, Utc::now());
    }

    pub fn append_at(&mut self, method: Verb, url: &str, timestamp: DateTime<Utc>) {
        self.entries.push_back(LogEntry {
            method,
            url: url.to_string(),
            timestamp,
        });
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Newest first, the order the log is displayed in.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }
}

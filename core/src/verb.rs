//! The five HTTP verbs modelled by the demo and their static pet profiles.
//!
//! # Design
//! `Verb` is a closed enum so every table keyed by it (pet board, colors,
//! moods) is total by construction. The display order of `Verb::ALL` is the
//! order the front end draws the pet cards in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseVerbError;
use crate::mood::Mood;

/// HTTP method of a request, and the key of each pet on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Static presentation data for the pet that stands for a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetProfile {
    pub emoji: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    /// Slot of this verb in fixed-size per-verb tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn mood(self) -> Mood {
        match self {
            Verb::Get => Mood::Happy,
            Verb::Post => Mood::Excited,
            Verb::Put => Mood::Transformed,
            Verb::Patch => Mood::Changed,
            Verb::Delete => Mood::Sad,
        }
    }

    /// Whether the request carries a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }

    /// Status code the mock endpoint answers this verb with.
    pub fn expected_status(self) -> u16 {
        match self {
            Verb::Post => 201,
            _ => 200,
        }
    }

    pub fn profile(self) -> PetProfile {
        match self {
            Verb::Get => PetProfile {
                emoji: "🐶",
                name: "Doggo",
                color: "#3b82f6",
                description: "Used to retrieve data. The server returns the requested resource. It should have no side effects.",
            },
            Verb::Post => PetProfile {
                emoji: "🐱",
                name: "Kitto",
                color: "#ef4444",
                description: "Used to create new resources. Often causes changes on the server or side effects.",
            },
            Verb::Put => PetProfile {
                emoji: "🦊",
                name: "Foxxy",
                color: "#f59e0b",
                description: "Used to update a resource completely. Replaces the entire resource at the specified URI.",
            },
            Verb::Patch => PetProfile {
                emoji: "🐼",
                name: "Pando",
                color: "#8b5cf6",
                description: "Used to partially update a resource. Only modifies the fields provided in the request.",
            },
            Verb::Delete => PetProfile {
                emoji: "🦥",
                name: "Slothy",
                color: "#6b7280",
                description: "Requests that the server deletes the resource identified by the URI. May cause side effects.",
            },
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ParseVerbError;

    /// Case-insensitive, so front ends can accept `get` as well as `GET`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVerbError(s.to_string()))
    }
}
